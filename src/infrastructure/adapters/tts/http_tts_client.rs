//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用外部 TTS 服务
//!
//! 外部 TTS API:
//! POST {base_url}/api/tts/stream
//! Request: {"text": "...", "voice": "...", "rate": "+0%", "pitch": "+0Hz"}  (JSON)
//! Response: 流式音频 body，每个 body chunk 视为一个音频片段
//!
//! GET {base_url}/api/tts/voices
//! Response: [{"ShortName": "...", "Gender": "...", "Locale": "...", "FriendlyName": "..."}]

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    FragmentStream, InferRequest, SpeechFragment, TtsEnginePort, TtsError, VoiceDescriptor,
};

/// TTS 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
    pitch: &'a str,
}

/// 外部服务返回的音色条目
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProviderVoice {
    short_name: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    locale: String,
    #[serde(default)]
    friendly_name: String,
}

impl From<ProviderVoice> for VoiceDescriptor {
    fn from(voice: ProviderVoice) -> Self {
        Self {
            short_name: voice.short_name,
            gender: voice.gender,
            locale: voice.locale,
            friendly_name: voice.friendly_name,
        }
    }
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 单个请求的超时时间（秒），包含读取音频流
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

fn map_request_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

/// 非 2xx 响应转为错误，携带状态码和响应体
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, TtsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(TtsError::ServiceError(format!(
        "HTTP {}: {}",
        status, error_text
    )))
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn stream(&self, request: InferRequest) -> Result<FragmentStream, TtsError> {
        let url = self.url("/api/tts/stream");
        let body = TtsHttpRequest {
            text: &request.text,
            voice: request.voice.as_str(),
            rate: request.rate.as_str(),
            pitch: request.pitch.as_str(),
        };

        tracing::debug!(
            url = %url,
            text_len = request.text.len(),
            voice = %request.voice,
            "Sending TTS stream request"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;
        let response = ensure_success(response).await?;

        let fragments = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| SpeechFragment::Audio(bytes.to_vec()))
                .map_err(map_request_error)
        });

        Ok(fragments.boxed())
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, TtsError> {
        let response = self
            .client
            .get(self.url("/api/tts/voices"))
            .send()
            .await
            .map_err(map_request_error)?;
        let response = ensure_success(response).await?;

        let voices: Vec<ProviderVoice> = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        Ok(voices.into_iter().map(VoiceDescriptor::from).collect())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url("/health"))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
