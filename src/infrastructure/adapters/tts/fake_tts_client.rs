//! Fake TTS Client - 进程内合成服务
//!
//! 不访问网络，按请求确定性地生成音频字节；用于本地开发和测试

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    FragmentStream, InferRequest, SpeechFragment, TtsEnginePort, TtsError, VoiceDescriptor,
};

/// 推荐音色目录 (short_name, gender, locale, friendly_name)
const RECOMMENDED_VOICES: &[(&str, &str, &str, &str)] = &[
    ("zh-CN-XiaoxiaoNeural", "Female", "zh-CN", "Microsoft Xiaoxiao Online (Natural) - Chinese (Mainland)"),
    ("zh-CN-YunxiNeural", "Male", "zh-CN", "Microsoft Yunxi Online (Natural) - Chinese (Mainland)"),
    ("zh-CN-XiaoyiNeural", "Female", "zh-CN", "Microsoft Xiaoyi Online (Natural) - Chinese (Mainland)"),
    ("en-US-AriaNeural", "Female", "en-US", "Microsoft Aria Online (Natural) - English (United States)"),
    ("en-US-GuyNeural", "Male", "en-US", "Microsoft Guy Online (Natural) - English (United States)"),
    ("en-US-JennyNeural", "Female", "en-US", "Microsoft Jenny Online (Natural) - English (United States)"),
    ("en-GB-SoniaNeural", "Female", "en-GB", "Microsoft Sonia Online (Natural) - English (United Kingdom)"),
    ("en-GB-RyanNeural", "Male", "en-GB", "Microsoft Ryan Online (Natural) - English (United Kingdom)"),
];

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频文件；为空时按请求生成字节
    pub audio_file_path: Option<PathBuf>,
    /// 每个音频片段的字节数
    pub fragment_size: usize,
    /// 模拟的合成延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_file_path: None,
            fragment_size: 64,
            latency_ms: 0,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    /// 固定音频数据
    audio_data: Option<Vec<u8>>,
    calls: AtomicUsize,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Result<Self, std::io::Error> {
        let audio_data = match &config.audio_file_path {
            Some(path) => Some(std::fs::read(path)?),
            None => None,
        };

        tracing::info!(
            audio_file = ?config.audio_file_path,
            fragment_size = config.fragment_size,
            latency_ms = config.latency_ms,
            "FakeTtsClient initialized"
        );

        Ok(Self {
            config,
            audio_data,
            calls: AtomicUsize::new(0),
        })
    }

    /// 使用默认配置创建（不读取文件，不会失败）
    pub fn with_defaults() -> Self {
        Self {
            config: FakeTtsClientConfig::default(),
            audio_data: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// `stream` 被调用的次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 某个块会得到的音频字节
    pub fn render(&self, request: &InferRequest) -> Vec<u8> {
        match &self.audio_data {
            Some(data) => data.clone(),
            None => format!(
                "[{}|{}|{}]{}",
                request.voice, request.rate, request.pitch, request.text
            )
            .into_bytes(),
        }
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn stream(&self, request: InferRequest) -> Result<FragmentStream, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: rendering chunk"
        );

        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        let audio = self.render(&request);
        let fragment_size = self.config.fragment_size.max(1);

        let mut fragments = vec![Ok(SpeechFragment::Metadata(format!(
            "{{\"type\":\"WordBoundary\",\"text\":{:?}}}",
            request.text
        )))];
        fragments.extend(
            audio
                .chunks(fragment_size)
                .map(|piece| Ok(SpeechFragment::Audio(piece.to_vec()))),
        );

        Ok(stream::iter(fragments).boxed())
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, TtsError> {
        Ok(RECOMMENDED_VOICES
            .iter()
            .map(|(short_name, gender, locale, friendly_name)| VoiceDescriptor {
                short_name: short_name.to_string(),
                gender: gender.to_string(),
                locale: locale.to_string(),
                friendly_name: friendly_name.to_string(),
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::{Pitch, Rate, VoiceName};
    use std::io::Write;

    fn infer_request(text: &str) -> InferRequest {
        InferRequest {
            text: text.to_string(),
            voice: VoiceName::new("en-US-GuyNeural").unwrap(),
            rate: Rate::parse("+10%").unwrap(),
            pitch: Pitch::default(),
        }
    }

    async fn collect(client: &FakeTtsClient, text: &str) -> Vec<SpeechFragment> {
        let stream = client.stream(infer_request(text)).await.unwrap();
        stream
            .map(|fragment| fragment.unwrap())
            .collect::<Vec<_>>()
            .await
    }

    #[tokio::test]
    async fn test_metadata_then_audio_fragments() {
        let client = FakeTtsClient::new(FakeTtsClientConfig {
            fragment_size: 4,
            ..Default::default()
        })
        .unwrap();

        let fragments = collect(&client, "Hi there.").await;

        assert!(matches!(fragments[0], SpeechFragment::Metadata(_)));
        let audio: Vec<u8> = fragments[1..]
            .iter()
            .flat_map(|fragment| match fragment {
                SpeechFragment::Audio(data) => data.clone(),
                SpeechFragment::Metadata(_) => panic!("metadata after audio"),
            })
            .collect();
        assert_eq!(audio, b"[en-US-GuyNeural|+10%|+0Hz]Hi there.".to_vec());
        assert!(fragments.len() > 2);
    }

    #[tokio::test]
    async fn test_fixed_audio_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"RIFF fixed audio").unwrap();

        let client = FakeTtsClient::new(FakeTtsClientConfig {
            audio_file_path: Some(file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.render(&infer_request("anything")), b"RIFF fixed audio".to_vec());
    }

    #[test]
    fn test_missing_audio_file_fails() {
        let result = FakeTtsClient::new(FakeTtsClientConfig {
            audio_file_path: Some(PathBuf::from("/nonexistent/voxgate/fake.mp3")),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_counts_calls() {
        let client = FakeTtsClient::with_defaults();
        collect(&client, "One.").await;
        collect(&client, "Two.").await;
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_recommended_catalog() {
        let client = FakeTtsClient::with_defaults();
        let voices = client.list_voices().await.unwrap();

        assert_eq!(voices.len(), 8);
        assert!(voices
            .iter()
            .any(|v| v.short_name == "zh-CN-XiaoxiaoNeural" && v.gender == "Female"));
        assert!(voices.iter().all(|v| v.short_name.starts_with(&v.locale)));
    }
}
