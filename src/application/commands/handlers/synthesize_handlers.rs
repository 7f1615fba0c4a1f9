//! Synthesize Command Handler
//!
//! 校验 → 补默认值 → 查缓存 → 未命中时合成并写入缓存

use std::sync::Arc;

use crate::application::commands::{SynthesizeSpeech, SynthesizeSpeechResponse};
use crate::application::error::ApplicationError;
use crate::application::orchestrator::SynthesisOrchestrator;
use crate::application::ports::AudioCachePort;
use crate::domain::normalize;
use crate::domain::synthesis::{
    default_voice_for_language, Pitch, Rate, SynthesisRequest, VoiceName,
};

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// SynthesizeSpeech Handler
pub struct SynthesizeSpeechHandler {
    audio_cache: Arc<dyn AudioCachePort>,
    orchestrator: Arc<SynthesisOrchestrator>,
    default_voice: VoiceName,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        audio_cache: Arc<dyn AudioCachePort>,
        orchestrator: Arc<SynthesisOrchestrator>,
        default_voice: VoiceName,
    ) -> Self {
        Self {
            audio_cache,
            orchestrator,
            default_voice,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        if command.text.is_empty() {
            return Err(ApplicationError::validation("No text provided"));
        }
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation(
                "Text is empty or whitespace only",
            ));
        }

        let request = self.build_request(command)?;

        // 清洗失败时不查缓存也不调用合成服务
        let text = normalize(&request.text)?;
        let fingerprint = request.fingerprint();
        let format = self.audio_cache.format();

        if let Some(audio_data) = self.audio_cache.lookup(&fingerprint).await? {
            tracing::info!(
                fingerprint = fingerprint.short(),
                voice = %request.voice,
                size = audio_data.len(),
                "Serving cached audio"
            );
            return Ok(SynthesizeSpeechResponse {
                audio_data,
                format,
                fingerprint,
                cache_hit: true,
            });
        }

        tracing::info!(
            fingerprint = fingerprint.short(),
            voice = %request.voice,
            rate = %request.rate,
            pitch = %request.pitch,
            cleaned_chars = text.char_count(),
            "Cache miss, synthesizing"
        );

        let audio_data = self
            .orchestrator
            .synthesize_normalized(&text, &request)
            .await?;

        self.audio_cache.insert(&fingerprint, &audio_data).await?;

        Ok(SynthesizeSpeechResponse {
            audio_data,
            format,
            fingerprint,
            cache_hit: false,
        })
    }

    /// 构造强类型的合成请求
    ///
    /// 音色：显式指定 > 语言默认音色 > 配置的默认音色。
    /// 语速和音调格式错误时回退到默认值，不拒绝请求。
    fn build_request(&self, command: SynthesizeSpeech) -> Result<SynthesisRequest, ApplicationError> {
        let voice = match non_blank(&command.voice) {
            Some(name) => VoiceName::new(name)?,
            None => match non_blank(&command.language).and_then(default_voice_for_language) {
                Some(name) => VoiceName::new(name)?,
                None => self.default_voice.clone(),
            },
        };

        let rate = match non_blank(&command.rate) {
            None => Rate::default(),
            Some(raw) => Rate::parse(raw).unwrap_or_else(|| {
                tracing::warn!(rate = raw, fallback = Rate::DEFAULT, "Invalid rate, using default");
                Rate::default()
            }),
        };

        let pitch = match non_blank(&command.pitch) {
            None => Pitch::default(),
            Some(raw) => Pitch::parse(raw).unwrap_or_else(|| {
                tracing::warn!(pitch = raw, fallback = Pitch::DEFAULT, "Invalid pitch, using default");
                Pitch::default()
            }),
        };

        Ok(SynthesisRequest::new(command.text, voice, rate, pitch))
    }
}
