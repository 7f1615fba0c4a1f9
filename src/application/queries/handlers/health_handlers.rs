//! Health Query Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioCachePort, TtsEnginePort};
use crate::application::queries::{GetHealth, HealthReport};

/// GetHealth Handler
pub struct GetHealthHandler {
    audio_cache: Arc<dyn AudioCachePort>,
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl GetHealthHandler {
    pub fn new(audio_cache: Arc<dyn AudioCachePort>, tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self {
            audio_cache,
            tts_engine,
        }
    }

    pub async fn handle(&self, _query: GetHealth) -> Result<HealthReport, ApplicationError> {
        let cache_stats = self.audio_cache.stats().await?;
        let provider_healthy = self.tts_engine.health_check().await;

        if !provider_healthy {
            tracing::warn!("TTS provider health check failed");
        }

        Ok(HealthReport {
            cache_dir: self.audio_cache.location().to_path_buf(),
            cache_stats,
            format: self.audio_cache.format(),
            provider_healthy,
            checked_at: Utc::now(),
        })
    }
}
