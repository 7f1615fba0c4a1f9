//! Cache Command Handlers

use std::sync::Arc;

use crate::application::commands::{ClearCache, ClearCacheResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::AudioCachePort;

/// ClearCache Handler
pub struct ClearCacheHandler {
    audio_cache: Arc<dyn AudioCachePort>,
}

impl ClearCacheHandler {
    pub fn new(audio_cache: Arc<dyn AudioCachePort>) -> Self {
        Self { audio_cache }
    }

    pub async fn handle(&self, _command: ClearCache) -> Result<ClearCacheResponse, ApplicationError> {
        let cleared = self.audio_cache.clear().await?;

        tracing::info!(
            cache_dir = %self.audio_cache.location().display(),
            cleared = cleared,
            "Cache cleared"
        );

        Ok(ClearCacheResponse { cleared })
    }
}
