//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{TtsEnginePort, VoiceDescriptor};
use crate::application::queries::ListVoices;

/// ListVoices Handler
///
/// 直接代理合成服务的音色目录
pub struct ListVoicesHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl ListVoicesHandler {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self { tts_engine }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<VoiceDescriptor>, ApplicationError> {
        let voices = self.tts_engine.list_voices().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch voice catalog");
            ApplicationError::provider(format!("Failed to fetch voices: {}", e))
        })?;

        tracing::debug!(count = voices.len(), "Voice catalog fetched");

        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{FragmentStream, InferRequest, TtsError};
    use crate::infrastructure::adapters::tts::FakeTtsClient;
    use async_trait::async_trait;

    struct UnreachableEngine;

    #[async_trait]
    impl TtsEnginePort for UnreachableEngine {
        async fn stream(&self, _request: InferRequest) -> Result<FragmentStream, TtsError> {
            Err(TtsError::NetworkError("connection refused".to_string()))
        }

        async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, TtsError> {
            Err(TtsError::NetworkError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_lists_provider_catalog() {
        let handler = ListVoicesHandler::new(Arc::new(FakeTtsClient::with_defaults()));

        let voices = handler.handle(ListVoices).await.unwrap();
        assert!(voices.iter().any(|v| v.short_name == "en-US-AriaNeural"));
    }

    #[tokio::test]
    async fn test_provider_failure() {
        let handler = ListVoicesHandler::new(Arc::new(UnreachableEngine));

        let err = handler.handle(ListVoices).await.unwrap_err();
        assert_eq!(err.kind(), "ProviderError");
        assert!(err.to_string().contains("connection refused"));
    }
}
