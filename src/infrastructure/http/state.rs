//! Application State
//!
//! 持有端口实现和所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ClearCacheHandler, SynthesizeSpeechHandler,
    // Query handlers
    GetHealthHandler, ListVoicesHandler,
    // Ports
    AudioCachePort, TtsEnginePort,
    SynthesisOrchestrator,
};
use crate::domain::synthesis::VoiceName;

/// 对外暴露的服务名
pub const SERVICE_NAME: &str = "voxgate";

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,
    pub clear_cache_handler: ClearCacheHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
    pub get_health_handler: GetHealthHandler,
}

impl AppState {
    pub fn new(
        audio_cache: Arc<dyn AudioCachePort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        max_chunk_chars: usize,
        default_voice: VoiceName,
    ) -> Self {
        let orchestrator = Arc::new(SynthesisOrchestrator::new(
            tts_engine.clone(),
            max_chunk_chars,
        ));

        Self {
            // Command handlers
            synthesize_handler: SynthesizeSpeechHandler::new(
                audio_cache.clone(),
                orchestrator,
                default_voice,
            ),
            clear_cache_handler: ClearCacheHandler::new(audio_cache.clone()),

            // Query handlers
            list_voices_handler: ListVoicesHandler::new(tts_engine.clone()),
            get_health_handler: GetHealthHandler::new(audio_cache, tts_engine),
        }
    }
}
