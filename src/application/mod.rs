//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioCache）
//! - orchestrator: 清洗 → 分块 → 逐块合成 → 拼接
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod orchestrator;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{ClearCacheHandler, SynthesizeSpeechHandler},
    ClearCache, ClearCacheResponse, SynthesizeSpeech, SynthesizeSpeechResponse,
};

pub use error::ApplicationError;

pub use orchestrator::SynthesisOrchestrator;

pub use ports::{
    // Audio cache
    AudioCachePort,
    CacheError,
    CacheStats,
    // TTS engine
    FragmentStream,
    InferRequest,
    SpeechFragment,
    TtsEnginePort,
    TtsError,
    VoiceDescriptor,
};

pub use queries::{
    handlers::{GetHealthHandler, ListVoicesHandler},
    GetHealth, HealthReport, ListVoices,
};
