//! TTS Engine Port - 外部合成服务抽象
//!
//! 定义合成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::synthesis::{Pitch, Rate, VoiceName};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成服务流式返回的片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechFragment {
    /// 音频数据，按到达顺序拼接
    Audio(Vec<u8>),
    /// 元数据（如词边界），不参与拼接
    Metadata(String),
}

/// 单个文本块的片段流
///
/// 惰性、有限、不可重放；调用方必须读到结束再处理下一个块。
pub type FragmentStream = BoxStream<'static, Result<SpeechFragment, TtsError>>;

/// 单块合成请求
#[derive(Debug, Clone)]
pub struct InferRequest {
    /// 要合成的文本块（已清洗）
    pub text: String,
    pub voice: VoiceName,
    pub rate: Rate,
    pub pitch: Pitch,
}

/// 音色目录条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub short_name: String,
    pub gender: String,
    pub locale: String,
    pub friendly_name: String,
}

/// TTS Engine Port
///
/// 外部合成服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 为一个文本块打开音频片段流
    async fn stream(&self, request: InferRequest) -> Result<FragmentStream, TtsError>;

    /// 查询合成服务支持的音色
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, TtsError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
