//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{CacheError, TtsError};
use crate::domain::synthesis::SynthesisError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 清洗后没有可朗读的内容
    #[error("Text validation failed: {0}")]
    EmptyContent(String),

    /// 音色缺失或格式错误
    #[error("{0}")]
    InvalidVoice(String),

    /// 请求参数错误
    #[error("{0}")]
    ValidationError(String),

    /// 外部合成服务错误
    #[error("{0}")]
    ProviderError(String),

    /// 缓存目录读写错误
    #[error("Cache IO error: {0}")]
    CacheIoError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建合成服务错误
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError(message.into())
    }

    /// 错误类别名，与消息分开返回给调用方
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyContent(_) => "EmptyContentError",
            Self::InvalidVoice(_) => "InvalidVoiceError",
            Self::ValidationError(_) => "ValidationError",
            Self::ProviderError(_) => "ProviderError",
            Self::CacheIoError(_) => "CacheIOError",
        }
    }

    /// 是否由调用方输入导致
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyContent(_) | Self::InvalidVoice(_) | Self::ValidationError(_)
        )
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::EmptyContent => Self::EmptyContent(err.to_string()),
            SynthesisError::InvalidVoice(_) => Self::InvalidVoice(err.to_string()),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::ProviderError(format!("TTS generation failed: {}", err))
    }
}

impl From<CacheError> for ApplicationError {
    fn from(err: CacheError) -> Self {
        Self::CacheIoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_client_errors() {
        let empty = ApplicationError::from(SynthesisError::EmptyContent);
        assert_eq!(empty.kind(), "EmptyContentError");
        assert!(empty.is_client_error());
        assert_eq!(
            empty.to_string(),
            "Text validation failed: Text contains no readable content after cleaning"
        );

        let voice = ApplicationError::from(SynthesisError::InvalidVoice(String::new()));
        assert_eq!(voice.kind(), "InvalidVoiceError");
        assert_eq!(voice.to_string(), "Invalid voice parameter: ''");
    }

    #[test]
    fn test_port_errors_map_to_server_errors() {
        let provider = ApplicationError::from(TtsError::Timeout);
        assert_eq!(provider.kind(), "ProviderError");
        assert!(!provider.is_client_error());
        assert_eq!(provider.to_string(), "TTS generation failed: Request timeout");

        let cache = ApplicationError::from(CacheError::IoError("disk full".to_string()));
        assert_eq!(cache.kind(), "CacheIOError");
        assert!(!cache.is_client_error());
    }
}
