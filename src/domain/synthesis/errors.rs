//! Synthesis Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// 清洗后没有可朗读的内容（字母、数字或中日韩文字）
    #[error("Text contains no readable content after cleaning")]
    EmptyContent,

    #[error("Invalid voice parameter: '{0}'")]
    InvalidVoice(String),
}
