//! Voice Queries

/// 列出合成服务支持的音色
#[derive(Debug, Clone, Default)]
pub struct ListVoices;
