//! Synthesize Commands

use crate::domain::synthesis::AudioFormat;
use crate::domain::Fingerprint;

/// 合成语音命令
///
/// 字段保持调用方提交的原样，由 handler 负责补默认值和校验
#[derive(Debug, Clone, Default)]
pub struct SynthesizeSpeech {
    pub text: String,
    pub voice: Option<String>,
    pub rate: Option<String>,
    pub pitch: Option<String>,
    /// 未指定音色时用于选择默认音色
    pub language: Option<String>,
}

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub audio_data: Vec<u8>,
    pub format: AudioFormat,
    pub fingerprint: Fingerprint,
    /// 是否命中缓存
    pub cache_hit: bool,
}
