//! Synthesis Context - Value Objects

use serde::{Deserialize, Serialize};

use super::SynthesisError;
use crate::domain::{fingerprint, Fingerprint};

/// 音色名称最大长度
const MAX_VOICE_NAME_CHARS: usize = 128;

/// 音色标识（如 `en-US-AriaNeural`）
///
/// 不变量:
/// - 非空，首尾无空白
/// - 只包含 ASCII 字母数字及 `-_ (),.`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, SynthesisError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() || trimmed.chars().count() > MAX_VOICE_NAME_CHARS {
            return Err(SynthesisError::InvalidVoice(name));
        }
        if !trimmed.chars().all(is_voice_char) {
            return Err(SynthesisError::InvalidVoice(name));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[inline]
fn is_voice_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ' ' | '(' | ')' | ',' | '.')
}

/// 解析带符号的整数偏移量，如 `+10%`、`-5Hz`
///
/// 无符号的数值补上 `+`（`10%` → `+10%`）
fn parse_signed_offset(value: &str, suffix: &str) -> Option<String> {
    let body = value.trim().strip_suffix(suffix)?;
    let (sign, digits) = match body.chars().next()? {
        '+' | '-' => body.split_at(1),
        _ => ("+", body),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}{}{}", sign, digits, suffix))
}

/// 语速偏移（百分比），默认 `+0%`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate(String);

impl Rate {
    pub const DEFAULT: &'static str = "+0%";

    /// 格式不合法时返回 None，由调用方决定是否回退到默认值
    pub fn parse(value: &str) -> Option<Self> {
        parse_signed_offset(value, "%").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音调偏移（赫兹），默认 `+0Hz`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch(String);

impl Pitch {
    pub const DEFAULT: &'static str = "+0Hz";

    pub fn parse(value: &str) -> Option<Self> {
        parse_signed_offset(value, "Hz").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音频格式（由合成服务的编码决定）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

/// 合成请求
///
/// `text` 保留调用方提交的原始文本，缓存指纹基于原始文本计算；
/// 清洗后的文本只用于合成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: VoiceName,
    pub rate: Rate,
    pub pitch: Pitch,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice: VoiceName, rate: Rate, pitch: Pitch) -> Self {
        Self {
            text: text.into(),
            voice,
            rate,
            pitch,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(
            &self.text,
            self.voice.as_str(),
            self.rate.as_str(),
            self.pitch.as_str(),
        )
    }
}
