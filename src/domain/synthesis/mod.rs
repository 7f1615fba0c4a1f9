//! Synthesis Context - 合成限界上下文
//!
//! 职责:
//! - 合成请求及其参数（音色、语速、音调）的值对象
//! - 音频格式
//! - 按语言选择默认音色

mod errors;
mod value_objects;
mod voice_defaults;

pub use errors::SynthesisError;
pub use value_objects::{AudioFormat, Pitch, Rate, SynthesisRequest, VoiceName};
pub use voice_defaults::{default_voice_for_language, FALLBACK_VOICE};
