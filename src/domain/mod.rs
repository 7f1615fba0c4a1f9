//! Domain Layer - 领域层
//!
//! 纯领域逻辑，不涉及 IO:
//! - Synthesis Context: 合成请求、音色参数
//! - 文本清洗 → 分块 → 缓存指纹

pub mod synthesis;

mod fingerprint;
mod text_chunker;
mod text_normalizer;

pub use fingerprint::{fingerprint, Fingerprint, KEY_DELIMITER};
pub use text_chunker::{chunk_text, Chunk, DEFAULT_MAX_CHUNK_CHARS};
pub use text_normalizer::{normalize, NormalizedText};
