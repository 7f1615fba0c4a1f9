//! Persistence Layer - 音频缓存持久化

mod file_cache;

pub use file_cache::FileAudioCache;
