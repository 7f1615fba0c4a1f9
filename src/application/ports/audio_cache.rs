//! Audio Cache Port - 内容寻址音频缓存
//!
//! 定义音频缓存的抽象接口，具体实现为平铺目录（每个指纹一个文件）

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::synthesis::AudioFormat;
use crate::domain::Fingerprint;

/// Audio Cache 错误
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 缓存统计信息
///
/// 命中/未命中计数只在进程生命周期内有效
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: u64,
    pub total_size_bytes: u64,
    pub hit_count: u64,
    pub miss_count: u64,
}

/// Audio Cache Port
///
/// 以指纹为 key 的音频缓存:
/// - 存在即信任，不做过期或内容校验
/// - 写入无条件覆盖，同一指纹的并发写入以最后一次为准
/// - 只支持整体清空，没有单条淘汰
#[async_trait]
pub trait AudioCachePort: Send + Sync {
    /// 查找缓存的音频
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<u8>>, CacheError>;

    /// 写入音频（覆盖已有条目）
    async fn insert(&self, fingerprint: &Fingerprint, audio_data: &[u8]) -> Result<(), CacheError>;

    /// 删除全部条目，返回删除数量
    async fn clear(&self) -> Result<u64, CacheError>;

    /// 获取缓存统计信息
    async fn stats(&self) -> Result<CacheStats, CacheError>;

    /// 缓存位置
    fn location(&self) -> &Path;

    /// 缓存条目的音频格式
    fn format(&self) -> AudioFormat;
}
