//! Cache Commands

/// 清空音频缓存命令
#[derive(Debug, Clone, Default)]
pub struct ClearCache;

/// 清空音频缓存响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCacheResponse {
    /// 删除的条目数
    pub cleared: u64,
}
