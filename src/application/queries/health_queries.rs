//! Health Queries

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::application::ports::CacheStats;
use crate::domain::synthesis::AudioFormat;

/// 获取服务健康状态
#[derive(Debug, Clone, Default)]
pub struct GetHealth;

/// 健康状态报告
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub cache_dir: PathBuf,
    pub cache_stats: CacheStats,
    pub format: AudioFormat,
    /// 合成服务是否可达
    pub provider_healthy: bool,
    pub checked_at: DateTime<Utc>,
}
