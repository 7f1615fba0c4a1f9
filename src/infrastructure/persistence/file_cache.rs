//! File Audio Cache - 平铺目录音频缓存
//!
//! 每个指纹一个文件：`<base_dir>/<fingerprint>.<ext>`

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioCachePort, CacheError, CacheStats};
use crate::domain::synthesis::AudioFormat;
use crate::domain::Fingerprint;

/// 写入中的临时文件后缀（文件名以 `.` 开头）
const TEMP_SUFFIX: &str = ".tmp";

fn io_error(e: std::io::Error) -> CacheError {
    CacheError::IoError(e.to_string())
}

fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.') && name.ends_with(TEMP_SUFFIX))
}

/// 删除上次进程在改名前退出时留下的临时文件
async fn sweep_temp_files(base_dir: &Path) -> Result<u64, CacheError> {
    let mut entries = fs::read_dir(base_dir).await.map_err(io_error)?;

    let mut swept = 0u64;
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        if !is_temp_file(&path) {
            continue;
        }
        match fs::remove_file(&path).await {
            Ok(()) => swept += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(io_error(e)),
        }
    }

    Ok(swept)
}

/// 文件系统音频缓存
pub struct FileAudioCache {
    /// 缓存目录
    base_dir: PathBuf,
    format: AudioFormat,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
}

impl FileAudioCache {
    /// 创建缓存，目录不存在时自动创建，并清理残留的临时文件
    pub async fn new(base_dir: impl AsRef<Path>, format: AudioFormat) -> Result<Self, CacheError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir).await.map_err(io_error)?;
        let swept = sweep_temp_files(&base_dir).await?;

        tracing::info!(
            cache_dir = %base_dir.display(),
            format = format.extension(),
            swept_temp_files = swept,
            "Audio cache opened"
        );

        Ok(Self {
            base_dir,
            format,
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
        })
    }

    /// 条目文件路径
    pub fn entry_path(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.base_dir
            .join(fingerprint.file_name(self.format.extension()))
    }

    fn is_entry(&self, path: &Path) -> bool {
        path.extension()
            .map_or(false, |ext| ext == self.format.extension())
    }
}

#[async_trait]
impl AudioCachePort for FileAudioCache {
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.entry_path(fingerprint);

        match fs::read(&path).await {
            Ok(data) => {
                self.hit_count.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    fingerprint = fingerprint.short(),
                    size = data.len(),
                    "Cache hit"
                );
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.miss_count.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(fingerprint = fingerprint.short(), "Cache miss");
                Ok(None)
            }
            Err(e) => Err(io_error(e)),
        }
    }

    async fn insert(&self, fingerprint: &Fingerprint, audio_data: &[u8]) -> Result<(), CacheError> {
        // 目录可能在运行期间被外部删除
        fs::create_dir_all(&self.base_dir).await.map_err(io_error)?;

        // 先写临时文件再改名，并发写入同一指纹时读者只会看到完整文件
        let temp_path = self
            .base_dir
            .join(format!(".{}.{}{}", fingerprint.as_str(), Uuid::new_v4(), TEMP_SUFFIX));
        let entry_path = self.entry_path(fingerprint);

        if let Err(e) = fs::write(&temp_path, audio_data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(io_error(e));
        }
        if let Err(e) = fs::rename(&temp_path, &entry_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(io_error(e));
        }

        tracing::debug!(
            fingerprint = fingerprint.short(),
            size = audio_data.len(),
            "Cached audio"
        );

        Ok(())
    }

    async fn clear(&self) -> Result<u64, CacheError> {
        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(io_error(e)),
        };

        let mut deleted_count = 0u64;
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if !self.is_entry(&path) {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) => deleted_count += 1,
                // 并发清空时已被删除
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(io_error(e)),
            }
        }

        tracing::info!(
            cache_dir = %self.base_dir.display(),
            cleared = deleted_count,
            "Audio cache cleared"
        );

        Ok(deleted_count)
    }

    async fn stats(&self) -> Result<CacheStats, CacheError> {
        let mut stats = CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            ..Default::default()
        };

        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(stats),
            Err(e) => return Err(io_error(e)),
        };

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            if !self.is_entry(&entry.path()) {
                continue;
            }
            stats.total_entries += 1;
            if let Ok(metadata) = entry.metadata().await {
                stats.total_size_bytes += metadata.len();
            }
        }

        Ok(stats)
    }

    fn location(&self) -> &Path {
        &self.base_dir
    }

    fn format(&self) -> AudioFormat {
        self.format
    }
}
