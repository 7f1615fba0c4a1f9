//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::synthesis::{AudioFormat, FALLBACK_VOICE};
use crate::domain::DEFAULT_MAX_CHUNK_CHARS;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 音频缓存配置
    #[serde(default)]
    pub cache: CacheConfig,

    /// 合成服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 合成流程配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

/// 云平台（Railway、Render）上需要监听所有网卡
pub(crate) fn default_host() -> String {
    let on_cloud = std::env::var_os("RAILWAY_ENVIRONMENT").is_some()
        || std::env::var_os("RENDER").is_some();
    if on_cloud {
        "0.0.0.0".to_string()
    } else {
        "localhost".to_string()
    }
}

/// 平台通过 `PORT` 分配端口
pub(crate) fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5002)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 音频缓存配置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// 缓存目录
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

pub(crate) fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("voxgate-cache")
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
        }
    }
}

/// 合成服务类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// 外部 HTTP 合成服务
    #[default]
    Http,
    /// 进程内假服务（开发、测试）
    Fake,
}

/// 合成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub provider: TtsProvider,

    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 合成服务输出的音频编码，决定缓存扩展名和 Content-Type
    #[serde(default)]
    pub format: AudioFormat,

    /// fake 服务固定返回的音频文件
    #[serde(default)]
    pub fake_audio_path: Option<PathBuf>,
}

fn default_tts_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
            format: AudioFormat::default(),
            fake_audio_path: None,
        }
    }
}

/// 合成流程配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 单个文本块的最大字符数
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// 请求未指定音色和语言时使用的音色
    #[serde(default = "default_voice")]
    pub default_voice: String,
}

fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}

fn default_voice() -> String {
    FALLBACK_VOICE.to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            default_voice: default_voice(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
