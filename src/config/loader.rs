//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{default_cache_dir, default_host, default_port, AppConfig, TtsProvider};
use crate::domain::synthesis::VoiceName;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXGATE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值（`PORT`、`RAILWAY_ENVIRONMENT`、`RENDER` 影响监听地址的默认值）
///
/// # 环境变量示例
/// - `VOXGATE_SERVER__PORT=8080`
/// - `VOXGATE_TTS__URL=http://tts-server:8000`
/// - `VOXGATE_TTS__PROVIDER=fake`
/// - `VOXGATE_CACHE__DIR=/var/cache/voxgate`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", default_host())?
        .set_default("server.port", i64::from(default_port()))?
        .set_default("cache.dir", default_cache_dir().display().to_string())?
        .set_default("tts.provider", "http")?
        .set_default("tts.url", "http://localhost:8000")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("tts.format", "mp3")?
        .set_default("synthesis.max_chunk_chars", 1000)?
        .set_default("synthesis.default_voice", "zh-CN-XiaoxiaoNeural")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: VOXGATE_TTS__URL=http://tts-server:8000
    builder = builder.add_source(
        Environment::with_prefix("VOXGATE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.provider == TtsProvider::Http && config.tts.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.cache.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Cache directory cannot be empty".to_string(),
        ));
    }

    if config.synthesis.max_chunk_chars == 0 {
        return Err(ConfigError::ValidationError(
            "synthesis.max_chunk_chars must be greater than 0".to_string(),
        ));
    }

    VoiceName::new(config.synthesis.default_voice.as_str()).map_err(|e| {
        ConfigError::ValidationError(format!("synthesis.default_voice: {}", e))
    })?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Cache Directory: {}", config.cache.dir.display());
    tracing::info!("TTS Provider: {:?}", config.tts.provider);
    if config.tts.provider == TtsProvider::Http {
        tracing::info!("TTS URL: {}", config.tts.url);
        tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    }
    tracing::info!("Audio Format: {}", config.tts.format.extension());
    tracing::info!("Max Chunk Chars: {}", config.synthesis.max_chunk_chars);
    tracing::info!("Default Voice: {}", config.synthesis.default_voice);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::AudioFormat;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());

        // fake 服务不需要 URL
        config.tts.provider = TtsProvider::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_chunk_size() {
        let mut config = AppConfig::default();
        config.synthesis.max_chunk_chars = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_cache_dir() {
        let mut config = AppConfig::default();
        config.cache.dir = Default::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_default_voice() {
        let mut config = AppConfig::default();
        config.synthesis.default_voice = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 6100

[cache]
dir = "/tmp/voxgate-test-cache"

[tts]
provider = "fake"
format = "wav"

[synthesis]
max_chunk_chars = 200
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:6100");
        assert_eq!(config.cache.dir, Path::new("/tmp/voxgate-test-cache"));
        assert_eq!(config.tts.provider, TtsProvider::Fake);
        assert_eq!(config.tts.format, AudioFormat::Wav);
        assert_eq!(config.synthesis.max_chunk_chars, 200);
        // 未写入文件的键使用默认值
        assert_eq!(config.tts.timeout_secs, 120);
        assert_eq!(config.synthesis.default_voice, "zh-CN-XiaoxiaoNeural");
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[synthesis]\nmax_chunk_chars = 0").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
