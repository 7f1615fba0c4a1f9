//! Voxgate - 语音合成网关
//!
//! 架构:
//! - Domain: 文本清洗、分块、指纹、合成参数
//! - Application: orchestrator, commands, queries, ports
//! - Infrastructure: http, persistence (文件缓存), adapters (合成服务)

use std::sync::Arc;

use voxgate::application::TtsEnginePort;
use voxgate::config::{load_config, print_config, TtsProvider};
use voxgate::domain::synthesis::VoiceName;
use voxgate::infrastructure::adapters::{
    FakeTtsClient, FakeTtsClientConfig, HttpTtsClient, HttpTtsClientConfig,
};
use voxgate::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voxgate::infrastructure::persistence::FileAudioCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxgate={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Voxgate - 语音合成网关 v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建合成服务客户端
    let tts_engine: Arc<dyn TtsEnginePort> = match config.tts.provider {
        TtsProvider::Http => {
            let tts_config = HttpTtsClientConfig::new(config.tts.url.clone())
                .with_timeout(config.tts.timeout_secs);
            Arc::new(HttpTtsClient::new(tts_config)?)
        }
        TtsProvider::Fake => {
            let tts_config = FakeTtsClientConfig {
                audio_file_path: config.tts.fake_audio_path.clone(),
                ..Default::default()
            };
            Arc::new(FakeTtsClient::new(tts_config)?)
        }
    };

    if !tts_engine.health_check().await {
        tracing::warn!("TTS provider is not reachable yet, requests will fail until it is");
    }

    // 创建音频缓存
    let audio_cache = Arc::new(FileAudioCache::new(&config.cache.dir, config.tts.format).await?);

    let default_voice = VoiceName::new(config.synthesis.default_voice.as_str())?;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        audio_cache,
        tts_engine,
        config.synthesis.max_chunk_chars,
        default_voice,
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
