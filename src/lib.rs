//! Voxgate - 语音合成网关
//!
//! 在不稳定或限流的外部 TTS 服务前提供稳定、可缓存的合成接口。
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 文本清洗、分句分块、缓存指纹
//! - 合成参数值对象（音色、语速、音调、音频格式）
//!
//! 应用层 (application/):
//! - Ports: TtsEngine, AudioCache
//! - Orchestrator: 逐块合成并拼接音频
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 网关 API
//! - Persistence: 文件系统音频缓存
//! - Adapters: HTTP 合成服务客户端、进程内 fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
