//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：合成（可能写入缓存）和清空缓存

mod cache_commands;
mod synthesize_commands;

pub mod handlers;

pub use cache_commands::*;
pub use synthesize_commands::*;
