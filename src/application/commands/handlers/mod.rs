//! Command Handlers 实现

mod cache_handlers;
mod synthesize_handlers;

pub use cache_handlers::*;
pub use synthesize_handlers::*;
