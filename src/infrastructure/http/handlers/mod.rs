//! HTTP Handlers

mod cache;
mod status;
mod synthesize;
mod voice;

pub use cache::*;
pub use status::*;
pub use synthesize::*;
pub use voice::*;
