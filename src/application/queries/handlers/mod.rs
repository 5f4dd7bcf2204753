//! Query Handlers 实现

mod metadata_handlers;
mod voicebank_handlers;

pub use metadata_handlers::*;
pub use voicebank_handlers::*;
