//! 应用层 - 查询（读操作）

mod voicebank_queries;

pub mod handlers;

pub use voicebank_queries::*;
