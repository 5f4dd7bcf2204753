//! Memory Layer - In-Memory Storage
//!
//! 无需磁盘即可驱动 Voicebank 读取，可注入读取失败

mod storage;

pub use storage::InMemoryStorage;
