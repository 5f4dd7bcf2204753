//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextSource、DirectoryEnumerator）
//! - queries: 读取查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{DirEntry, DirectoryEnumeratorPort, SourceError, TextSourcePort};

pub use queries::{
    handlers::{ReadAffixesHandler, ReadCharacterHandler, ReadPhonemesHandler, ReadVoicebankHandler},
    ReadAffixes, ReadCharacter, ReadPhonemes, ReadVoicebank,
};
