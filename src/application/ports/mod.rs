//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod directory_enumerator;
mod text_source;

pub use directory_enumerator::{DirEntry, DirectoryEnumeratorPort};
pub use text_source::{SourceError, TextSourcePort};
