//! Directory Enumerator Port - 目录枚举抽象

use async_trait::async_trait;
use std::path::Path;

use super::SourceError;

/// 目录中的一个直接子项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Directory Enumerator Port
///
/// 列出目录的直接子项（不递归）。路径不存在或不是可访问的目录时返回错误。
#[async_trait]
pub trait DirectoryEnumeratorPort: Send + Sync {
    async fn enumerate(&self, path: &Path) -> Result<Vec<DirEntry>, SourceError>;
}
