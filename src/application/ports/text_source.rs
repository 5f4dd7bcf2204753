//! Text Source Port - 文本读取抽象
//!
//! 定义读取元数据文件全文的抽象接口，具体实现在 infrastructure 层

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 存储层错误
///
/// 文本读取与目录枚举共用
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl SourceError {
    /// 将 `std::io::Error` 按类型归类
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.display().to_string()),
            _ => Self::Io(format!("{}: {}", path.display(), err)),
        }
    }
}

/// Text Source Port
///
/// 按路径返回文件的完整文本内容
#[async_trait]
pub trait TextSourcePort: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String, SourceError>;
}
