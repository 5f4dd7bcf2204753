//! 应用层错误定义

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::SourceError;

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// 音源根目录无法枚举（唯一的致命错误）
    #[error("Voicebank root unavailable: {}: {source}", path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    /// 单个元数据文件读取失败
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: SourceError,
    },
}

impl ApplicationError {
    pub fn root_unavailable(path: impl Into<PathBuf>, source: SourceError) -> Self {
        Self::RootUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn read_failed(path: impl Into<PathBuf>, source: SourceError) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn is_root_unavailable(&self) -> bool {
        matches!(self, Self::RootUnavailable { .. })
    }

    /// 底层存储错误
    pub fn source_error(&self) -> &SourceError {
        match self {
            Self::RootUnavailable { source, .. } | Self::ReadFailed { source, .. } => source,
        }
    }
}
