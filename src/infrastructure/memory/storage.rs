//! In-Memory Storage Implementation
//!
//! 同时实现 TextSourcePort 与 DirectoryEnumeratorPort，并记录每次读取

use async_trait::async_trait;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{DirEntry, DirectoryEnumeratorPort, SourceError, TextSourcePort};

/// 内存存储
pub struct InMemoryStorage {
    files: DashMap<PathBuf, String>,
    dirs: DashMap<PathBuf, Vec<DirEntry>>,
    read_failures: DashMap<PathBuf, SourceError>,
    enumerate_failures: DashMap<PathBuf, SourceError>,
    reads: DashMap<PathBuf, usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            files: DashMap::new(),
            dirs: DashMap::new(),
            read_failures: DashMap::new(),
            enumerate_failures: DashMap::new(),
            reads: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>, entries: Vec<DirEntry>) {
        self.dirs.insert(path.into(), entries);
    }

    /// 让指定路径的读取返回给定错误
    pub fn fail_read(&self, path: impl Into<PathBuf>, err: SourceError) {
        self.read_failures.insert(path.into(), err);
    }

    /// 让指定目录的枚举返回给定错误
    pub fn fail_enumerate(&self, path: impl Into<PathBuf>, err: SourceError) {
        self.enumerate_failures.insert(path.into(), err);
    }

    /// 某路径被读取的次数（包括失败的读取）
    pub fn read_count(&self, path: impl AsRef<Path>) -> usize {
        self.reads.get(path.as_ref()).map(|n| *n).unwrap_or(0)
    }

    /// 所有读取次数之和
    pub fn total_reads(&self) -> usize {
        self.reads.iter().map(|n| *n.value()).sum()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextSourcePort for InMemoryStorage {
    async fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        *self.reads.entry(path.to_path_buf()).or_insert(0) += 1;

        if let Some(err) = self.read_failures.get(path) {
            return Err(err.clone());
        }
        self.files
            .get(path)
            .map(|text| text.clone())
            .ok_or_else(|| SourceError::NotFound(path.display().to_string()))
    }
}

#[async_trait]
impl DirectoryEnumeratorPort for InMemoryStorage {
    async fn enumerate(&self, path: &Path) -> Result<Vec<DirEntry>, SourceError> {
        if let Some(err) = self.enumerate_failures.get(path) {
            return Err(err.clone());
        }
        if let Some(entries) = self.dirs.get(path) {
            return Ok(entries.clone());
        }
        if self.files.contains_key(path) {
            return Err(SourceError::NotADirectory(path.display().to_string()));
        }
        Err(SourceError::NotFound(path.display().to_string()))
    }
}
