//! File Storage - 文件系统实现
//!
//! 实现 TextSourcePort 与 DirectoryEnumeratorPort

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{DirEntry, DirectoryEnumeratorPort, SourceError, TextSourcePort};

/// 从文件系统读取文本
///
/// 按字节读取后做有损 UTF-8 解码，非 UTF-8 文件不会导致读取失败
#[derive(Debug, Clone, Default)]
pub struct FsTextSource;

impl FsTextSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextSourcePort for FsTextSource {
    async fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| SourceError::from_io(path, &e))?;

        tracing::trace!(path = %path.display(), size = bytes.len(), "Read file");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// 枚举文件系统目录
#[derive(Debug, Clone, Default)]
pub struct FsDirectoryEnumerator;

impl FsDirectoryEnumerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirectoryEnumeratorPort for FsDirectoryEnumerator {
    async fn enumerate(&self, path: &Path) -> Result<Vec<DirEntry>, SourceError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| SourceError::from_io(path, &e))?;
        if !metadata.is_dir() {
            return Err(SourceError::NotADirectory(path.display().to_string()));
        }

        let mut entries = Vec::new();
        let mut dir = fs::read_dir(path)
            .await
            .map_err(|e| SourceError::from_io(path, &e))?;

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| SourceError::from_io(path, &e))?
        {
            // 符号链接按其指向判断
            let is_dir = match entry.file_type().await {
                Ok(ft) if ft.is_symlink() => match fs::metadata(entry.path()).await {
                    Ok(m) => m.is_dir(),
                    Err(e) => {
                        tracing::debug!(path = %entry.path().display(), error = %e, "Broken symlink, treated as file");
                        false
                    }
                },
                Ok(ft) => ft.is_dir(),
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), error = %e, "Unknown file type, treated as file");
                    false
                }
            };

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_text() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("oto.ini");
        std::fs::write(&path, "a.wav=あ,1,2,3,4,5\n").unwrap();

        let text = FsTextSource::new().read_text(&path).await.unwrap();
        assert_eq!(text, "a.wav=あ,1,2,3,4,5\n");
    }

    #[tokio::test]
    async fn test_read_non_utf8_is_lossy() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("character.txt");
        // "name=" + Shift_JIS bytes
        std::fs::write(&path, b"name=\x83\x65\x83\x67\nauthor=me").unwrap();

        let text = FsTextSource::new().read_text(&path).await.unwrap();
        assert!(text.starts_with("name="));
        assert!(text.ends_with("\nauthor=me"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("prefix.map");

        let err = FsTextSource::new().read_text(&path).await.unwrap_err();
        assert_eq!(err, SourceError::NotFound(path.display().to_string()));
    }

    #[tokio::test]
    async fn test_enumerate_reports_directories_and_files() {
        let temp_dir = tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("CV")).unwrap();
        std::fs::create_dir(temp_dir.path().join("VCV")).unwrap();
        std::fs::write(temp_dir.path().join("readme.txt"), "hi").unwrap();

        let mut entries = FsDirectoryEnumerator::new()
            .enumerate(temp_dir.path())
            .await
            .unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::dir("CV"),
                DirEntry::dir("VCV"),
                DirEntry::file("readme.txt"),
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_enumerate_broken_symlink_is_reported_as_file() {
        let temp_dir = tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("CV")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("CV"), temp_dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("gone"), temp_dir.path().join("dangling")).unwrap();

        let mut entries = FsDirectoryEnumerator::new()
            .enumerate(temp_dir.path())
            .await
            .unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::dir("CV"),
                DirEntry::file("dangling"),
                DirEntry::dir("linked"),
            ]
        );
    }

    #[tokio::test]
    async fn test_enumerate_missing_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("nope");

        let err = FsDirectoryEnumerator::new().enumerate(&root).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_enumerate_file_is_not_a_directory() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("oto.ini");
        std::fs::write(&file, "").unwrap();

        let err = FsDirectoryEnumerator::new().enumerate(&file).await.unwrap_err();
        assert!(matches!(err, SourceError::NotADirectory(_)));
    }
}
