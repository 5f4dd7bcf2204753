//! UTAU Voicebank - UTAU 音源元数据读取
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voicebank Context: oto.ini / character.txt / prefix.map 解析与聚合根
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextSource, DirectoryEnumerator）
//! - Queries: 单文件读取与整个音源目录的聚合读取
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件系统实现
//! - Memory: 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::path::PathBuf;
use std::sync::Arc;

pub use application::{ApplicationError, ReadVoicebank, ReadVoicebankHandler};
pub use config::{load_config, AppConfig};
pub use domain::{Affix, Affixes, Character, Phoneme, Phonemes, Voicebank};

use infrastructure::{FsDirectoryEnumerator, FsTextSource};

/// 使用文件系统适配器读取一个音源目录
pub async fn read_voicebank(root: impl Into<PathBuf>) -> Result<Voicebank, ApplicationError> {
    let handler = ReadVoicebankHandler::new(
        Arc::new(FsTextSource::new()),
        Arc::new(FsDirectoryEnumerator::new()),
    );
    handler.handle(ReadVoicebank::new(root)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_voicebank_from_disk() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        std::fs::create_dir(root.join("A3")).unwrap();
        std::fs::write(
            root.join("A3").join("oto.ini"),
            "_あ.wav=- あ,500,125,-500,500,250\nbroken\n",
        )
        .unwrap();
        std::fs::create_dir(root.join("C4")).unwrap();
        std::fs::write(root.join("C4").join("oto.ini"), "").unwrap();
        std::fs::create_dir(root.join("docs")).unwrap();
        std::fs::write(root.join("character.txt"), "name=テスト\nweb=none").unwrap();
        std::fs::write(root.join("readme.txt"), "hello").unwrap();

        let voicebank = read_voicebank(root).await.unwrap();

        assert_eq!(voicebank.path(), root);
        assert_eq!(
            voicebank.phoneme_sets().keys().collect::<Vec<_>>(),
            vec!["A3", "C4"]
        );
        assert_eq!(voicebank.phoneme_sets()["A3"].len(), 1);
        assert!(voicebank.phoneme_sets()["C4"].is_empty());
        assert_eq!(voicebank.character().name, "テスト");
        assert_eq!(voicebank.character().web_url_path, "none");
        assert!(voicebank.affixes().is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_is_the_only_fatal_error() {
        let temp_dir = tempdir().unwrap();

        let err = read_voicebank(temp_dir.path().join("missing"))
            .await
            .unwrap_err();
        assert!(err.is_root_unavailable());

        let voicebank = read_voicebank(temp_dir.path()).await.unwrap();
        assert!(voicebank.phoneme_sets().is_empty());
        assert!(voicebank.character().is_empty());
        assert!(voicebank.affixes().is_empty());
    }
}
