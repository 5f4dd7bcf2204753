//! Metadata Query Handlers
//!
//! 单个元数据文件的读取：通过 TextSourcePort 取文本，再交给领域层解析

use std::path::Path;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TextSourcePort;
use crate::application::queries::{ReadAffixes, ReadCharacter, ReadPhonemes};
use crate::domain::voicebank::{
    parse_affixes, parse_character, parse_phonemes, Affixes, Character, Phonemes,
};

async fn read_text(source: &dyn TextSourcePort, path: &Path) -> Result<String, ApplicationError> {
    source
        .read_text(path)
        .await
        .map_err(|e| ApplicationError::read_failed(path, e))
}

/// ReadPhonemes Handler
pub struct ReadPhonemesHandler {
    text_source: Arc<dyn TextSourcePort>,
}

impl ReadPhonemesHandler {
    pub fn new(text_source: Arc<dyn TextSourcePort>) -> Self {
        Self { text_source }
    }

    pub async fn handle(&self, query: ReadPhonemes) -> Result<Phonemes, ApplicationError> {
        let text = read_text(self.text_source.as_ref(), &query.path).await?;
        let phonemes = parse_phonemes(&text);

        tracing::debug!(
            path = %query.path.display(),
            entries = phonemes.len(),
            "oto.ini parsed"
        );

        Ok(phonemes)
    }
}

/// ReadCharacter Handler
pub struct ReadCharacterHandler {
    text_source: Arc<dyn TextSourcePort>,
}

impl ReadCharacterHandler {
    pub fn new(text_source: Arc<dyn TextSourcePort>) -> Self {
        Self { text_source }
    }

    pub async fn handle(&self, query: ReadCharacter) -> Result<Character, ApplicationError> {
        let text = read_text(self.text_source.as_ref(), &query.path).await?;
        Ok(parse_character(&text))
    }
}

/// ReadAffixes Handler
pub struct ReadAffixesHandler {
    text_source: Arc<dyn TextSourcePort>,
}

impl ReadAffixesHandler {
    pub fn new(text_source: Arc<dyn TextSourcePort>) -> Self {
        Self { text_source }
    }

    pub async fn handle(&self, query: ReadAffixes) -> Result<Affixes, ApplicationError> {
        let text = read_text(self.text_source.as_ref(), &query.path).await?;
        Ok(parse_affixes(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SourceError;
    use crate::infrastructure::memory::InMemoryStorage;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_read_phonemes() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.add_file("bank/CV/oto.ini", "a.wav=あ,1,2,3,4,5\nbroken\n");
        let handler = ReadPhonemesHandler::new(storage.clone());

        let phonemes = handler
            .handle(ReadPhonemes {
                path: PathBuf::from("bank/CV/oto.ini"),
            })
            .await
            .unwrap();

        assert_eq!(phonemes.len(), 1);
        assert_eq!(phonemes.as_slice()[0].alias, "あ");
        assert_eq!(storage.read_count("bank/CV/oto.ini"), 1);
    }

    #[tokio::test]
    async fn test_read_failure_is_reported_with_path() {
        let storage = Arc::new(InMemoryStorage::new());
        let handler = ReadCharacterHandler::new(storage);

        let err = handler
            .handle(ReadCharacter {
                path: PathBuf::from("missing/character.txt"),
            })
            .await
            .unwrap_err();

        assert!(!err.is_root_unavailable());
        assert_eq!(
            err,
            ApplicationError::read_failed(
                "missing/character.txt",
                SourceError::NotFound("missing/character.txt".to_string())
            )
        );
    }

    #[tokio::test]
    async fn test_read_character_and_affixes() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.add_file("bank/character.txt", "name=テスト\nauthor=someone");
        storage.add_file("bank/prefix.map", "C4\t\t_C4\nbad");

        let character = ReadCharacterHandler::new(storage.clone())
            .handle(ReadCharacter {
                path: PathBuf::from("bank/character.txt"),
            })
            .await
            .unwrap();
        let affixes = ReadAffixesHandler::new(storage.clone())
            .handle(ReadAffixes {
                path: PathBuf::from("bank/prefix.map"),
            })
            .await
            .unwrap();

        assert_eq!(character.name, "テスト");
        assert_eq!(character.author, "someone");
        assert_eq!(affixes.len(), 1);
        assert_eq!(affixes["C4"].suffix, "_C4");
    }
}
