//! Voicebank Query Handlers
//!
//! 音源目录聚合：枚举子目录读取各 oto.ini，再读取根目录下的
//! character.txt 与 prefix.map，合并为一个 Voicebank。
//!
//! 失败策略:
//! - 根目录无法枚举 → 返回 RootUnavailable（唯一的致命错误）
//! - 子目录 oto.ini 读取失败 → 该子目录不出现在结果中
//! - character.txt / prefix.map 读取失败 → 使用空值

use futures_util::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DirectoryEnumeratorPort, TextSourcePort};
use crate::application::queries::handlers::{
    ReadAffixesHandler, ReadCharacterHandler, ReadPhonemesHandler,
};
use crate::application::queries::{ReadAffixes, ReadCharacter, ReadPhonemes, ReadVoicebank};
use crate::domain::voicebank::{
    character_path, oto_path, prefix_map_path, Affixes, Character, Voicebank,
};

/// ReadVoicebank Handler
pub struct ReadVoicebankHandler {
    enumerator: Arc<dyn DirectoryEnumeratorPort>,
    phonemes: ReadPhonemesHandler,
    character: ReadCharacterHandler,
    affixes: ReadAffixesHandler,
}

impl ReadVoicebankHandler {
    pub fn new(
        text_source: Arc<dyn TextSourcePort>,
        enumerator: Arc<dyn DirectoryEnumeratorPort>,
    ) -> Self {
        Self {
            enumerator,
            phonemes: ReadPhonemesHandler::new(text_source.clone()),
            character: ReadCharacterHandler::new(text_source.clone()),
            affixes: ReadAffixesHandler::new(text_source),
        }
    }

    pub async fn handle(&self, query: ReadVoicebank) -> Result<Voicebank, ApplicationError> {
        let root = query.root;

        let entries = self
            .enumerator
            .enumerate(&root)
            .await
            .map_err(|e| ApplicationError::root_unavailable(&root, e))?;

        // 各子目录互不依赖，并发读取
        let reads = entries.into_iter().filter(|entry| entry.is_dir).map(|entry| {
            let path = oto_path(&root, &entry.name);
            async move { (entry.name, self.phonemes.handle(ReadPhonemes { path }).await) }
        });

        let mut phoneme_sets = BTreeMap::new();
        for (name, result) in join_all(reads).await {
            match result {
                Ok(phonemes) => {
                    phoneme_sets.insert(name, phonemes);
                }
                Err(e) => {
                    tracing::debug!(dir = %name, error = %e, "Subdirectory has no readable oto.ini, skipped");
                }
            }
        }

        let character = self
            .character
            .handle(ReadCharacter {
                path: character_path(&root),
            })
            .await
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Using empty character info");
                Character::default()
            });

        let affixes = self
            .affixes
            .handle(ReadAffixes {
                path: prefix_map_path(&root),
            })
            .await
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Using empty prefix map");
                Affixes::new()
            });

        let voicebank = Voicebank::new(root, phoneme_sets, character, affixes);

        tracing::info!(
            path = %voicebank.path().display(),
            phoneme_sets = voicebank.phoneme_sets().len(),
            phonemes = voicebank.phoneme_count(),
            affixes = voicebank.affixes().len(),
            "Voicebank loaded"
        );

        Ok(voicebank)
    }
}
