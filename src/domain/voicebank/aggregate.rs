//! Voicebank Context - Aggregate Root

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Affix, Affixes, Character, Phoneme, Phonemes};

/// Voicebank 聚合根
///
/// 不变量:
/// - 一次性从磁盘快照构建，构建后不可变
/// - phoneme_sets 以子目录名为键，只包含成功读取 oto.ini 的子目录
/// - character 与 affixes 总是存在（可能为空）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voicebank {
    path: PathBuf,
    phoneme_sets: BTreeMap<String, Phonemes>,
    character: Character,
    affixes: Affixes,
}

impl Voicebank {
    pub fn new(
        path: impl Into<PathBuf>,
        phoneme_sets: BTreeMap<String, Phonemes>,
        character: Character,
        affixes: Affixes,
    ) -> Self {
        Self {
            path: path.into(),
            phoneme_sets,
            character,
            affixes,
        }
    }

    /// 查找别名对应的记录
    ///
    /// 按子目录名顺序遍历，返回第一条匹配
    pub fn find_phoneme(&self, alias: &str) -> Option<(&str, &Phoneme)> {
        self.phoneme_sets
            .iter()
            .find_map(|(dir, set)| set.find_by_alias(alias).map(|p| (dir.as_str(), p)))
    }

    /// 音名对应的前后缀
    pub fn affix_for(&self, note: &str) -> Option<&Affix> {
        self.affixes.get(note)
    }

    /// 所有子目录中的记录总数
    pub fn phoneme_count(&self) -> usize {
        self.phoneme_sets.values().map(Phonemes::len).sum()
    }

    // Getters
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn phoneme_sets(&self) -> &BTreeMap<String, Phonemes> {
        &self.phoneme_sets
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn affixes(&self) -> &Affixes {
        &self.affixes
    }
}
