//! Voicebank Queries

use std::path::PathBuf;

/// 读取整个音源目录
#[derive(Debug, Clone)]
pub struct ReadVoicebank {
    pub root: PathBuf,
}

impl ReadVoicebank {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// 读取单个 oto.ini
#[derive(Debug, Clone)]
pub struct ReadPhonemes {
    pub path: PathBuf,
}

/// 读取 character.txt
#[derive(Debug, Clone)]
pub struct ReadCharacter {
    pub path: PathBuf,
}

/// 读取 prefix.map
#[derive(Debug, Clone)]
pub struct ReadAffixes {
    pub path: PathBuf,
}
