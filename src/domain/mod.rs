//! Domain Layer - 领域层
//!
//! Voicebank Context: UTAU 音源的元数据模型与解析

pub mod voicebank;

pub use voicebank::{
    parse_affixes, parse_character, parse_phoneme_line, parse_phonemes, Affix, Affixes,
    Character, Phoneme, PhonemeLineError, Phonemes, Voicebank,
};
