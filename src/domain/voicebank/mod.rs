//! Voicebank Context - 音源限界上下文
//!
//! 职责:
//! - oto.ini / character.txt / prefix.map 的纯文本解析
//! - Voicebank 聚合根
//!
//! 本上下文不做任何 I/O，读取由应用层通过端口完成。

mod affix;
mod aggregate;
mod character;
mod errors;
mod phoneme;
mod value_objects;

pub use affix::{parse_affixes, Affix, Affixes};
pub use aggregate::Voicebank;
pub use character::{parse_character, Character};
pub use errors::PhonemeLineError;
pub use phoneme::{parse_phoneme_line, parse_phonemes, Phoneme, Phonemes};
pub use value_objects::{
    character_path, oto_path, prefix_map_path, CHARACTER_FILE_NAME, OTO_FILE_NAME,
    PREFIX_MAP_FILE_NAME,
};
