//! Voicebank Context - Value Objects
//!
//! 音源目录中各元数据文件的固定位置

use std::path::{Path, PathBuf};

/// 每个子目录下的时序表
pub const OTO_FILE_NAME: &str = "oto.ini";

/// 音源根目录下的角色信息
pub const CHARACTER_FILE_NAME: &str = "character.txt";

/// 音源根目录下的音高前后缀表
pub const PREFIX_MAP_FILE_NAME: &str = "prefix.map";

/// `<root>/<dir_name>/oto.ini`
pub fn oto_path(root: &Path, dir_name: &str) -> PathBuf {
    root.join(dir_name).join(OTO_FILE_NAME)
}

/// `<root>/character.txt`
pub fn character_path(root: &Path) -> PathBuf {
    root.join(CHARACTER_FILE_NAME)
}

/// `<root>/prefix.map`
pub fn prefix_map_path(root: &Path) -> PathBuf {
    root.join(PREFIX_MAP_FILE_NAME)
}
