//! Voicebank Context - character.txt 解析

use serde::{Deserialize, Serialize};

/// 音源元数据（character.txt）
///
/// 缺失的字段保持为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub image_path: String,
    pub sample_wave_path: String,
    pub author: String,
    pub web_url_path: String,
}

impl Character {
    /// 是否所有字段都为空
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.image_path.is_empty()
            && self.sample_wave_path.is_empty()
            && self.author.is_empty()
            && self.web_url_path.is_empty()
    }
}

/// 从 character.txt 文本解析
///
/// 每行按 `=` 切分，恰好 2 段才生效；键区分大小写，
/// 只认 `name` / `image` / `sample` / `author` / `web`，其余忽略。
/// 同一键多次出现时取最后一次。
pub fn parse_character(text: &str) -> Character {
    let mut character = Character::default();

    for line in text.split('\n') {
        let fields: Vec<&str> = line.split('=').collect();
        let [key, value] = fields.as_slice() else {
            continue;
        };

        let slot = match *key {
            "name" => &mut character.name,
            "image" => &mut character.image_path,
            "sample" => &mut character.sample_wave_path,
            "author" => &mut character.author,
            "web" => &mut character.web_url_path,
            _ => continue,
        };
        *slot = value.to_string();
    }

    character
}
