//! Voicebank Context - prefix.map 解析
//!
//! 每行格式: `<音名>\t<前缀>\t<后缀>`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// prefix.map 中的一行：某个音高对应的前缀/后缀
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    pub prefix: String,
    pub suffix: String,
}

impl Affix {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// 给别名加上前缀和后缀
    pub fn apply(&self, alias: &str) -> String {
        format!("{}{}{}", self.prefix, alias, self.suffix)
    }
}

/// 整个 prefix.map，按音名（如 `C4`）索引
pub type Affixes = BTreeMap<String, Affix>;

/// 从 prefix.map 文本解析
///
/// 只接受恰好 3 个 tab 分隔字段的行，其余行直接跳过。
/// 同一音名重复出现时后者覆盖前者。解析本身不会失败。
pub fn parse_affixes(text: &str) -> Affixes {
    let mut affixes = Affixes::new();

    for line in text.split('\n') {
        let fields: Vec<&str> = line.split('\t').collect();
        if let [note, prefix, suffix] = fields.as_slice() {
            affixes.insert(note.to_string(), Affix::new(*prefix, *suffix));
        }
    }

    affixes
}
