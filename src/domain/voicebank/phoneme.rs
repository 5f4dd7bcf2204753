//! Voicebank Context - oto.ini 解析
//!
//! 每行格式: `<文件名>=<别名>,<左空白>,<辅音>,<右空白>,<先行发声>,<重叠>`
//! 数值单位为毫秒，允许为负（右空白为负时表示从文件末尾往回计算）。

use serde::{Deserialize, Serialize};

use super::PhonemeLineError;

/// oto.ini 的一条记录，对应一个采样文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phoneme {
    pub filename: String,
    pub alias: String,
    pub left_blank: f64,
    pub consonant: f64,
    pub right_blank: f64,
    pub pre_utterance: f64,
    pub overlap: f64,
}

/// 一个 oto.ini 的全部记录
///
/// 保持源文件行序，同一别名出现多次时全部保留
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phonemes(Vec<Phoneme>);

impl Phonemes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phoneme> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Phoneme] {
        &self.0
    }

    /// 按别名查找，返回第一条匹配的记录
    pub fn find_by_alias(&self, alias: &str) -> Option<&Phoneme> {
        self.0.iter().find(|p| p.alias == alias)
    }
}

impl From<Vec<Phoneme>> for Phonemes {
    fn from(entries: Vec<Phoneme>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a Phonemes {
    type Item = &'a Phoneme;
    type IntoIter = std::slice::Iter<'a, Phoneme>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 解析 oto.ini 的单行
///
/// 依次检查：字段数、别名分隔符、5 个数值字段。
/// 数值字段报告第一个解析失败的位置（按逗号字段从 1 开始计数）。
pub fn parse_phoneme_line(line: &str) -> Result<Phoneme, PhonemeLineError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        return Err(PhonemeLineError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let head = fields[0];
    if !head.contains('=') {
        return Err(PhonemeLineError::MissingAlias(head.to_string()));
    }
    let (filename, alias) = match head.split('=').collect::<Vec<_>>().as_slice() {
        [filename, alias] => (filename.to_string(), alias.to_string()),
        _ => return Err(PhonemeLineError::InvalidAlias(head.to_string())),
    };

    let mut values = [0.0_f64; 5];
    for (i, raw) in fields[1..].iter().enumerate() {
        values[i] = parse_number(raw).ok_or_else(|| PhonemeLineError::InvalidNumber {
            index: i + 2,
            value: raw.to_string(),
        })?;
    }
    let [left_blank, consonant, right_blank, pre_utterance, overlap] = values;

    Ok(Phoneme {
        filename,
        alias,
        left_blank,
        consonant,
        right_blank,
        pre_utterance,
        overlap,
    })
}

/// 解析一个数值字段
///
/// 超出 f64 范围的数（如 `1e400`）视为无效，只有字面量 `inf` / `infinity` 才得到无穷大
fn parse_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_infinite() {
        let unsigned = raw.trim_start_matches(['+', '-']);
        if !unsigned.eq_ignore_ascii_case("inf") && !unsigned.eq_ignore_ascii_case("infinity") {
            return None;
        }
    }
    Some(value)
}

/// 解析整个 oto.ini 文本
///
/// 格式错误的行会被跳过（记录 debug 日志），不会中断解析，也不会返回错误。
pub fn parse_phonemes(text: &str) -> Phonemes {
    let mut entries = Vec::new();

    for (line_no, line) in text.split('\n').enumerate() {
        match parse_phoneme_line(line) {
            Ok(phoneme) => entries.push(phoneme),
            Err(_) if line.is_empty() => {}
            Err(e) => {
                tracing::debug!(line = line_no + 1, error = %e, "Skipping malformed oto.ini line");
            }
        }
    }

    Phonemes(entries)
}
