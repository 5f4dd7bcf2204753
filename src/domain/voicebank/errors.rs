//! Voicebank Context - Errors

use thiserror::Error;

/// oto.ini 单行解析错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhonemeLineError {
    #[error("expected 6 comma-separated fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("missing alias separator '=' in {0:?}")]
    MissingAlias(String),

    #[error("invalid alias in {0:?}: expected exactly one '='")]
    InvalidAlias(String),

    #[error("field {index} is not a number: {value:?}")]
    InvalidNumber { index: usize, value: String },
}
