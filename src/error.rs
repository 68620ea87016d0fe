//! Error type for version text parsing

use thiserror::Error;

/// Error type for parsing version text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input had fewer than two dot-separated segments
    #[error("version needs at least major and minor segments: {0:?}")]
    NotEnoughSegments(String),

    /// Major segment starts with a letter other than a `v`/`V` prefix
    #[error("major segment starts with a letter: {0:?}")]
    LetterPrefixedMajor(String),
}
