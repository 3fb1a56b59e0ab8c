use std::num::ParseIntError;

use thiserror::Error;

/// Error produced when parsing twist notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the notation grammar.
    #[error("syntax error at byte {offset}")]
    Syntax {
        /// Byte offset of the first twist that could not be parsed.
        offset: usize,
    },
    /// Repeat count of zero, as in `x0*0`.
    #[error("repeat count must be at least 1")]
    ZeroRepeat,
    /// Repeat counts expand to more than [`crate::MAX_TWISTS`] twists.
    #[error("sequence expands to more than {} twists", crate::MAX_TWISTS)]
    TooManyTwists,
    /// Slice index or repeat count does not fit in an integer.
    #[error("{0}")]
    Int(#[from] ParseIntError),
}
