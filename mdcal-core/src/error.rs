//! Error types for the mdcal ecosystem.

use thiserror::Error;

/// Reasons a single event block can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("event title is empty")]
    EmptyTitle,

    #[error("no date line found after the title")]
    MissingDate,

    #[error("invalid date line '{0}' (expected DD.MM.YYYY or DD.MM.YYYY - DD.MM.YYYY)")]
    InvalidDate(String),

    #[error("date range '{0}' ends before it starts")]
    InvertedRange(String),

    /// Reserved. Tag lines are optionally recognized (a non-tag line is
    /// just description text), so nothing produces this today.
    #[error("malformed tag line '{0}'")]
    MalformedTagLine(String),
}

/// A [`ParseError`] tied to the block it came from, with enough context
/// to point the user at the offending markdown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line} ('{heading}'): {error}")]
pub struct BlockError {
    /// 1-based line number of the block's heading in the source file.
    pub line: usize,
    /// The raw heading line of the block.
    pub heading: String,
    pub error: ParseError,
}
