//! Error taxonomy for token reads.

use thiserror::Error;

use crate::source::SourceError;

/// Errors surfaced by [`Tokenizer::read_token`](crate::Tokenizer::read_token).
///
/// Every variant is local to one read attempt; the tokenizer never retries
/// internally. Recovery across line boundaries (after
/// [`UnterminatedQuotedString`](Self::UnterminatedQuotedString) or
/// [`StringTooLong`](Self::StringTooLong)) is the caller's job, typically via
/// [`Tokenizer::skip_line`](crate::Tokenizer::skip_line). On every variant
/// except [`BufferTooSmall`](Self::BufferTooSmall) and
/// [`Source`](Self::Source) the output buffer holds the terminated prefix
/// accumulated before the error was detected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A backslash was immediately followed by a newline or the end of the
    /// stream; a line ending cannot be escaped.
    #[error("line ending cannot be escaped")]
    InvalidEscape,

    /// A newline was encountered inside a quoted token before the matching
    /// quote.
    #[error("quoted string not closed before end of line")]
    UnterminatedQuotedString,

    /// The accumulated length reached capacity before the token closed; the
    /// buffer holds the truncated, terminated prefix.
    #[error("token does not fit in the output buffer")]
    StringTooLong,

    /// The output buffer cannot hold even a terminator. Detected before any
    /// source access.
    #[error("output buffer cannot hold a terminator")]
    BufferTooSmall,

    /// The scanner reached a state it cannot account for. A logic-error
    /// signal, not an expected runtime condition.
    #[error("scanner reached an impossible state")]
    UnexpectedState,

    /// The character source reported itself unusable; propagated unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}
