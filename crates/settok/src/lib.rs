//! A pull-based tokenizer for a legacy line-oriented settings file format.
//!
//! Overview
//! - Settings files are physical lines holding whitespace-separated tokens:
//!   bare words, `'…'`/`"…"` quoted strings (which may contain whitespace),
//!   backslash escapes that turn any following byte into a literal, and `#`
//!   comments that run to the end of the line. A `#` only opens a comment at
//!   the very start of a token; once a token has begun it is ordinary data.
//! - [`Tokenizer::read_token`] decodes exactly one token per call into a
//!   caller-supplied fixed-capacity [`TokenBuf`], and reports line and stream
//!   boundaries alongside the error conditions of the format. The companion
//!   [`Tokenizer::skip_line`] discards the rest of the current line so a
//!   caller can resynchronize after a malformed one.
//!
//! Sources
//! - Input comes from a [`CharSource`]: a pull-based byte cursor with a
//!   single level of push-back and an [`END_OF_TEXT`] sentinel that marks
//!   exhaustion. [`MemorySource`] is the in-memory implementation; anything
//!   that honors the contract works.
//!
//! The tokenizer decodes strings only. Recognizing keys and interpreting the
//! decoded values belongs to the caller.
//!
//! # Examples
//!
//! ```rust
//! use settok::{MemorySource, Read, TokenBuf, Tokenizer, MAX_TOKEN_LEN};
//!
//! let mut lexer = Tokenizer::new(MemorySource::new("app \"my file\" 3\n"));
//! let mut storage = [0u8; MAX_TOKEN_LEN];
//! let mut token = TokenBuf::new(&mut storage);
//!
//! assert_eq!(lexer.read_token(&mut token), Ok(Read::Token));
//! assert_eq!(token.as_bytes(), b"app");
//! assert_eq!(lexer.read_token(&mut token), Ok(Read::Token));
//! assert_eq!(token.as_bytes(), b"my file");
//! assert_eq!(lexer.read_token(&mut token), Ok(Read::Token));
//! assert_eq!(token.as_bytes(), b"3");
//! // The newline that closed the bare `3` is pushed back for this call.
//! assert_eq!(lexer.read_token(&mut token), Ok(Read::EndOfLine));
//! assert_eq!(lexer.read_token(&mut token), Ok(Read::EndOfStream));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod source;
mod tokenizer;

pub use buffer::{MAX_TOKEN_LEN, TokenBuf};
pub use error::ScanError;
pub use source::{CharSource, END_OF_TEXT, MemorySource, SourceError};
pub use tokenizer::{Read, Tokenizer};
