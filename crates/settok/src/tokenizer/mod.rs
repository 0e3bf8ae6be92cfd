//! Single-token scanner for the settings format.
//!
//! Overview
//! - [`Tokenizer::read_token`] runs a four-state scanner over the source,
//!   one fetched byte per iteration: `Start` (skipping leading whitespace
//!   and classifying the first byte), `Unquoted`, `Quoted` (carrying the
//!   opening quote), and `Escape` (carrying the state to resume once the
//!   escaped byte is captured).
//! - A `#` fetched in `Start` turns the rest of the line into a comment;
//!   fetched anywhere later it is ordinary data. Comment lines resolve to
//!   [`Read::EndOfLine`] (or [`Read::EndOfStream`]) after the body is
//!   drained, so callers never observe a comment status.
//! - Two order-sensitive corrections run after the scan loop, before the
//!   buffer is terminated:
//!   1. comment drain, pushing the newline back only when the comment cut
//!      off a partially built bare token;
//!   2. a newline or stream end while mid-bare-token is a *successful* read,
//!      with the boundary pushed back so the next call observes it again.
//!
//! Delimiter accounting
//! - Terminating whitespace is consumed with the token. Line and stream
//!   boundaries that close a bare token are pushed back. Newlines consumed
//!   by line-terminal conditions (empty line, comment line, unterminated
//!   quote, invalid escape) are gone for good.

use crate::{
    buffer::TokenBuf,
    error::ScanError,
    source::{CharSource, END_OF_TEXT},
};

/// Outcome of a read that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    /// A complete token was written to the buffer.
    Token,
    /// A newline ended the line before any token was found. For
    /// [`Tokenizer::skip_line`]: the cursor sits just past the newline, at
    /// the start of the next line.
    EndOfLine,
    /// The source ran dry before any token was found.
    EndOfStream,
}

/// Scanner state, one case per mode with the data needed to resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Unquoted,
    Quoted(u8),
    Escape(Resume),
}

/// Where an escape returns to once its byte has been captured. Escapes only
/// ever begin in (or enter) the unquoted and quoted states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Unquoted,
    Quoted(u8),
}

impl From<Resume> for State {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Unquoted => State::Unquoted,
            Resume::Quoted(quote) => State::Quoted(quote),
        }
    }
}

/// Why the scan loop stopped. `Comment` never survives the post-loop
/// corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Token,
    Line,
    Stream,
    Comment,
    TooLong,
    Unterminated,
    BadEscape,
}

/// Stateful scanner over a borrowed or owned [`CharSource`].
///
/// The tokenizer keeps no state of its own between calls; everything carries
/// over through the source's cursor. Callers must not interleave concurrent
/// calls against the same source.
#[derive(Debug)]
pub struct Tokenizer<S> {
    source: S,
}

impl<S: CharSource> Tokenizer<S> {
    /// Wraps `source`. Pass `&mut source` to keep ownership at the caller.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Shared access to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Exclusive access to the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the tokenizer, returning the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads the next token from the source into `out`.
    ///
    /// Leading spaces and tabs are skipped. The token is either a bare word
    /// (ended by whitespace, a newline, or the end of the stream) or a
    /// quoted string (ended by the matching quote). Backslash escapes turn
    /// the following byte into literal payload in both forms. Terminating
    /// whitespace and closing quotes are consumed; a line or stream boundary
    /// that closes a bare word is pushed back so the next call sees it.
    ///
    /// `out` is cleared first and its payload is NUL-terminated on every
    /// path, truncated to `capacity − 1` on overflow, so it always holds the
    /// longest valid prefix read.
    ///
    /// # Errors
    ///
    /// [`ScanError::BufferTooSmall`] for a zero-capacity `out` (no source
    /// byte is consumed), a propagated [`ScanError::Source`] when the source
    /// fails its init check, and otherwise the per-line conditions of the
    /// format: [`ScanError::InvalidEscape`],
    /// [`ScanError::UnterminatedQuotedString`] and
    /// [`ScanError::StringTooLong`].
    pub fn read_token(&mut self, out: &mut TokenBuf<'_>) -> Result<Read, ScanError> {
        if out.capacity() == 0 {
            return Err(ScanError::BufferTooSmall);
        }
        self.source.init_check()?;
        out.clear();

        let mut state = State::Start;
        let mut halt = loop {
            // Overflow guard: keep the terminator slot free. The byte that
            // would overflow stays unread in the source.
            if out.len() + 1 >= out.capacity() {
                break Halt::TooLong;
            }
            let ch = self.source.fetch();
            match state {
                State::Start => match ch {
                    b'#' => break Halt::Comment,
                    b' ' | b'\t' => {}
                    b'\n' => break Halt::Line,
                    b'\\' => state = State::Escape(Resume::Unquoted),
                    b'\'' | b'"' => state = State::Quoted(ch),
                    END_OF_TEXT if self.source.is_empty() => break Halt::Stream,
                    _ => {
                        out.push(ch);
                        state = State::Unquoted;
                    }
                },
                State::Unquoted => match ch {
                    b' ' | b'\t' => break Halt::Token,
                    b'\n' => break Halt::Line,
                    b'\\' => state = State::Escape(Resume::Unquoted),
                    END_OF_TEXT if self.source.is_empty() => break Halt::Stream,
                    // `#` only opens a comment before the token begins.
                    _ => out.push(ch),
                },
                State::Quoted(quote) => match ch {
                    _ if ch == quote => break Halt::Token,
                    b'\n' => break Halt::Unterminated,
                    b'\\' => state = State::Escape(Resume::Quoted(quote)),
                    END_OF_TEXT if self.source.is_empty() => break Halt::Stream,
                    _ => out.push(ch),
                },
                State::Escape(resume) => match ch {
                    b'\n' => break Halt::BadEscape,
                    END_OF_TEXT if self.source.is_empty() => break Halt::BadEscape,
                    _ => {
                        out.push(ch);
                        state = resume.into();
                    }
                },
            }
        };

        // Correction 1: drain the comment body to the line boundary. The
        // newline is pushed back only if the comment cut off a bare token
        // mid-build, so that read still observes its line boundary below.
        if halt == Halt::Comment {
            let ch = loop {
                let ch = self.source.fetch();
                if ch == b'\n' || (ch == END_OF_TEXT && self.source.is_empty()) {
                    break ch;
                }
            };
            if state == State::Unquoted {
                self.source.unfetch();
            }
            halt = if ch == b'\n' { Halt::Line } else { Halt::Stream };
        }

        // Correction 2: a line or stream boundary closes a bare token
        // successfully. Push the boundary back for the next call.
        if state == State::Unquoted && matches!(halt, Halt::Line | Halt::Stream) {
            self.source.unfetch();
            halt = Halt::Token;
        }

        out.terminate();

        match halt {
            Halt::Token => Ok(Read::Token),
            Halt::Line => Ok(Read::EndOfLine),
            Halt::Stream => Ok(Read::EndOfStream),
            Halt::TooLong => Err(ScanError::StringTooLong),
            Halt::Unterminated => Err(ScanError::UnterminatedQuotedString),
            Halt::BadEscape => Err(ScanError::InvalidEscape),
            // Comments resolve above; reaching here is a scanner bug.
            Halt::Comment => Err(ScanError::UnexpectedState),
        }
    }

    /// Discards the remainder of the current physical line.
    ///
    /// Returns [`Read::EndOfLine`] with the cursor just past the newline, or
    /// [`Read::EndOfStream`] if the source ran dry first. Used to
    /// resynchronize at the next line after a failed [`read_token`]
    /// (see [`Self::read_token`]).
    pub fn skip_line(&mut self) -> Read {
        loop {
            let ch = self.source.fetch();
            if ch == b'\n' {
                return Read::EndOfLine;
            }
            if ch == END_OF_TEXT && self.source.is_empty() {
                return Read::EndOfStream;
            }
        }
    }
}
