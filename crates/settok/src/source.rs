//! Pull-based character sources.
//!
//! A [`CharSource`] is a byte cursor the tokenizer borrows for the duration
//! of one call: fetch one byte and advance, push the most recent byte back,
//! and report exhaustion. End of input is signalled in-band with the
//! [`END_OF_TEXT`] sentinel; because `0x03` can also occur as data, a fetch
//! of the sentinel only means exhaustion when [`CharSource::is_empty`] agrees.

use alloc::vec::Vec;

use thiserror::Error;

/// Sentinel byte returned by [`CharSource::fetch`] once the source has run
/// dry. Disambiguated from a literal `0x03` data byte only by also checking
/// [`CharSource::is_empty`].
pub const END_OF_TEXT: u8 = 0x03;

/// Reported by [`CharSource::init_check`] when a source was constructed
/// without backing input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The source has no backing input; fetches would only produce the
    /// sentinel.
    #[error("source has no backing input")]
    NoInit,
}

/// A pull-based byte source with a single level of push-back.
///
/// Contract
/// - [`fetch`](Self::fetch) advances the cursor even past the end, so one
///   [`unfetch`](Self::unfetch) after fetching the sentinel replays the
///   sentinel exactly as it would replay a real byte.
/// - [`unfetch`](Self::unfetch) must honor at least one level of push-back;
///   the tokenizer never needs more than the single delimiter it just read.
/// - [`is_empty`](Self::is_empty) is true once the cursor sits at or past
///   the end of the input.
pub trait CharSource {
    /// Returns the next byte and advances, or [`END_OF_TEXT`] at the end.
    fn fetch(&mut self) -> u8;

    /// Pushes the most recently fetched byte back so the next
    /// [`fetch`](Self::fetch) sees it again.
    fn unfetch(&mut self);

    /// Whether the cursor is at or past the end of the input.
    fn is_empty(&self) -> bool;

    /// Whether the source was constructed with usable input.
    fn init_check(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn fetch(&mut self) -> u8 {
        (**self).fetch()
    }

    fn unfetch(&mut self) {
        (**self).unfetch();
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn init_check(&self) -> Result<(), SourceError> {
        (**self).init_check()
    }
}

/// An in-memory [`CharSource`] over owned bytes.
///
/// A default-constructed source has no backing input and fails
/// [`init_check`](CharSource::init_check) until [`set_to`](Self::set_to) is
/// called.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    data: Option<Vec<u8>>,
    pos: usize,
}

impl MemorySource {
    /// Creates a source over `data` with the cursor at the first byte.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            pos: 0,
        }
    }

    /// Replaces the backing input and rewinds the cursor.
    pub fn set_to(&mut self, data: impl Into<Vec<u8>>) {
        self.data = Some(data.into());
        self.pos = 0;
    }

    /// Current cursor position. Grows past the input length once the
    /// sentinel has been fetched.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl CharSource for MemorySource {
    fn fetch(&mut self) -> u8 {
        let byte = match &self.data {
            Some(data) if self.pos < data.len() => data[self.pos],
            _ => END_OF_TEXT,
        };
        // Advancing past the end keeps unfetch symmetric for the sentinel.
        self.pos += 1;
        byte
    }

    fn unfetch(&mut self) {
        debug_assert!(self.pos > 0, "unfetch before any fetch");
        self.pos = self.pos.saturating_sub(1);
    }

    fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|data| self.pos >= data.len())
    }

    fn init_check(&self) -> Result<(), SourceError> {
        if self.data.is_some() {
            Ok(())
        } else {
            Err(SourceError::NoInit)
        }
    }
}
