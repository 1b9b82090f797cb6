//! Frames emitted by `display` instructions.

use std::borrow::Cow;

/// Ordered log of displayed message buffers.
///
/// Each entry is a snapshot of the full buffer at the time of the
/// `display` instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLog(Vec<Vec<u8>>);

impl DisplayLog {
    /// Create an empty display log.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a frame.
    #[inline]
    pub fn push(&mut self, frame: &[u8]) {
        self.0.push(frame.to_vec());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw frames, full buffer width.
    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Frames as text: each buffer up to its first NUL, lossily decoded.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|f| frame_text(f).into_owned()).collect()
    }
}

/// Text of one frame, as a terminal would show it.
pub(crate) fn frame_text(frame: &[u8]) -> Cow<'_, str> {
    let end = frame.iter().position(|&b| b == 0).unwrap_or(frame.len());
    String::from_utf8_lossy(&frame[..end])
}
