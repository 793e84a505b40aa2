use super::Cursor;
use crate::ParseError;

/// Cursor over a borrowed, complete input string.
///
/// Rewind is a plain index decrement, so the one-step limit of
/// [`Cursor::retreat`] costs nothing here; it exists for parity with
/// the stream backend.
pub struct StrCursor<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> StrCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        StrCursor {
            bytes: source.as_bytes(),
            index: 0,
        }
    }
}

impl Cursor for StrCursor<'_> {
    fn peek(&mut self) -> Result<Option<u8>, ParseError> {
        Ok(self.bytes.get(self.index).copied())
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        debug_assert!(self.index < self.bytes.len(), "advance past end of input");
        if self.index < self.bytes.len() {
            self.index += 1;
        }
        Ok(())
    }

    fn retreat(&mut self) {
        debug_assert!(self.index > 0, "retreat before start of input");
        self.index = self.index.saturating_sub(1);
    }

    fn position(&self) -> usize {
        self.index
    }
}
