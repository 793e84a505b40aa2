use crate::ParseError;

mod stream;
mod string;

pub use stream::ReadCursor;
pub use string::StrCursor;

/// A sequential, byte-at-a-time view over parser input.
///
/// The parser only ever needs to look at the current byte, step
/// forward, and occasionally step back a single byte after a
/// sub-parser has over-read (the number parser consumes greedily and
/// un-reads the first byte that is not part of the number). Backends
/// therefore only have to support one step of rewind.
///
/// `peek` and `advance` are fallible because a stream backend can hit
/// an I/O error at any point; the in-memory backend never fails.
pub trait Cursor {
    /// Byte at the cursor without consuming it. `None` at end of input.
    fn peek(&mut self) -> Result<Option<u8>, ParseError>;

    /// Step forward one byte. Calling this at end of input is a
    /// contract violation; callers check [`Cursor::at_end`] (or peek)
    /// first.
    fn advance(&mut self) -> Result<(), ParseError>;

    /// Step back one byte. Only a single step of rewind is supported;
    /// a second retreat without an intervening advance does nothing.
    fn retreat(&mut self);

    /// 0-based byte offset of the next unread byte, used for error
    /// reporting.
    fn position(&self) -> usize;

    /// True once every byte has been consumed.
    fn at_end(&mut self) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_none())
    }
}

#[cfg(test)]
mod tests;
