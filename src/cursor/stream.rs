use std::io::{ErrorKind, Read};

use super::Cursor;
use crate::ParseError;

/// Cursor over an exhaustible input stream.
///
/// The stream is read strictly forward, one byte at a time; no seeking
/// is ever attempted. Rewind is modelled as an explicit one-byte
/// pushback slot holding the most recently consumed byte, which keeps
/// the contract independent of the reader's own capabilities.
pub struct ReadCursor<R: Read> {
    reader: R,
    /// Byte restored by `retreat`, served before any fresh read.
    pushback: Option<u8>,
    /// Byte fetched by `peek` but not yet consumed.
    lookahead: Option<u8>,
    /// Most recently consumed byte, kept so `retreat` can restore it.
    behind: Option<u8>,
    eof: bool,
    position: usize,
}

impl<R: Read> ReadCursor<R> {
    pub fn new(reader: R) -> Self {
        ReadCursor {
            reader,
            pushback: None,
            lookahead: None,
            behind: None,
            eof: false,
            position: 0,
        }
    }

    /// Ensure the lookahead slot is populated, unless the stream is
    /// exhausted. Interrupted reads are retried; any other read error
    /// aborts the parse.
    fn fill(&mut self) -> Result<(), ParseError> {
        if self.lookahead.is_some() || self.eof {
            return Ok(());
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(_) => {
                    self.lookahead = Some(byte[0]);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(ParseError::Io {
                        message: e.to_string(),
                    });
                }
            }
        }
    }
}

impl<R: Read> Cursor for ReadCursor<R> {
    fn peek(&mut self) -> Result<Option<u8>, ParseError> {
        if self.pushback.is_some() {
            return Ok(self.pushback);
        }
        self.fill()?;
        Ok(self.lookahead)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        if let Some(byte) = self.pushback.take() {
            self.behind = Some(byte);
            self.position += 1;
            return Ok(());
        }

        self.fill()?;
        if let Some(byte) = self.lookahead.take() {
            self.behind = Some(byte);
            self.position += 1;
        } else {
            debug_assert!(false, "advance past end of input");
        }
        Ok(())
    }

    fn retreat(&mut self) {
        debug_assert!(self.pushback.is_none(), "only one step of rewind is supported");
        if let Some(byte) = self.behind.take() {
            self.pushback = Some(byte);
            self.position -= 1;
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}
