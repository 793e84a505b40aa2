use std::io::Read;

use crate::ParseError;
use crate::cursor::{Cursor, ReadCursor, StrCursor};
use crate::value::Value;

mod array;
mod literal;
mod number;
mod object;
mod string;
mod value;

/// Parse a complete JSON text into a [`Value`].
///
/// The input must contain exactly one top-level value surrounded by
/// nothing but insignificant whitespace.
pub fn parse_str(source: impl AsRef<str>) -> Result<Value, ParseError> {
    Parser::new(StrCursor::new(source.as_ref())).parse()
}

/// Parse JSON from a reader, consuming it from its current position
/// through to end of stream.
///
/// On error the reader is left wherever parsing stopped. The reader is
/// pulled a byte at a time, so wrap slow sources in a
/// [`BufReader`](std::io::BufReader).
pub fn parse_reader<R: Read>(reader: R) -> Result<Value, ParseError> {
    Parser::new(ReadCursor::new(reader)).parse()
}

/// Parse JSON from a caller-supplied [`Cursor`] implementation.
pub fn parse_cursor<C: Cursor>(cursor: C) -> Result<Value, ParseError> {
    Parser::new(cursor).parse()
}

pub(crate) struct Parser<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> Parser<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Parser { cursor }
    }

    /// Top-level driver: exactly one value, whitespace everywhere else.
    pub(crate) fn parse(mut self) -> Result<Value, ParseError> {
        let mut result = None;

        loop {
            self.skip_whitespace()?;
            if self.peek()?.is_none() {
                break;
            }
            if result.is_some() {
                // Second top-level value (trailing content).
                return Err(ParseError::InvalidData);
            }
            result = Some(value::parse_value(&mut self)?);
        }

        result.ok_or(ParseError::InvalidData)
    }

    pub(crate) fn peek(&mut self) -> Result<Option<u8>, ParseError> {
        self.cursor.peek()
    }

    /// Consume and return the byte at the cursor, `None` at end of
    /// input.
    pub(crate) fn bump(&mut self) -> Result<Option<u8>, ParseError> {
        let byte = self.cursor.peek()?;
        if byte.is_some() {
            self.cursor.advance()?;
        }
        Ok(byte)
    }

    /// Un-read the byte consumed by the last `bump`. One step only.
    pub(crate) fn retreat(&mut self) {
        self.cursor.retreat();
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Skip insignificant whitespace: space, tab, line feed, carriage
    /// return.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(byte) = self.cursor.peek()? {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.cursor.advance()?,
                _ => break,
            }
        }
        Ok(())
    }
}
