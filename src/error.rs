use std::fmt;

/// The error type for everything that can go wrong while parsing JSON
/// or extracting a typed payload from a parsed [`Value`](crate::Value).
///
/// Most variants carry the 0-based byte offset at which the problem was
/// detected; [`ParseError::position`] exposes it uniformly. A failing
/// parse never yields a partial value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input held no value at all (empty or whitespace-only), or held
    /// more than one top-level value.
    InvalidData,
    /// A token that is not `true`, `false` or `null` where a literal
    /// (or nothing else) could start.
    InvalidLiteral {
        position: usize,
    },
    /// A number violating the RFC 8259 numeric grammar: leading zeros,
    /// a decimal point or exponent marker with no digits after it, or
    /// a minus sign with no integer part.
    InvalidNumber {
        position: usize,
    },
    /// A backslash followed by a character outside the escape map.
    InvalidEscape {
        character: char,
        position: usize,
    },
    /// A non-hex character inside a `\u` escape.
    InvalidHexDigit {
        character: char,
        position: usize,
    },
    /// A `\u` escape naming a surrogate code point. Surrogate pairs
    /// are not joined; code points above the Basic Multilingual Plane
    /// cannot be written as escapes.
    SurrogateEscape {
        position: usize,
    },
    /// Raised for stream input whose raw string bytes are not valid
    /// UTF-8. Positioned at the string literal's opening quote.
    InvalidUtf8 {
        position: usize,
    },
    /// Input ended inside a string literal.
    UnterminatedString {
        position: usize,
    },
    /// A `]` where an array element was required (trailing comma).
    ExpectedValue {
        position: usize,
    },
    /// An object member that does not start with a string key.
    ExpectedObjectKey {
        position: usize,
    },
    /// A missing `:` between an object key and its value.
    ExpectedColon {
        found: char,
        position: usize,
    },
    /// A missing separator between collection entries; `close` is the
    /// bracket that would also have been legal (`]` or `}`).
    ExpectedCommaOrEnd {
        close: char,
        found: char,
        position: usize,
    },
    /// Input ended before an array's closing `]`.
    ArrayNotClosed {
        position: usize,
    },
    /// Input ended before an object's closing `}`.
    ObjectNotClosed {
        position: usize,
    },
    /// A typed accessor was asked for a variant the value does not hold.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The underlying reader failed mid-parse.
    Io {
        message: String,
    },
}

impl ParseError {
    /// Byte offset at which the error was detected, where determinable.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::InvalidLiteral { position }
            | ParseError::InvalidNumber { position }
            | ParseError::InvalidEscape { position, .. }
            | ParseError::InvalidHexDigit { position, .. }
            | ParseError::SurrogateEscape { position }
            | ParseError::InvalidUtf8 { position }
            | ParseError::UnterminatedString { position }
            | ParseError::ExpectedValue { position }
            | ParseError::ExpectedObjectKey { position }
            | ParseError::ExpectedColon { position, .. }
            | ParseError::ExpectedCommaOrEnd { position, .. }
            | ParseError::ArrayNotClosed { position }
            | ParseError::ObjectNotClosed { position } => Some(*position),
            ParseError::InvalidData
            | ParseError::TypeMismatch { .. }
            | ParseError::Io { .. } => None,
        }
    }

    fn message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidData => write!(f, "invalid JSON data"),
            ParseError::InvalidLiteral { .. } => write!(f, "invalid literal"),
            ParseError::InvalidNumber { .. } => write!(f, "invalid number literal"),
            ParseError::InvalidEscape { character, .. } => {
                write!(f, "invalid escape character '{}'", character)
            }
            ParseError::InvalidHexDigit { character, .. } => {
                write!(f, "invalid hex character '{}'", character)
            }
            ParseError::SurrogateEscape { .. } => {
                write!(f, "unsupported surrogate in unicode escape")
            }
            ParseError::InvalidUtf8 { .. } => {
                write!(f, "invalid utf-8 in string literal")
            }
            ParseError::UnterminatedString { .. } => write!(f, "unterminated string literal"),
            ParseError::ExpectedValue { .. } => write!(f, "expected value"),
            ParseError::ExpectedObjectKey { .. } => {
                write!(f, "expected string literal as object key")
            }
            ParseError::ExpectedColon { found, .. } => {
                write!(f, "expected ':' after object key, found '{}'", found)
            }
            ParseError::ExpectedCommaOrEnd { close, found, .. } => {
                write!(f, "expected ',' or '{}', found '{}'", close, found)
            }
            ParseError::ArrayNotClosed { .. } => write!(f, "array not closed"),
            ParseError::ObjectNotClosed { .. } => write!(f, "object not closed"),
            ParseError::TypeMismatch { expected, found } => {
                write!(f, "expected {}, got {}", expected, found)
            }
            ParseError::Io { message } => write!(f, "i/o error: {}", message),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => {
                write!(f, "Error at position {}: ", position)?;
                self.message(f)
            }
            None => self.message(f),
        }
    }
}

impl std::error::Error for ParseError {}
