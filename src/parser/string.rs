use super::*;

/// Parse a string literal, including the surrounding quotes, into its
/// decoded form.
///
/// The loop runs a three-state machine: Normal (plain bytes), Escape
/// (the byte after a backslash) and UnicodeEscape (the four hex digits
/// of `\uXXXX`). Decoded bytes accumulate in a buffer that is checked
/// as UTF-8 once at the closing quote; `&str` input can only fail that
/// check via surrogate escapes, which are rejected earlier with their
/// own error.
pub(super) fn parse_string<C: Cursor>(parser: &mut Parser<C>) -> Result<String, ParseError> {
    let start = parser.position();
    // Opening quote, already seen by the dispatcher.
    parser.bump()?;

    let mut decoded: Vec<u8> = Vec::new();

    loop {
        let Some(byte) = parser.bump()? else {
            return Err(ParseError::UnterminatedString {
                position: parser.position(),
            });
        };

        match byte {
            b'"' => break,
            b'\\' => parse_escape(parser, &mut decoded)?,
            _ => decoded.push(byte),
        }
    }

    String::from_utf8(decoded).map_err(|_| ParseError::InvalidUtf8 { position: start })
}

/// Decode the byte following a backslash.
fn parse_escape<C: Cursor>(parser: &mut Parser<C>, decoded: &mut Vec<u8>) -> Result<(), ParseError> {
    let position = parser.position();
    let Some(byte) = parser.bump()? else {
        return Err(ParseError::UnterminatedString {
            position: parser.position(),
        });
    };

    let translated = match byte {
        b'"' => b'"',
        b'\\' => b'\\',
        b'/' => b'/',
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'u' => return parse_unicode_escape(parser, decoded),
        other => {
            return Err(ParseError::InvalidEscape {
                character: other as char,
                position,
            });
        }
    };
    decoded.push(translated);
    Ok(())
}

/// Decode the four hex digits of a `\u` escape and append the code
/// point's UTF-8 encoding.
///
/// Only the Basic Multilingual Plane is reachable from a single
/// escape; surrogate halves are rejected rather than joined into
/// 4-byte sequences.
fn parse_unicode_escape<C: Cursor>(
    parser: &mut Parser<C>,
    decoded: &mut Vec<u8>,
) -> Result<(), ParseError> {
    let start = parser.position();
    let mut code_point: u16 = 0;

    for _ in 0..4 {
        let position = parser.position();
        let Some(byte) = parser.bump()? else {
            return Err(ParseError::UnterminatedString {
                position: parser.position(),
            });
        };

        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            other => {
                return Err(ParseError::InvalidHexDigit {
                    character: other as char,
                    position,
                });
            }
        };
        code_point = code_point * 16 + u16::from(digit);
    }

    if (0xD800..=0xDFFF).contains(&code_point) {
        return Err(ParseError::SurrogateEscape { position: start });
    }

    if code_point <= 0x7F {
        decoded.push(code_point as u8);
    } else if code_point <= 0x7FF {
        decoded.push(0b1100_0000 | (code_point >> 6) as u8);
        decoded.push(0b1000_0000 | (code_point & 0b11_1111) as u8);
    } else {
        decoded.push(0b1110_0000 | (code_point >> 12) as u8);
        decoded.push(0b1000_0000 | ((code_point >> 6) & 0b11_1111) as u8);
        decoded.push(0b1000_0000 | (code_point & 0b11_1111) as u8);
    }
    Ok(())
}
