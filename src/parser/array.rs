use super::*;

/// Parse an array, starting at its `[`.
///
/// An "expecting comma" flag flips between element and separator
/// positions. A `]` with the flag clear only closes the array while it
/// is still empty; after a comma it would be a trailing comma, which
/// is rejected.
pub(super) fn parse_array<C: Cursor>(parser: &mut Parser<C>) -> Result<Value, ParseError> {
    // Opening bracket, already seen by the dispatcher.
    parser.bump()?;

    let mut items = Vec::new();
    let mut expecting_comma = false;

    loop {
        parser.skip_whitespace()?;
        let position = parser.position();

        let Some(byte) = parser.peek()? else {
            return Err(ParseError::ArrayNotClosed {
                position: parser.position(),
            });
        };

        if expecting_comma {
            match byte {
                b',' => {
                    parser.bump()?;
                    expecting_comma = false;
                }
                b']' => {
                    parser.bump()?;
                    break;
                }
                other => {
                    return Err(ParseError::ExpectedCommaOrEnd {
                        close: ']',
                        found: other as char,
                        position,
                    });
                }
            }
        } else if byte == b']' {
            parser.bump()?;
            if !items.is_empty() {
                // A `]` straight after a comma: trailing comma.
                return Err(ParseError::ExpectedValue { position });
            }
            break;
        } else {
            items.push(value::parse_value(parser)?);
            expecting_comma = true;
        }
    }

    Ok(Value::Array(items))
}
