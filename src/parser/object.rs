use super::*;

use indexmap::IndexMap;

/// Parse an object, starting at its `{`.
///
/// Each loop iteration walks one member through the four sub-states in
/// order: Name, Colon, Value, Comma. Duplicate keys are tolerated and
/// overwrite; the most recently parsed value for a key wins.
pub(super) fn parse_object<C: Cursor>(parser: &mut Parser<C>) -> Result<Value, ParseError> {
    // Opening brace, already seen by the dispatcher.
    parser.bump()?;

    let mut members: IndexMap<String, Value> = IndexMap::new();

    loop {
        // Name
        parser.skip_whitespace()?;
        let position = parser.position();
        match parser.peek()? {
            None => {
                return Err(ParseError::ObjectNotClosed {
                    position: parser.position(),
                });
            }
            Some(b'}') if members.is_empty() => {
                parser.bump()?;
                break;
            }
            Some(b'"') => {}
            Some(_) => {
                return Err(ParseError::ExpectedObjectKey { position });
            }
        }
        let key = string::parse_string(parser)?;

        // Colon
        parser.skip_whitespace()?;
        let position = parser.position();
        match parser.peek()? {
            None => {
                return Err(ParseError::ObjectNotClosed {
                    position: parser.position(),
                });
            }
            Some(b':') => {
                parser.bump()?;
            }
            Some(other) => {
                return Err(ParseError::ExpectedColon {
                    found: other as char,
                    position,
                });
            }
        }

        // Value
        parser.skip_whitespace()?;
        if parser.peek()?.is_none() {
            return Err(ParseError::ObjectNotClosed {
                position: parser.position(),
            });
        }
        let value = value::parse_value(parser)?;
        members.insert(key, value);

        // Comma
        parser.skip_whitespace()?;
        let position = parser.position();
        match parser.peek()? {
            None => {
                return Err(ParseError::ObjectNotClosed {
                    position: parser.position(),
                });
            }
            Some(b',') => {
                parser.bump()?;
            }
            Some(b'}') => {
                parser.bump()?;
                break;
            }
            Some(other) => {
                return Err(ParseError::ExpectedCommaOrEnd {
                    close: '}',
                    found: other as char,
                    position,
                });
            }
        }
    }

    Ok(Value::Object(members))
}
