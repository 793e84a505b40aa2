use super::*;

/// `false` is the longest literal spelling.
const LONGEST_LITERAL: usize = 5;

/// Parse one of the literal tokens `true`, `false` or `null`.
///
/// Bytes are accumulated one at a time and the whole prefix compared
/// after each; on an exact match nothing further is consumed. Errors
/// point at the literal's first byte, not wherever matching gave up.
pub(super) fn parse_literal<C: Cursor>(parser: &mut Parser<C>) -> Result<Value, ParseError> {
    let start = parser.position();
    let mut accumulated = Vec::with_capacity(LONGEST_LITERAL);

    while let Some(byte) = parser.bump()? {
        accumulated.push(byte);

        match accumulated.as_slice() {
            b"true" => return Ok(Value::Bool(true)),
            b"false" => return Ok(Value::Bool(false)),
            b"null" => return Ok(Value::Null),
            _ => {}
        }

        if accumulated.len() > LONGEST_LITERAL {
            break;
        }
    }

    Err(ParseError::InvalidLiteral { position: start })
}
