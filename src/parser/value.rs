use super::*;

/// Route to a sub-parser based on the first significant byte.
///
/// Anything that cannot start a string, number, array or object falls
/// through to the literal parser, which is also what reports unknown
/// leading characters (a lone `]` or `}` included) as invalid.
pub(super) fn parse_value<C: Cursor>(parser: &mut Parser<C>) -> Result<Value, ParseError> {
    match parser.peek()? {
        Some(b'"') => string::parse_string(parser).map(Value::String),
        Some(b'-' | b'0'..=b'9') => number::parse_number(parser).map(Value::Number),
        Some(b'[') => array::parse_array(parser),
        Some(b'{') => object::parse_object(parser),
        Some(_) => literal::parse_literal(parser),
        None => Err(ParseError::InvalidData),
    }
}
