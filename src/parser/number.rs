use super::*;

/// The three sections of a JSON number, entered left to right only.
enum State {
    Integer,
    Fraction,
    Exponent,
}

/// Parse a JSON number into an `f64`.
///
/// Consumes greedily until a byte cannot extend the current state,
/// then un-reads that byte so the caller can reinterpret it. Grammar
/// violations all report "invalid number literal" at the number's
/// first byte, not at the byte where validation failed.
pub(super) fn parse_number<C: Cursor>(parser: &mut Parser<C>) -> Result<f64, ParseError> {
    let start = parser.position();
    let mut state = State::Integer;

    let negative = match parser.peek()? {
        Some(b'-') => {
            parser.bump()?;
            true
        }
        _ => false,
    };

    let mut int_acc: f64 = 0.0;
    let mut int_digits: u32 = 0;
    let mut leading_zero = false;

    let mut frac_acc: f64 = 0.0;
    let mut frac_digits: i32 = 0;
    let mut seen_dot = false;

    let mut exp_acc: i32 = 0;
    let mut exp_digits: u32 = 0;
    let mut exp_negative = false;
    let mut seen_exp = false;

    loop {
        let Some(byte) = parser.bump()? else {
            break;
        };

        match state {
            State::Integer => match byte {
                b'0'..=b'9' => {
                    if leading_zero {
                        return Err(ParseError::InvalidNumber { position: start });
                    }
                    if int_digits == 0 && byte == b'0' {
                        leading_zero = true;
                    }
                    int_acc = int_acc * 10.0 + f64::from(byte - b'0');
                    int_digits += 1;
                }
                b'.' => {
                    seen_dot = true;
                    state = State::Fraction;
                }
                b'e' | b'E' => {
                    exp_negative = consume_exponent_sign(parser)?;
                    seen_exp = true;
                    state = State::Exponent;
                }
                _ => {
                    parser.retreat();
                    break;
                }
            },
            State::Fraction => match byte {
                b'0'..=b'9' => {
                    frac_digits += 1;
                    frac_acc += f64::from(byte - b'0') * 10f64.powi(-frac_digits);
                }
                b'e' | b'E' => {
                    exp_negative = consume_exponent_sign(parser)?;
                    seen_exp = true;
                    state = State::Exponent;
                }
                _ => {
                    parser.retreat();
                    break;
                }
            },
            State::Exponent => match byte {
                b'0'..=b'9' => {
                    exp_acc = exp_acc
                        .saturating_mul(10)
                        .saturating_add(i32::from(byte - b'0'));
                    exp_digits += 1;
                }
                _ => {
                    parser.retreat();
                    break;
                }
            },
        }
    }

    let missing_int = int_digits == 0;
    let missing_frac = seen_dot && frac_digits == 0;
    let missing_exp = seen_exp && exp_digits == 0;
    if missing_int || missing_frac || missing_exp {
        return Err(ParseError::InvalidNumber { position: start });
    }

    let exponent = if exp_negative { -exp_acc } else { exp_acc };
    let mut number = (int_acc + frac_acc) * 10f64.powi(exponent);
    if negative {
        number = -number;
    }
    Ok(number)
}

/// A single `+` or `-` may directly follow the exponent marker.
fn consume_exponent_sign<C: Cursor>(parser: &mut Parser<C>) -> Result<bool, ParseError> {
    match parser.peek()? {
        Some(b'+') => {
            parser.bump()?;
            Ok(false)
        }
        Some(b'-') => {
            parser.bump()?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
