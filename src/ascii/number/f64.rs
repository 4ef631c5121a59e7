use super::digit::digit;
use crate::many::{many1, skip_many1};
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use crate::utf8::char::{char, one_of};

/// Parser for decimal numbers with a fractional part: `int.digits`, with an
/// optional sign and an optional exponent (e.g. `123.456`, `-42.7e-3`)
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

impl<'code> Parser<'code> for FloatParser {
    type Output = f64;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let start = state.clone();

        let state = match state.peek() {
            Some('-') | Some('+') => state.advance(1),
            _ => state,
        };
        let ((), state) = skip_many1(digit()).parse(state)?;
        let (_, state) = char('.').parse(state)?;
        let ((), state) = skip_many1(digit()).parse(state)?;

        let state = match exponent(state.clone()) {
            Ok(((), next)) => next,
            Err(_) => state,
        };

        let text = start
            .remaining()
            .get(..state.offset() - start.offset())
            .unwrap_or_default();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok((value, state)),
            _ => {
                // A complete float was read, so no alternative may reinterpret it
                let start = start.with_committed(true);
                Err(start.fail(start.custom_error("floating point overflow")))
            }
        }
    }
}

/// `e` or `E`, optional sign, digits
fn exponent<'code>(state: State<'code>) -> ParseResult<'code, ()> {
    let (_, state) = one_of("eE").parse(state)?;
    let state = match state.peek() {
        Some('-') | Some('+') => state.advance(1),
        _ => state,
    };
    let (_, state) = many1(digit()).parse(state)?;
    Ok(((), state))
}

/// Parser that matches ASCII floating point numbers
pub fn f64() -> FloatParser {
    FloatParser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_dot_uint() {
        let (value, state) = f64().parse(State::new("123.456abc")).unwrap();
        assert!((value - 123.456).abs() < f64::EPSILON);
        assert_eq!(state.peek(), Some('a'));
    }

    #[test]
    fn test_negative_int_dot_uint() {
        let (value, state) = f64().parse(State::new("-42.789xyz")).unwrap();
        assert!((value - (-42.789)).abs() < f64::EPSILON);
        assert_eq!(state.peek(), Some('x'));
    }

    #[test]
    fn test_leading_zeros_in_fraction() {
        let (value, _) = f64().parse(State::new("1.05")).unwrap();
        assert!((value - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exponent() {
        let (value, state) = f64().parse(State::new("2.5e3,")).unwrap();
        assert!((value - 2500.0).abs() < f64::EPSILON);
        assert_eq!(state.remaining(), ",");
    }

    #[test]
    fn test_incomplete_exponent_left_unconsumed() {
        let (value, state) = f64().parse(State::new("2.5e")).unwrap();
        assert!((value - 2.5).abs() < f64::EPSILON);
        assert_eq!(state.remaining(), "e");
    }

    #[test]
    fn test_dot_uint_fails() {
        assert!(f64().parse(State::new(".456abc")).is_err());
    }

    #[test]
    fn test_int_dot_fails() {
        let failure = f64().parse(State::new("123.abc")).unwrap_err();
        assert_eq!(failure.bundle.primary().span().offset, 4);
    }

    #[test]
    fn test_overflow_is_committed() {
        let failure = f64().parse(State::new("1.0e999")).unwrap_err();
        assert!(failure.is_final());
        assert_eq!(failure.bundle.primary().to_string(), "floating point overflow");
        assert_eq!(failure.bundle.primary().span().offset, 0);
    }

    #[test]
    fn test_integer_is_not_float() {
        let failure = f64().parse(State::new("123")).unwrap_err();
        assert_eq!(failure.bundle.primary().to_string(), "expected '.'");
    }
}
