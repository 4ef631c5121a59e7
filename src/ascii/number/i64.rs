use super::u64::u64;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that matches ASCII integer numbers (positive or negative)
#[derive(Debug, Clone, Copy, Default)]
pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let start = state.clone();

        // Check for optional sign
        let (is_negative, state) = match state.peek() {
            Some('-') => (true, state.advance(1)),
            Some('+') => (false, state.advance(1)),
            _ => (false, state),
        };

        let (value, state) = u64().parse(state)?;

        let signed_value = if is_negative {
            if value > i64::MAX as u64 + 1 {
                let err = start.custom_error(format!("negative number too large: -{}", value));
                return Err(start.fail(err));
            }
            (value as i64).wrapping_neg()
        } else {
            if value > i64::MAX as u64 {
                let err = start.custom_error(format!("positive number too large: {}", value));
                return Err(start.fail(err));
            }
            value as i64
        };

        Ok((signed_value, state))
    }
}

pub fn i64() -> IntParser {
    IntParser
}
