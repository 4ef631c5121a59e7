use super::digit::digit;
use crate::many::many1;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that matches one or more ASCII digits and returns them as a u64
#[derive(Debug, Clone, Copy, Default)]
pub struct UIntParser;

impl<'code> Parser<'code> for UIntParser {
    type Output = u64;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let start = state.clone();
        let (digits, state) = many1(digit()).parse(state)?;
        let text: String = digits.into_iter().collect();

        match text.parse::<u64>() {
            Ok(value) => Ok((value, state)),
            Err(_) => {
                let err = start.custom_error(format!("number too large: {}", text));
                Err(start.fail(err))
            }
        }
    }
}

pub fn u64() -> UIntParser {
    UIntParser
}
