use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Succeeds only when no input remains
#[derive(Debug, Clone, Copy, Default)]
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        if state.is_eof() {
            Ok(((), state))
        } else {
            Err(state.fail(state.expected(["end of input"], state.next_char_len())))
        }
    }
}

pub fn eof() -> Eof {
    Eof
}
