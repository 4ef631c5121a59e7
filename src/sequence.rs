use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::state::State;

/// Runs a list of parsers in order and returns the result of the last one
pub struct Sequence<'code, T> {
    parsers: Vec<BoxedParser<'code, T>>,
}

impl<'code, T> Sequence<'code, T> {
    pub fn new(parsers: Vec<BoxedParser<'code, T>>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, T> Parser<'code> for Sequence<'code, T> {
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let mut last = None;
        let mut state = state;
        for parser in &self.parsers {
            let (value, next) = parser.parse(state)?;
            last = Some(value);
            state = next;
        }
        match last {
            Some(value) => Ok((value, state)),
            None => Err(state.fail(state.custom_error("empty sequence"))),
        }
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, T>(parsers: Vec<BoxedParser<'code, T>>) -> Sequence<'code, T> {
    Sequence::new(parsers)
}
