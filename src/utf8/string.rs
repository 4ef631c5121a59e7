use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// On mismatch the error spans the full length of the expected text, starting
/// where the match was attempted.
#[derive(Debug, Clone)]
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        if state.remaining().starts_with(self.expected.as_ref()) {
            Ok((self.expected.clone(), state.advance(self.expected.len())))
        } else {
            let item = format!("'{}'", self.expected);
            Err(state.fail(state.expected([item], self.expected.len())))
        }
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
