use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails with an `Unexpected` error naming the matched text if the given
/// parser succeeds. Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(state.clone()) {
            Ok((_, matched)) => {
                let consumed = matched.offset().saturating_sub(state.offset());
                let found = state.remaining().get(..consumed).unwrap_or_default();
                Err(state.fail(state.unexpected(found)))
            }
            Err(_) => Ok(((), state)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P> {
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
