use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Failures, including fatal ones, pass through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> T,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (value, state) = self.parser.parse(state)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, state))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> T,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, T>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> T,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
