use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that chooses its continuation from the first result
///
/// Runs `parser`, hands its value to `binder` and runs the returned parser from
/// the advanced state. A failure of either half short-circuits.
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (value, state) = self.parser.parse(state)?;
        (self.binder)(value).parse(state)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
