use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Runs two parsers in order and keeps the second result
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (_, state) = self.first.parse(state)?;
        self.second.parse(state)
    }
}

/// Runs two parsers in order and keeps the first result
pub struct Skip<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Skip { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (value, state) = self.first.parse(state)?;
        let (_, state) = self.second.parse(state)?;
        Ok((value, state))
    }
}

/// Convenience function to create a Then parser
pub fn then<P1, P2>(first: P1, second: P2) -> Then<P1, P2> {
    Then::new(first, second)
}

/// Convenience function to create a Skip parser
pub fn skip<P1, P2>(first: P1, second: P2) -> Skip<P1, P2> {
    Skip::new(first, second)
}

/// Extension trait to add .then() and .skip() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    /// Run `other` after this parser, keeping only its result
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }

    /// Run `other` after this parser, keeping only this parser's result
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip::new(self, other)
    }
}

impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
