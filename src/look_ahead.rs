use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that peeks without consuming
///
/// On success the value is kept but the state goes back to where it was.
/// On failure it behaves like [`atomic`](crate::atomic::atomic).
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<'code, P> Parser<'code> for LookAhead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(state.clone()) {
            Ok((value, _)) => Ok((value, state)),
            Err(failure) => Err(failure.at(state)),
        }
    }
}

/// Convenience function to create a LookAhead parser
pub fn look_ahead<P>(parser: P) -> LookAhead<P> {
    LookAhead::new(parser)
}
