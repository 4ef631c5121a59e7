use crate::parser::{ParseResult, Parser};
use crate::state::State;
use tracing::trace;

/// Parser combinator that undoes everything on failure
///
/// If the wrapped parser fails, the failure is reported from the exact state
/// the combinator started in: position, labels and commit flag. This is what
/// lets an outer alternation retry after a branch that had committed. A fatal
/// error keeps its kind, so alternation still stops on it.
pub struct Atomic<P> {
    parser: P,
}

impl<P> Atomic<P> {
    pub fn new(parser: P) -> Self {
        Atomic { parser }
    }
}

impl<'code, P> Parser<'code> for Atomic<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(state.clone()) {
            Ok(result) => Ok(result),
            Err(failure) => {
                trace!(
                    from = failure.state.offset(),
                    to = state.offset(),
                    "atomic rewind"
                );
                Err(failure.at(state))
            }
        }
    }
}

/// Extension trait to add .atomic() method support for parsers
pub trait AtomicExt<'code>: Parser<'code> + Sized {
    fn atomic(self) -> Atomic<Self> {
        Atomic::new(self)
    }
}

impl<'code, P> AtomicExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Atomic parser
pub fn atomic<P>(parser: P) -> Atomic<P> {
    Atomic::new(parser)
}
