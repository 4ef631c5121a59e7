use crate::parser::{ParseResult, Parser};
use crate::state::State;
use tracing::trace;

/// Parser that marks the current branch as chosen
///
/// Consumes nothing and produces `()`. Once it has run, a later failure in the
/// same branch is reported as-is by the enclosing alternation instead of
/// falling through to siblings.
pub struct Commit;

impl<'code> Parser<'code> for Commit {
    type Output = ();

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        trace!(offset = state.offset(), "commit");
        Ok(((), state.with_committed(true)))
    }
}

/// Convenience function to create a Commit parser
pub fn commit() -> Commit {
    Commit
}
