use crate::parser::{Failure, ParseResult, Parser};
use crate::state::State;
use tracing::trace;

/// Run one repetition from `state` with a fresh commit flag
///
/// A failure is judged on the element's own commit, so a commit made before
/// the repetition started does not turn the natural end of the loop into a
/// hard error. A commit made inside a successful element stays in effect.
pub(crate) fn step<'code, P>(
    parser: &P,
    state: &State<'code>,
) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    let outer_committed = state.is_committed();
    let (value, next) = parser.parse(state.with_committed(false))?;
    let committed = outer_committed || next.is_committed();
    Ok((value, next.with_committed(committed)))
}

/// Re-apply the commit flag of `outer` to a failure that leaves the loop
///
/// [`step`] clears the flag so the element is judged on its own, but once a
/// failure is propagated the enclosing alternation must still see the commit
/// made before the repetition.
pub(crate) fn keep_commit<'code>(
    failure: Failure<'code>,
    outer: &State<'code>,
) -> Failure<'code> {
    let committed = outer.is_committed() || failure.state.is_committed();
    let state = failure.state.with_committed(committed);
    failure.at(state)
}

/// Shared repetition loop
///
/// Collects between `min` and `max` results into `sink`. Unbounded loops end
/// on an element that succeeds without consuming; its value is dropped.
fn repeat<'code, P, F>(
    parser: &P,
    mut state: State<'code>,
    min: usize,
    max: Option<usize>,
    mut sink: F,
) -> ParseResult<'code, ()>
where
    P: Parser<'code>,
    F: FnMut(P::Output),
{
    let mut count = 0;
    while max.is_none_or(|max| count < max) {
        match step(parser, &state) {
            Ok((_, next)) if max.is_none() && next.offset() == state.offset() => {
                trace!(offset = state.offset(), "repetition made no progress, stopping");
                break;
            }
            Ok((value, next)) => {
                sink(value);
                count += 1;
                state = next;
            }
            Err(failure) if failure.is_final() || count < min => {
                return Err(keep_commit(failure, &state));
            }
            Err(_) => break,
        }
    }

    if count < min {
        // Only reachable when an unbounded element stopped matching input
        let err = state.expected(["a non-empty match"], state.next_char_len());
        return Err(state.fail(err));
    }
    Ok(((), state))
}

/// Parser combinator that matches repeated occurrences of the given parser
///
/// Repetition stops at the first failure that is neither committed nor fatal;
/// such failures are propagated. Below `min` matches the element's own
/// failure is reported, carrying any commit made before the repetition.
pub struct Many<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Many<P> {
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Many { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let ((), state) = repeat(&self.parser, state, self.min, self.max, |value| {
            results.push(value);
        })?;
        Ok((results, state))
    }
}

/// Like [`Many`] but discards the results
pub struct SkipMany<P> {
    parser: P,
    min: usize,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P, min: usize) -> Self {
        SkipMany { parser, min }
    }
}

impl<'code, P> Parser<'code> for SkipMany<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        repeat(&self.parser, state, self.min, None, |_| {})
    }
}

/// Zero or more occurrences
pub fn many0<P>(parser: P) -> Many<P> {
    Many::new(parser, 0, None)
}

/// One or more occurrences
pub fn many1<P>(parser: P) -> Many<P> {
    Many::new(parser, 1, None)
}

/// Exactly `count` occurrences
pub fn many_n<P>(parser: P, count: usize) -> Many<P> {
    Many::new(parser, count, Some(count))
}

/// Zero or more occurrences, results discarded
pub fn skip_many0<P>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser, 0)
}

/// One or more occurrences, results discarded
pub fn skip_many1<P>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser, 1)
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many0(self) -> Many<Self> {
        many0(self)
    }

    fn many1(self) -> Many<Self> {
        many1(self)
    }

    fn many_n(self, count: usize) -> Many<Self> {
        many_n(self, count)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
