use crate::parser::{BoxedParser, Failure, ParseResult, Parser};
use crate::state::State;
use tracing::trace;

/// Run one alternative from the pre-attempt state with a fresh commit flag
///
/// A success gets the caller's commit flag back so a branch's commit never
/// leaks past the alternation that scoped it.
fn attempt<'code, P>(parser: &P, start: &State<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    let outer_committed = start.is_committed();
    let (value, state) = parser.parse(start.with_committed(false))?;
    Ok((value, state.with_committed(outer_committed)))
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser only runs when the first failed without committing and
/// without a fatal error. When both fail that way, the errors of both are
/// kept so the furthest-progress diagnostic can be picked later.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let first = match attempt(&self.parser1, &state) {
            Ok(result) => return Ok(result),
            Err(failure) if failure.is_final() => return Err(failure),
            Err(failure) => failure,
        };

        trace!(offset = state.offset(), "first alternative failed, backtracking");
        match attempt(&self.parser2, &state) {
            Ok(result) => Ok(result),
            Err(failure) if failure.is_final() => Err(failure),
            Err(second) => Err(Failure {
                bundle: first.bundle.merge(second.bundle),
                state,
            }),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of alternatives of the same type
///
/// Behaves like a chain of [`Or`]: left to right, first success wins, a
/// committed or fatal failure stops the search, otherwise every branch's
/// errors end up in the bundle.
pub struct Choice<'code, T> {
    alternatives: Vec<BoxedParser<'code, T>>,
}

impl<'code, T> Choice<'code, T> {
    pub fn new(alternatives: Vec<BoxedParser<'code, T>>) -> Self {
        Choice { alternatives }
    }
}

impl<'code, T> Parser<'code> for Choice<'code, T> {
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let mut collected: Option<Failure<'code>> = None;

        for (index, alternative) in self.alternatives.iter().enumerate() {
            match attempt(alternative, &state) {
                Ok(result) => return Ok(result),
                Err(failure) if failure.is_final() => {
                    trace!(index, offset = state.offset(), "alternative failed after commit");
                    return Err(failure);
                }
                Err(failure) => {
                    trace!(index, offset = state.offset(), "alternative failed, backtracking");
                    collected = Some(match collected {
                        Some(previous) => Failure {
                            bundle: previous.bundle.merge(failure.bundle),
                            state: state.clone(),
                        },
                        None => failure.at(state.clone()),
                    });
                }
            }
        }

        Err(collected.unwrap_or_else(|| {
            state.fail(state.custom_error("no alternatives to choose from"))
        }))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, T>(alternatives: Vec<BoxedParser<'code, T>>) -> Choice<'code, T> {
    Choice::new(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::commit;
    use crate::error::ErrorKind;
    use crate::fail::fatal;
    use crate::parser::BoxedExt;
    use crate::then::ThenExt;
    use crate::utf8::char::char;
    use crate::utf8::string::string;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(char('a'), char('b'));
        let (c, state) = parser.parse(State::new("abc")).unwrap();
        assert_eq!(c, 'a');
        assert_eq!(state.peek(), Some('b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(char('a'), char('b'));
        let (c, state) = parser.parse(State::new("bcd")).unwrap();
        assert_eq!(c, 'b');
        assert_eq!(state.peek(), Some('c'));
    }

    #[test]
    fn test_or_both_fail_keeps_all_errors() {
        let parser = char('a').or(char('b'));
        let failure = parser.parse(State::new("xyz")).unwrap_err();
        assert_eq!(failure.bundle.len(), 2);
        assert_eq!(failure.state.offset(), 0);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char('a').or(char('b')).or(char('c')).or(char('d'));
        let (c, state) = parser.parse(State::new("d")).unwrap();
        assert_eq!(c, 'd');
        assert!(state.is_eof());

        let failure = parser.parse(State::new("e")).unwrap_err();
        assert_eq!(failure.bundle.len(), 4);
    }

    #[test]
    fn test_or_restores_state_after_partial_consumption() {
        // The first branch consumes "ab" before failing
        let parser = string("ab").then(char('c')).or(string("ab").then(char('x')));
        let (c, _) = parser.parse(State::new("abx")).unwrap();
        assert_eq!(c, 'x');
    }

    #[test]
    fn test_or_committed_branch_stops_alternation() {
        let committed = string("if").then(commit()).then(char('('));
        let fallback = string("if").then(char('x'));
        let parser = committed.or(fallback);

        let failure = parser.parse(State::new("ifx")).unwrap_err();
        assert_eq!(failure.bundle.len(), 1);
        assert_eq!(failure.bundle.primary().to_string(), "expected '('");
        assert_eq!(failure.bundle.primary().span().offset, 2);
    }

    #[test]
    fn test_or_commit_does_not_leak_past_success() {
        let parser = string("a").then(commit()).or(string("b").then(commit()));
        let (_, state) = parser.parse(State::new("a")).unwrap();
        assert!(!state.is_committed());
    }

    #[test]
    fn test_or_committed_failure_keeps_flag() {
        let parser = string("ab").then(commit()).then(char('!')).or(string("ab"));
        let failure = parser.parse(State::new("ab?")).unwrap_err();
        assert!(failure.state.is_committed());
    }

    #[test]
    fn test_or_fatal_stops_alternation() {
        let parser = fatal::<char>("stop here").or(char('a'));
        let failure = parser.parse(State::new("a")).unwrap_err();
        assert_eq!(failure.bundle.primary().kind(), ErrorKind::Fatal);
    }

    #[test]
    fn test_choice_first_success_wins() {
        let parser = choice(vec![
            string("let").boxed(),
            string("letter").boxed(),
            string("lambda").boxed(),
        ]);
        let (matched, state) = parser.parse(State::new("lambda")).unwrap();
        assert_eq!(matched, "lambda");
        assert!(state.is_eof());
    }

    #[test]
    fn test_choice_collects_every_error() {
        let parser = choice(vec![char('a').boxed(), char('b').boxed(), char('c').boxed()]);
        let failure = parser.parse(State::new("z")).unwrap_err();
        assert_eq!(failure.bundle.len(), 3);
        assert!(!failure.state.is_committed());
    }

    #[test]
    fn test_choice_committed_failure_propagates_alone() {
        let parser = choice(vec![
            string("if").then(commit()).then(char('(')).boxed(),
            string("if").boxed(),
        ]);
        let failure = parser.parse(State::new("if x")).unwrap_err();
        assert_eq!(failure.bundle.len(), 1);
    }

    #[test]
    fn test_choice_empty_fails() {
        let parser: Choice<'_, char> = choice(Vec::new());
        assert!(parser.parse(State::new("a")).is_err());
    }
}
