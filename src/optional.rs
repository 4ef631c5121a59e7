use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that turns any failure into `None`
///
/// Consumes input only when the wrapped parser succeeds; on failure the
/// starting state is returned untouched, commit flag included.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(state.clone()) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, state)),
        }
    }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::number::i64;
    use crate::commit::commit;
    use crate::fail::fatal;
    use crate::then::ThenExt;
    use crate::utf8::char::char;

    #[test]
    fn test_optional_present() {
        let (value, state) = optional(char('-')).parse(State::new("-1")).unwrap();
        assert_eq!(value, Some('-'));
        assert_eq!(state.offset(), 1);
    }

    #[test]
    fn test_optional_absent() {
        let state = State::new("1");
        let (value, next) = optional(char('-')).parse(state.clone()).unwrap();
        assert_eq!(value, None);
        assert_eq!(next, state);
    }

    #[test]
    fn test_optional_rewinds_partial_and_committed() {
        let state = State::new("12x");
        let parser = i64().then(commit()).then(char('.')).optional();
        let (value, next) = parser.parse(state.clone()).unwrap();
        assert_eq!(value, None);
        assert_eq!(next, state);
    }

    #[test]
    fn test_optional_swallows_fatal() {
        let (value, _) = fatal::<()>("boom").optional().parse(State::new("")).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_optional_in_sequence() {
        let parser = char('-').optional().and(i64());
        let ((sign, n), _) = parser.parse(State::new("42")).unwrap();
        assert_eq!(sign, None);
        assert_eq!(n, 42);
    }
}
