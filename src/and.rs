use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The nested tuple approach is general
/// and the destructuring pattern is explicit about the parsing order.
///
/// Example:
/// ```
/// use parsecraft::prelude::*;
///
/// let (((int_part, _), frac_part), state) = i64()
///     .and(char('.'))
///     .and(u64())
///     .parse(State::new("123.456"))
///     .unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// assert!(state.is_eof());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, state) = self.parser1.parse(state)?;
        let (result2, state) = self.parser2.parse(state)?;
        Ok(((result1, result2), state))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2> {
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::i64;
    use crate::utf8::char::char;

    #[test]
    fn test_and_both_succeed() {
        let parser = char('A').and(char('5'));

        let ((a, five), state) = parser.parse(State::new("A5xyz")).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(state.peek(), Some('x'));
    }

    #[test]
    fn test_and_first_fails() {
        let parser = char('A').and(char('x'));
        let failure = parser.parse(State::new("Bxyz")).unwrap_err();
        assert_eq!(failure.bundle.primary().span().offset, 0);
    }

    #[test]
    fn test_and_second_fails_reports_position() {
        let parser = char('A').and(char('5'));
        let failure = parser.parse(State::new("Axyz")).unwrap_err();
        assert_eq!(failure.bundle.primary().span().offset, 1);
        assert_eq!(failure.bundle.primary().to_string(), "expected '5'");
    }

    #[test]
    fn test_and_method_syntax() {
        let parser = i64().and(char('.'));

        let ((number, dot), state) = parser.parse(State::new("123.")).unwrap();
        assert_eq!(number, 123);
        assert_eq!(dot, '.');
        assert!(state.is_eof());
    }

    #[test]
    fn test_and_chain() {
        let parser = char('A').and(char('5')).and(char('B'));

        let (((a, five), b), state) = parser.parse(State::new("A5B")).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(b, 'B');
        assert!(state.is_eof());
    }

    #[test]
    fn test_and_function_syntax() {
        let parser = and(char('X'), char('Y'));

        let ((x, y), state) = parser.parse(State::new("XY")).unwrap();
        assert_eq!(x, 'X');
        assert_eq!(y, 'Y');
        assert!(state.is_eof());
    }
}
