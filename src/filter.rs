use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails with a `Custom` error positioned where the wrapped
/// parser started.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(state.clone())?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(state.fail(state.custom_error(self.error_message.clone())))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::u64;
    use crate::error::ErrorKind;
    use crate::utf8::char::any_char;

    #[test]
    fn test_filter_success() {
        let parser = any_char().filter(|c| c.is_alphabetic(), "expected alphabetic character");
        let (result, _) = parser.parse(State::new("a")).unwrap();
        assert_eq!(result, 'a');
    }

    #[test]
    fn test_filter_failure_reports_start() {
        let parser = u64().filter(|n| *n < 256, "byte value out of range");
        let failure = parser.parse(State::new("1000")).unwrap_err();
        let err = failure.bundle.primary();
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert_eq!(err.to_string(), "byte value out of range");
        assert_eq!(err.span().offset, 0);
        assert_eq!(failure.state.offset(), 0);
    }

    #[test]
    fn test_filter_unicode_letter() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        for (input, should_succeed) in test_cases {
            let parser = any_char().filter(|c| c.is_alphabetic(), "expected letter");
            let result = parser.parse(State::new(input));

            if should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", input);
                let (ch, _) = result.unwrap();
                assert_eq!(ch, input.chars().next().unwrap());
            } else {
                assert!(result.is_err(), "Expected failure for: {}", input);
            }
        }
    }

    #[test]
    fn test_chained_filters_failure() {
        let parser = any_char()
            .filter(|c| c.is_alphabetic(), "expected letter")
            .filter(|c| c.is_uppercase(), "expected uppercase");

        let failure = parser.parse(State::new("a")).unwrap_err();
        assert_eq!(failure.bundle.primary().to_string(), "expected uppercase");
        assert!(parser.parse(State::new("A")).is_ok());
    }
}
