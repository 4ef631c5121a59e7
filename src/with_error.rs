use crate::error::ParseErr;
use crate::parser::{Failure, ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser combinator that replaces a failure with `Expected <description>`
///
/// The span and context of the primary error are kept. Fatal failures pass
/// through unchanged.
pub struct Expect<P> {
    parser: P,
    description: Cow<'static, str>,
}

impl<P> Expect<P> {
    pub fn new(parser: P, description: impl Into<Cow<'static, str>>) -> Self {
        Expect {
            parser,
            description: description.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Expect<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).map_err(|failure| {
            if failure.bundle.has_fatal() {
                return failure;
            }
            let primary = failure.bundle.primary();
            let rewritten = ParseErr::expected(
                primary.span(),
                [self.description.as_ref()],
                primary.context().to_vec(),
            );
            Failure {
                bundle: failure.bundle.replace(rewritten),
                state: failure.state,
            }
        })
    }
}

/// Parser combinator that rewrites the message of a failure
///
/// `rewrite` receives the primary error and returns the new message. The
/// result is a `Custom` error (or `Fatal`, if the primary was fatal) with the
/// primary's span, context and hints.
pub struct WithError<P, F> {
    parser: P,
    rewrite: F,
}

impl<P, F> WithError<P, F> {
    pub fn new(parser: P, rewrite: F) -> Self {
        WithError { parser, rewrite }
    }
}

impl<'code, P, F> Parser<'code> for WithError<P, F>
where
    P: Parser<'code>,
    F: Fn(&ParseErr) -> String,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).map_err(|failure| {
            let primary = failure.bundle.primary();
            let message = (self.rewrite)(primary);
            let rewritten = match primary {
                ParseErr::Fatal { span, context, .. } => ParseErr::Fatal {
                    span: *span,
                    message,
                    context: context.clone(),
                },
                other => ParseErr::Custom {
                    span: other.span(),
                    message,
                    context: other.context().to_vec(),
                    hints: other.hints().to_vec(),
                },
            };
            Failure {
                bundle: failure.bundle.replace(rewritten),
                state: failure.state,
            }
        })
    }
}

/// Extension trait to add .expect() and .with_error() to parsers
pub trait WithErrorExt<'code>: Parser<'code> + Sized {
    fn expect(self, description: impl Into<Cow<'static, str>>) -> Expect<Self> {
        Expect::new(self, description)
    }

    fn with_error<F>(self, rewrite: F) -> WithError<Self, F>
    where
        F: Fn(&ParseErr) -> String,
    {
        WithError::new(self, rewrite)
    }
}

impl<'code, P> WithErrorExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fail::fatal;
    use crate::label::LabelExt;
    use crate::or::OrExt;
    use crate::then::ThenExt;
    use crate::utf8::char::char;
    use crate::utf8::string::string;

    #[test]
    fn test_expect_rewrites_message_keeps_span() {
        let parser = string("if").then(char('(').expect("'(' after 'if'"));
        let failure = parser.parse(State::new("if x")).unwrap_err();
        let err = failure.bundle.primary();
        assert_eq!(err.kind(), ErrorKind::Expected);
        assert_eq!(err.to_string(), "expected '(' after 'if'");
        assert_eq!(err.span().offset, 2);
    }

    #[test]
    fn test_expect_collapses_alternatives() {
        let parser = char('a').or(char('b')).expect("a or b");
        let failure = parser.parse(State::new("z")).unwrap_err();
        assert_eq!(failure.bundle.len(), 1);
        assert_eq!(failure.bundle.primary().to_string(), "expected a or b");
    }

    #[test]
    fn test_expect_keeps_context() {
        let parser = char('a').label("block").expect("block start");
        let failure = parser.parse(State::new("z")).unwrap_err();
        assert_eq!(failure.bundle.primary().context(), ["block"]);
    }

    #[test]
    fn test_expect_passes_fatal_through() {
        let parser = fatal::<char>("arity").expect("something");
        let failure = parser.parse(State::new("z")).unwrap_err();
        assert!(failure.bundle.primary().is_fatal());
        assert_eq!(failure.bundle.primary().to_string(), "arity");
    }

    #[test]
    fn test_with_error_rewrites_to_custom() {
        let parser = char('=').with_error(|err| format!("assignment needs '=' ({})", err));
        let failure = parser.parse(State::new("x")).unwrap_err();
        let err = failure.bundle.primary();
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert_eq!(err.to_string(), "assignment needs '=' (expected '=')");
        assert_eq!(err.span().offset, 0);
    }

    #[test]
    fn test_with_error_keeps_fatal_kind() {
        let parser = fatal::<()>("old").with_error(|_| "new".to_string());
        let failure = parser.parse(State::new("")).unwrap_err();
        assert!(failure.bundle.primary().is_fatal());
        assert_eq!(failure.bundle.primary().to_string(), "new");
    }
}
