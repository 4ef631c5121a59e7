use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser combinator that names a grammar production
///
/// The name is pushed onto the label trail while the wrapped parser runs, so
/// every error raised inside carries it as context. The trail is popped again
/// afterwards, whatever the outcome.
pub struct Label<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let labelled = state.push_label(self.name.clone());
        match self.parser.parse(labelled) {
            Ok((value, next)) => Ok((value, next.with_labels_of(&state))),
            Err(failure) => {
                let restored = failure.state.with_labels_of(&state);
                Err(failure.at(restored))
            }
        }
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, name: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, name)
    }
}

impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<P>(parser: P, name: impl Into<Cow<'static, str>>) -> Label<P> {
    Label::new(parser, name)
}
