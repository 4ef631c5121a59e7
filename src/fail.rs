use crate::error::ParseErr;
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::marker::PhantomData;

/// How an always-failing parser builds its error
enum Reason {
    Custom(Cow<'static, str>),
    Fatal(Cow<'static, str>),
    Given(ParseErr),
}

/// Parser that always fails
///
/// The output type is free so a failing branch can sit next to any other
/// parser in an alternation.
pub struct Fail<T> {
    reason: Reason,
    _output: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    fn new(reason: Reason) -> Self {
        Fail {
            reason,
            _output: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let err = match &self.reason {
            Reason::Custom(message) => state.custom_error(message.as_ref()),
            Reason::Fatal(message) => state.fatal_error(message.as_ref()),
            Reason::Given(err) => err.clone(),
        };
        Err(state.fail(err))
    }
}

/// Always fail with a `Custom` error at the current position
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(Reason::Custom(message.into()))
}

/// Always fail with the given error, span included
pub fn fail_with<T>(err: ParseErr) -> Fail<T> {
    Fail::new(Reason::Given(err))
}

/// Always fail with a `Fatal` error that stops every enclosing alternation
///
/// Meant for branches that are structurally certain but semantically wrong,
/// such as a call with the wrong number of arguments.
pub fn fatal<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(Reason::Fatal(message.into()))
}
