use crate::error::ParseErr;
use crate::parser::{Failure, ParseResult, Parser};
use crate::state::State;
use std::marker::PhantomData;

/// Step driver handed to a [`sequential`] body
///
/// Holds the current state of one in-flight sequence. Each [`Steps::run`]
/// advances it by one sub-parser; the body owns the only `&mut` to it, so a
/// sequence can never be driven from two places at once.
pub struct Steps<'code> {
    state: State<'code>,
}

impl<'code> Steps<'code> {
    /// Run `parser` from the current state and bind its value
    ///
    /// On failure the error is returned for `?` to abort the sequence.
    pub fn run<P>(&mut self, parser: &P) -> Result<P::Output, Failure<'code>>
    where
        P: Parser<'code>,
    {
        let (value, next) = parser.parse(self.state.clone())?;
        self.state = next;
        Ok(value)
    }

    pub fn state(&self) -> &State<'code> {
        &self.state
    }

    /// Failure carrying `err`, observed at the current state
    pub fn fail(&self, err: ParseErr) -> Failure<'code> {
        self.state.fail(err)
    }

    /// `Custom` failure at the current position
    pub fn error(&self, message: impl Into<String>) -> Failure<'code> {
        self.state.fail(self.state.custom_error(message))
    }

    /// `Fatal` failure at the current position
    pub fn fatal(&self, message: impl Into<String>) -> Failure<'code> {
        self.state.fail(self.state.fatal_error(message))
    }
}

/// Parser written as straight-line code over sub-parsers
///
/// The body is an ordinary closure: every `steps.run(&p)?` runs one
/// sub-parser, feeds its value back, and the `?` ends the whole sequence on
/// the first failure.
pub struct Sequential<F, T> {
    body: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> Sequential<F, T> {
    pub fn new(body: F) -> Self {
        Sequential {
            body,
            _output: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for Sequential<F, T>
where
    F: Fn(&mut Steps<'code>) -> Result<T, Failure<'code>>,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let mut steps = Steps { state };
        let value = (self.body)(&mut steps)?;
        Ok((value, steps.state))
    }
}

/// Build a parser from a sequential body
///
/// ```
/// use parsecraft::prelude::*;
///
/// let point = sequential(|s| {
///     s.run(&char('('))?;
///     let x = s.run(&i64())?;
///     s.run(&char(','))?;
///     let y = s.run(&i64())?;
///     s.run(&char(')'))?;
///     Ok((x, y))
/// });
///
/// let (value, _) = point.parse(State::new("(3,-4)")).unwrap();
/// assert_eq!(value, (3, -4));
/// ```
pub fn sequential<'code, F, T>(body: F) -> Sequential<F, T>
where
    F: Fn(&mut Steps<'code>) -> Result<T, Failure<'code>>,
{
    Sequential::new(body)
}
