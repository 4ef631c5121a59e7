//! Entry points for running a parser over a whole input

use crate::diagnostic::{Diagnostic, FormatOptions};
use crate::error::{ErrorBundle, SyntaxError};
use crate::parser::Parser;
use crate::state::State;
use std::any::Any;
use tracing::debug;

/// Result of a parse together with the state it ended in
///
/// On failure the state is the one the failure was observed at.
#[derive(Debug)]
pub struct ParseOutcome<'code, T> {
    pub result: Result<T, ErrorBundle<'code>>,
    pub state: State<'code>,
}

impl<'code, T> ParseOutcome<'code, T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> Result<T, ErrorBundle<'code>> {
        self.result
    }
}

/// Run `parser` over `input` with user data
pub fn parse_with<'code, P, T>(
    parser: &P,
    input: &'code str,
    custom: &'code T,
) -> ParseOutcome<'code, P::Output>
where
    P: Parser<'code>,
    T: Any,
{
    debug!(input_len = input.len(), "parse started");
    match parser.parse(State::with_custom(input, custom)) {
        Ok((value, state)) => {
            debug!(consumed = state.offset(), "parse succeeded");
            ParseOutcome {
                result: Ok(value),
                state,
            }
        }
        Err(failure) => {
            debug!(
                offset = failure.bundle.primary().span().offset,
                errors = failure.bundle.len(),
                "parse failed"
            );
            ParseOutcome {
                result: Err(failure.bundle),
                state: failure.state,
            }
        }
    }
}

/// Run `parser` over `input`
///
/// Unconsumed trailing input is not an error; combine with
/// [`eof`](crate::eof::eof) or inspect the returned state.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> ParseOutcome<'code, P::Output>
where
    P: Parser<'code>,
{
    parse_with(parser, input, &())
}

/// Run `parser` and report only the primary error on failure
pub fn parse_or_throw<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, SyntaxError>
where
    P: Parser<'code>,
{
    parse(parser, input)
        .result
        .map_err(|bundle| syntax_error(&bundle))
}

/// Run `parser` and return the full bundle on failure
pub fn parse_or_error<'code, P>(
    parser: &P,
    input: &'code str,
) -> Result<P::Output, ErrorBundle<'code>>
where
    P: Parser<'code>,
{
    parse(parser, input).result
}

/// Owned error describing the primary error of `bundle`
pub fn syntax_error(bundle: &ErrorBundle<'_>) -> SyntaxError {
    let primary = bundle.primary();
    let span = primary.span();
    SyntaxError {
        message: primary.to_string(),
        line: span.line,
        column: span.column,
        offset: span.offset,
        error: primary.clone(),
        rendered: Diagnostic::from_bundle(bundle, &FormatOptions::default()).to_string(),
    }
}

/// Extension trait to run a parser directly with method syntax
pub trait RunExt<'code>: Parser<'code> + Sized {
    fn parse_str(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        parse(self, input)
    }

    fn parse_or_throw(&self, input: &'code str) -> Result<Self::Output, SyntaxError> {
        parse_or_throw(self, input)
    }

    fn parse_or_error(&self, input: &'code str) -> Result<Self::Output, ErrorBundle<'code>> {
        parse_or_error(self, input)
    }
}

impl<'code, P> RunExt<'code> for P where P: Parser<'code> {}
