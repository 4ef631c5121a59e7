use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser that consumes and returns any single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match state.peek() {
            Some(c) => Ok((c, state.advance(c.len_utf8()))),
            None => Err(state.fail(state.expected(["any character"], 0))),
        }
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character
#[derive(Debug, Clone, Copy)]
pub struct CharParser {
    expected: char,
}

impl<'code> Parser<'code> for CharParser {
    type Output = char;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match state.peek() {
            Some(c) if c == self.expected => Ok((c, state.advance(c.len_utf8()))),
            _ => {
                let item = format!("'{}'", self.expected);
                Err(state.fail(state.expected([item], self.expected.len_utf8())))
            }
        }
    }
}

pub fn char(expected: char) -> CharParser {
    CharParser { expected }
}

/// Parser that matches one character accepted by a predicate
///
/// `description` names the accepted class in `Expected` errors, e.g. "digit".
pub struct Satisfy<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, description: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            description: description.into(),
        }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match state.peek() {
            Some(c) if (self.predicate)(c) => Ok((c, state.advance(c.len_utf8()))),
            _ => {
                let err = state.expected([self.description.as_ref()], state.next_char_len());
                Err(state.fail(err))
            }
        }
    }
}

pub fn satisfy<F>(predicate: F, description: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, description)
}

/// Parser that matches any character from a set
pub struct OneOf {
    chars: Cow<'static, str>,
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match state.peek() {
            Some(c) if self.chars.contains(c) => Ok((c, state.advance(c.len_utf8()))),
            _ => {
                let items = self.chars.chars().map(|c| format!("'{}'", c));
                Err(state.fail(state.expected(items, state.next_char_len())))
            }
        }
    }
}

pub fn one_of(chars: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf {
        chars: chars.into(),
    }
}

/// Parser that matches any character not in a set
pub struct NoneOf {
    chars: Cow<'static, str>,
}

impl<'code> Parser<'code> for NoneOf {
    type Output = char;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match state.peek() {
            Some(c) if self.chars.contains(c) => {
                Err(state.fail(state.unexpected(c.to_string())))
            }
            Some(c) => Ok((c, state.advance(c.len_utf8()))),
            None => Err(state.fail(state.expected(["any character"], 0))),
        }
    }
}

pub fn none_of(chars: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf {
        chars: chars.into(),
    }
}
