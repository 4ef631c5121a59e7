use crate::parser::{ParseResult, Parser};
use crate::state::State;
use serde::{Deserialize, Serialize};

/// A location in the source text
///
/// `line` and `column` are 1-based, `offset` is the 0-based byte offset.
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// Position of the first character of a source
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the position reached after consuming `text` from here
    pub fn advance(&self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Position {
            line,
            column,
            offset: self.offset + text.len(),
        }
    }

    /// Derive the position of `offset` by scanning `source` from the start
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let prefix = source.get(..offset).unwrap_or(source);
        Position::start().advance(prefix)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

/// Location and length of an offending or missing token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(position: Position, length: usize) -> Self {
        Span {
            offset: position.offset,
            length,
            line: position.line,
            column: position.column,
        }
    }

    /// Span covering the text between two positions
    pub fn between(start: Position, end: Position) -> Self {
        Span::new(start, end.offset.saturating_sub(start.offset))
    }

    /// Offset one past the last byte of the span
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The spanned slice of `source`, empty if the span lies outside it
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.offset..self.end()).unwrap_or("")
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span);

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let start = state.position();
        let (output, state) = self.parser.parse(state)?;
        let span = Span::between(start, state.position());
        Ok(((output, span), state))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture the span of what it consumed
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}
