use crate::many::{SkipMany, skip_many0};
use crate::parser::Parser;
use crate::then::Skip;
use crate::utf8::char::{Satisfy, satisfy};

pub type Whitespace = Satisfy<fn(char) -> bool>;

/// Parser that matches a single Unicode whitespace character
pub fn whitespace() -> Whitespace {
    satisfy(char::is_whitespace as fn(char) -> bool, "whitespace")
}

/// Skips zero or more whitespace characters
pub fn spaces() -> SkipMany<Whitespace> {
    skip_many0(whitespace())
}

/// Runs `parser` and then skips any trailing whitespace
pub fn lexeme<'code, P>(parser: P) -> Skip<P, SkipMany<Whitespace>>
where
    P: Parser<'code>,
{
    Skip::new(parser, spaces())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::u64;
    use crate::many::many0;
    use crate::state::State;

    #[test]
    fn test_whitespace_variants() {
        for input in [" ", "\t", "\n", "\r", "\u{00A0}", "\u{2000}"] {
            assert!(whitespace().parse(State::new(input)).is_ok(), "{:?}", input);
        }
        assert!(whitespace().parse(State::new("a")).is_err());
    }

    #[test]
    fn test_spaces_accepts_none() {
        let ((), state) = spaces().parse(State::new("x")).unwrap();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_spaces_tracks_lines() {
        let ((), state) = spaces().parse(State::new(" \n\t x")).unwrap();
        assert_eq!(state.remaining(), "x");
        assert_eq!(state.position().line, 2);
        assert_eq!(state.position().column, 3);
    }

    #[test]
    fn test_lexeme_list() {
        let (values, state) = many0(lexeme(u64())).parse(State::new("1  2\n3 ")).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(state.is_eof());
    }
}
