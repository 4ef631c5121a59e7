use crate::parser::{ParseResult, Parser};
use crate::state::State;
use regex::Regex;
use tracing::debug;

/// Parser that matches a regular expression at the current position
///
/// The match must start exactly where the state is; a match further into the
/// input does not count. Zero-width matches are allowed.
#[derive(Debug, Clone)]
pub struct RegexParser {
    regex: Regex,
    anchored: Regex,
}

impl RegexParser {
    /// Compiles an anchored copy of `regex` so a failed match stops at the
    /// current position instead of scanning the rest of the input
    ///
    /// The copy is built from the pattern text, so flags must be written
    /// inline (`(?i)`) rather than set through `RegexBuilder`.
    pub fn new(regex: Regex) -> Self {
        let pattern = format!(r"\A(?:{})", regex.as_str());
        let anchored = Regex::new(&pattern).unwrap_or_else(|err| {
            debug!(pattern = regex.as_str(), %err, "anchored copy rejected");
            regex.clone()
        });
        RegexParser { regex, anchored }
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Output = &'code str;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = state.remaining();
        match self.anchored.find(remaining) {
            Some(found) if found.start() == 0 => {
                let matched = found.as_str();
                Ok((matched, state.advance(matched.len())))
            }
            _ => {
                let item = format!("/{}/", self.regex.as_str());
                Err(state.fail(state.expected([item], state.next_char_len())))
            }
        }
    }
}

pub fn regex(regex: Regex) -> RegexParser {
    RegexParser::new(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier() -> RegexParser {
        regex(Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap())
    }

    #[test]
    fn test_regex_match_at_start() {
        let (matched, state) = identifier().parse(State::new("foo_1 bar")).unwrap();
        assert_eq!(matched, "foo_1");
        assert_eq!(state.remaining(), " bar");
    }

    #[test]
    fn test_regex_later_match_does_not_count() {
        let failure = identifier().parse(State::new("  foo")).unwrap_err();
        let err = failure.bundle.primary();
        assert_eq!(err.span().offset, 0);
        assert_eq!(err.to_string(), "expected /[A-Za-z_][A-Za-z0-9_]*/");
    }

    #[test]
    fn test_regex_keeps_leftmost_first_alternation() {
        let parser = regex(Regex::new(r"a|ab").unwrap());
        let (matched, state) = parser.parse(State::new("abc")).unwrap();
        assert_eq!(matched, "a");
        assert_eq!(state.remaining(), "bc");
    }

    #[test]
    fn test_regex_inline_flags_apply() {
        let parser = regex(Regex::new(r"(?i)select|from").unwrap());
        let (matched, _) = parser.parse(State::new("SELECT *")).unwrap();
        assert_eq!(matched, "SELECT");

        let failure = parser.parse(State::new(" FROM")).unwrap_err();
        assert_eq!(failure.bundle.primary().to_string(), "expected /(?i)select|from/");
    }

    #[test]
    fn test_regex_repeated_over_long_input() {
        let input = format!("{}!", "ab".repeat(2000));
        let (pairs, state) = crate::many::many0(regex(Regex::new("ab").unwrap()))
            .parse(State::new(&input))
            .unwrap();
        assert_eq!(pairs.len(), 2000);
        assert_eq!(state.remaining(), "!");
    }

    #[test]
    fn test_regex_zero_width() {
        let parser = regex(Regex::new(r"\d*").unwrap());
        let (matched, state) = parser.parse(State::new("abc")).unwrap();
        assert_eq!(matched, "");
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_regex_after_advance() {
        let state = State::new("12ab").advance(2);
        let (matched, _) = identifier().parse(state).unwrap();
        assert_eq!(matched, "ab");
    }
}
