use super::HintOptions;
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The word at the start of `input`, or its first char if it does not start
/// with a word character
fn offending_word(input: &str) -> &str {
    let end = input
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(index, _)| index)
        .unwrap_or(input.len());
    if end > 0 {
        &input[..end]
    } else {
        let first = input.chars().next().map(char::len_utf8).unwrap_or(0);
        &input[..first]
    }
}

/// Matches one of a fixed set of words, suggesting near misses on failure
///
/// Candidates are tried in the order given, so overlapping entries must be
/// listed longest first. In keyword mode a match must also end on a word
/// boundary.
#[derive(Debug, Clone)]
pub struct KeywordParser {
    candidates: Vec<Cow<'static, str>>,
    vocabulary: Vec<Cow<'static, str>>,
    word_boundary: bool,
    options: HintOptions,
}

impl KeywordParser {
    pub fn new(
        candidates: Vec<Cow<'static, str>>,
        vocabulary: Vec<Cow<'static, str>>,
        word_boundary: bool,
    ) -> Self {
        KeywordParser {
            candidates,
            vocabulary,
            word_boundary,
            options: HintOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HintOptions) -> Self {
        self.options = options;
        self
    }

    fn matches(&self, remaining: &str, candidate: &str) -> bool {
        let Some(rest) = remaining.strip_prefix(candidate) else {
            return false;
        };
        !self.word_boundary || !rest.chars().next().is_some_and(is_word_char)
    }
}

impl<'code> Parser<'code> for KeywordParser {
    type Output = Cow<'static, str>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = state.remaining();
        if let Some(found) = self
            .candidates
            .iter()
            .find(|candidate| self.matches(remaining, candidate))
        {
            return Ok((found.clone(), state.advance(found.len())));
        }

        if state.is_eof() {
            let items = self.candidates.iter().map(|c| format!("'{}'", c));
            return Err(state.fail(state.expected(items, 0)));
        }

        let found = offending_word(remaining);
        let hints = self.options.hints(found, &self.vocabulary);
        Err(state.fail(state.unexpected(found).with_hints(hints)))
    }
}

/// Matches `keyword` as a whole word; hints are drawn from `vocabulary`
pub fn keyword_with_hints<I, S>(
    keyword: impl Into<Cow<'static, str>>,
    vocabulary: I,
) -> KeywordParser
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    let vocabulary = vocabulary.into_iter().map(Into::into).collect();
    KeywordParser::new(vec![keyword.into()], vocabulary, true)
}

/// Matches any of `keywords` as a whole word, suggesting among them
pub fn any_keyword_with_hints<I, S>(keywords: I) -> KeywordParser
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    let keywords: Vec<Cow<'static, str>> = keywords.into_iter().map(Into::into).collect();
    KeywordParser::new(keywords.clone(), keywords, true)
}

/// Matches any of `candidates` as a plain prefix, suggesting among them
pub fn string_with_hints<I, S>(candidates: I) -> KeywordParser
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    let candidates: Vec<Cow<'static, str>> = candidates.into_iter().map(Into::into).collect();
    KeywordParser::new(candidates.clone(), candidates, false)
}
