//! Renderer-ready description of a failed parse
//!
//! A [`Diagnostic`] is plain data: everything a formatter needs to present
//! the primary error of a bundle, including a window of source lines around
//! it. It serializes with serde for JSON consumers, and its `Display` is the
//! plain-text rendering used in thrown errors.

use crate::error::{ErrorBundle, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Knobs for building a [`Diagnostic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Include "did you mean" suggestions
    pub show_hints: bool,
    /// Include the label trail
    pub show_context: bool,
    /// Source lines shown before and after the error line
    pub max_context_lines: usize,
    /// Columns a tab expands to in the snippet
    pub tab_size: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            show_hints: true,
            show_context: true,
            max_context_lines: 2,
            tab_size: 4,
        }
    }
}

/// One source line of the snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetLine {
    pub number: usize,
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub length: usize,
    pub context: Vec<String>,
    pub hints: Vec<String>,
    pub snippet: Vec<SnippetLine>,
    /// 1-based column of the caret within the tab-expanded error line
    pub caret_column: usize,
    /// Messages of the other errors in the bundle, without duplicates
    pub alternatives: Vec<String>,
}

fn expand_tabs(text: &str, tab_size: usize) -> String {
    text.replace('\t', &" ".repeat(tab_size))
}

impl Diagnostic {
    pub fn from_bundle(bundle: &ErrorBundle<'_>, options: &FormatOptions) -> Self {
        let primary = bundle.primary();
        let span = primary.span();
        let message = primary.to_string();

        let lines: Vec<&str> = bundle
            .source()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let first = span.line.saturating_sub(options.max_context_lines).max(1);
        let last = (span.line + options.max_context_lines).min(lines.len());
        let snippet = (first..=last)
            .filter_map(|number| {
                lines.get(number - 1).map(|text| SnippetLine {
                    number,
                    text: expand_tabs(text, options.tab_size),
                    is_error: number == span.line,
                })
            })
            .collect();

        let caret_column = lines
            .get(span.line.saturating_sub(1))
            .map(|text| {
                text.chars()
                    .take(span.column.saturating_sub(1))
                    .map(|c| if c == '\t' { options.tab_size } else { 1 })
                    .sum::<usize>()
                    + 1
            })
            .unwrap_or(span.column);

        let mut alternatives: Vec<String> = Vec::new();
        for err in bundle.errors() {
            let text = err.to_string();
            if text != message && !alternatives.contains(&text) {
                alternatives.push(text);
            }
        }

        Diagnostic {
            kind: primary.kind(),
            message,
            line: span.line,
            column: span.column,
            offset: span.offset,
            length: span.length,
            context: if options.show_context {
                primary.context().to_vec()
            } else {
                Vec::new()
            },
            hints: if options.show_hints {
                primary.hints().to_vec()
            } else {
                Vec::new()
            },
            snippet,
            caret_column,
            alternatives,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line, self.column, self.message
        )?;
        if !self.context.is_empty() {
            writeln!(f, "  while parsing {}", self.context.join(" > "))?;
        }
        writeln!(f)?;

        for line in &self.snippet {
            let prefix = if line.is_error {
                format!("  > {} | ", line.number)
            } else {
                format!("    {} | ", line.number)
            };
            writeln!(f, "{}{}", prefix, line.text)?;

            if line.is_error {
                let pointer_offset = prefix.len() + self.caret_column - 1;
                writeln!(f, "{}^--- here", " ".repeat(pointer_offset))?;
            }
        }

        if !self.hints.is_empty() {
            writeln!(f)?;
            writeln!(f, "  did you mean: {}?", self.hints.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErr;
    use crate::position::{Position, Span};

    fn bundle_at<'a>(
        source: &'a str,
        offset: usize,
        err: impl Fn(Span) -> ParseErr,
    ) -> ErrorBundle<'a> {
        let span = Span::new(Position::locate(source, offset), 1);
        ErrorBundle::new(err(span), source)
    }

    #[test]
    fn test_snippet_window() {
        let source = "one\ntwo\nthree\nfour\nfive\nsix";
        let bundle = bundle_at(source, 14, |span| ParseErr::expected(span, ["';'"], Vec::new()));
        let diagnostic = Diagnostic::from_bundle(&bundle, &FormatOptions::default());

        assert_eq!(diagnostic.line, 4);
        let numbers: Vec<usize> = diagnostic.snippet.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6]);
        assert!(diagnostic.snippet[2].is_error);
        assert_eq!(diagnostic.snippet[2].text, "four");
    }

    #[test]
    fn test_plain_rendering() {
        let bundle = bundle_at("let x = ;", 8, |span| {
            ParseErr::expected(span, ["expression"], vec!["statement".to_string()])
        });
        let rendered = Diagnostic::from_bundle(&bundle, &FormatOptions::default()).to_string();

        let expected = "Syntax error at line 1, column 9: expected expression\n\
                        \x20 while parsing statement\n\
                        \n\
                        \x20 > 1 | let x = ;\n\
                        \x20               ^--- here\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_tabs_shift_caret() {
        let bundle = bundle_at("\tx", 1, |span| ParseErr::expected(span, ["y"], Vec::new()));
        let options = FormatOptions {
            tab_size: 2,
            ..FormatOptions::default()
        };
        let diagnostic = Diagnostic::from_bundle(&bundle, &options);
        assert_eq!(diagnostic.column, 2);
        assert_eq!(diagnostic.caret_column, 3);
        assert_eq!(diagnostic.snippet[0].text, "  x");
    }

    #[test]
    fn test_options_hide_hints_and_context() {
        let bundle = bundle_at("retrun", 0, |span| ParseErr::Unexpected {
            span,
            found: "retrun".into(),
            context: vec!["statement".into()],
            hints: vec!["return".into()],
        });
        let shown = Diagnostic::from_bundle(&bundle, &FormatOptions::default());
        assert_eq!(shown.hints, vec!["return"]);
        assert!(shown.to_string().contains("did you mean: return?"));

        let options = FormatOptions {
            show_hints: false,
            show_context: false,
            ..FormatOptions::default()
        };
        let hidden = Diagnostic::from_bundle(&bundle, &options);
        assert!(hidden.hints.is_empty());
        assert!(hidden.context.is_empty());
    }

    #[test]
    fn test_alternatives_and_json() {
        let source = "x";
        let bundle = bundle_at(source, 0, |span| ParseErr::expected(span, ["'a'"], Vec::new()))
            .merge(bundle_at(source, 0, |span| {
                ParseErr::expected(span, ["'b'"], Vec::new())
            }));
        let diagnostic = Diagnostic::from_bundle(&bundle, &FormatOptions::default());
        assert_eq!(diagnostic.message, "expected 'a'");
        assert_eq!(diagnostic.alternatives, vec!["expected 'b'"]);

        let json: serde_json::Value =
            serde_json::from_str(&diagnostic.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "expected");
        assert_eq!(json["caret_column"], 1);
        assert_eq!(json["snippet"][0]["is_error"], true);
    }

    #[test]
    fn test_format_options_from_json() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"showHints": false, "tabSize": 8}"#).unwrap();
        assert!(!options.show_hints);
        assert!(options.show_context);
        assert_eq!(options.tab_size, 8);
        assert_eq!(options.max_context_lines, 2);
    }
}
