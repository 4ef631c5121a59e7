use crate::position::Span;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The four kinds of parse error, ordered from least to most specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Expected,
    Unexpected,
    Custom,
    Fatal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Expected => "expected",
            ErrorKind::Unexpected => "unexpected",
            ErrorKind::Custom => "custom",
            ErrorKind::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

/// A single parse error recorded at the point of divergence
///
/// `context` is the label trail active when the error was raised, outermost
/// first. An empty `hints` list means there are no suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseErr {
    /// A required token or pattern is absent
    Expected {
        span: Span,
        items: Vec<String>,
        context: Vec<String>,
    },
    /// Extra or wrong input is present
    Unexpected {
        span: Span,
        found: String,
        context: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        hints: Vec<String>,
    },
    /// Author-supplied domain message
    Custom {
        span: Span,
        message: String,
        context: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        hints: Vec<String>,
    },
    /// Unrecoverable; alternation never retries past it
    Fatal {
        span: Span,
        message: String,
        context: Vec<String>,
    },
}

impl ParseErr {
    /// Build an `Expected` error, dropping duplicate items but keeping order
    pub fn expected<I, S>(span: Span, items: I, context: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        ParseErr::Expected {
            span,
            items: unique,
            context,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseErr::Expected { .. } => ErrorKind::Expected,
            ParseErr::Unexpected { .. } => ErrorKind::Unexpected,
            ParseErr::Custom { .. } => ErrorKind::Custom,
            ParseErr::Fatal { .. } => ErrorKind::Fatal,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseErr::Expected { span, .. }
            | ParseErr::Unexpected { span, .. }
            | ParseErr::Custom { span, .. }
            | ParseErr::Fatal { span, .. } => *span,
        }
    }

    pub fn context(&self) -> &[String] {
        match self {
            ParseErr::Expected { context, .. }
            | ParseErr::Unexpected { context, .. }
            | ParseErr::Custom { context, .. }
            | ParseErr::Fatal { context, .. } => context,
        }
    }

    pub fn hints(&self) -> &[String] {
        match self {
            ParseErr::Unexpected { hints, .. } | ParseErr::Custom { hints, .. } => hints,
            ParseErr::Expected { .. } | ParseErr::Fatal { .. } => &[],
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseErr::Fatal { .. })
    }

    /// Attach ranked suggestions
    ///
    /// Only `Unexpected` and `Custom` hold hints, so an `Expected` error becomes
    /// a `Custom` one carrying its rendered message. `Fatal` is returned
    /// unchanged.
    pub fn with_hints(self, new_hints: Vec<String>) -> Self {
        match self {
            ParseErr::Unexpected {
                span,
                found,
                context,
                ..
            } => ParseErr::Unexpected {
                span,
                found,
                context,
                hints: new_hints,
            },
            ParseErr::Custom {
                span,
                message,
                context,
                ..
            } => ParseErr::Custom {
                span,
                message,
                context,
                hints: new_hints,
            },
            expected @ ParseErr::Expected { .. } => ParseErr::Custom {
                span: expected.span(),
                message: expected.to_string(),
                context: expected.context().to_vec(),
                hints: new_hints,
            },
            fatal @ ParseErr::Fatal { .. } => fatal,
        }
    }
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErr::Expected { items, .. } => match items.as_slice() {
                [] => f.write_str("expected something else"),
                [single] => write!(f, "expected {}", single),
                many => write!(f, "expected one of {}", many.join(", ")),
            },
            ParseErr::Unexpected { found, .. } if found.is_empty() => {
                f.write_str("unexpected end of input")
            }
            ParseErr::Unexpected { found, .. } => write!(f, "unexpected '{}'", found),
            ParseErr::Custom { message, .. } | ParseErr::Fatal { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

/// Every error collected while exploring alternatives, plus the source
///
/// A bundle is never empty: it is created from one error and only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBundle<'code> {
    errors: Vec<ParseErr>,
    source: &'code str,
}

impl<'code> ErrorBundle<'code> {
    pub fn new(error: ParseErr, source: &'code str) -> Self {
        ErrorBundle {
            errors: vec![error],
            source,
        }
    }

    pub fn errors(&self) -> &[ParseErr] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseErr> {
        self.errors
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append the errors of a sibling alternative
    pub fn merge(mut self, other: ErrorBundle<'code>) -> Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(ParseErr::is_fatal)
    }

    /// The error that best represents this failure
    ///
    /// Furthest offset wins; ties go to the more specific kind
    /// (`Fatal > Custom > Unexpected > Expected`), then to the earliest error.
    pub fn primary(&self) -> &ParseErr {
        let mut best = &self.errors[0];
        for err in &self.errors[1..] {
            if (err.span().offset, err.kind()) > (best.span().offset, best.kind()) {
                best = err;
            }
        }
        best
    }

    /// Replace every error with a single one
    pub fn replace(self, error: ParseErr) -> Self {
        ErrorBundle {
            errors: vec![error],
            source: self.source,
        }
    }
}

impl fmt::Display for ErrorBundle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = self.primary();
        let span = primary.span();
        write!(
            f,
            "{} at line {}, column {}",
            primary, span.line, span.column
        )
    }
}

impl std::error::Error for ErrorBundle<'_> {}

/// Error raised by the throwing entry point
///
/// Owns everything it needs, so it outlives the parsed source and converts
/// into any boxed error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    /// The primary error of the failed parse
    pub error: ParseErr,
    /// Plain-text diagnostic with the source excerpt
    pub rendered: String,
}
