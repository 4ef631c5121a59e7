use crate::error::{ErrorBundle, ParseErr};
use crate::parser::Failure;
use crate::position::{Position, Span};
use im::Vector;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Context carried alongside the position of a parse
///
/// Holds the label trail, the commit flag, the full source and the caller's
/// opaque data. Label stacks are persistent vectors, so cloning a context
/// never copies the trail.
#[derive(Clone)]
pub struct Context<'code> {
    labels: Vector<Cow<'static, str>>,
    committed: bool,
    source: &'code str,
    custom: &'code dyn Any,
}

impl<'code> fmt::Debug for Context<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("labels", &self.labels)
            .field("committed", &self.committed)
            .field("source_len", &self.source.len())
            .finish()
    }
}

/// Immutable snapshot of a parse: where we are and what surrounds us
///
/// Every transition returns a new state. The remaining input is always
/// `source[offset..]` and is never copied.
pub struct State<'code> {
    position: Position,
    context: Context<'code>,
}

impl<'code> State<'code> {
    /// Fresh state at the start of `source` without user data
    pub fn new(source: &'code str) -> Self {
        State::with_custom(source, &())
    }

    /// Fresh state at the start of `source` carrying `custom` user data
    ///
    /// The data is opaque to every combinator; grammars read it back with
    /// [`State::custom`].
    pub fn with_custom<T: Any>(source: &'code str, custom: &'code T) -> Self {
        State {
            position: Position::start(),
            context: Context {
                labels: Vector::new(),
                committed: false,
                source,
                custom,
            },
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn source(&self) -> &'code str {
        self.context.source
    }

    pub fn remaining(&self) -> &'code str {
        self.context
            .source
            .get(self.position.offset..)
            .unwrap_or("")
    }

    pub fn is_eof(&self) -> bool {
        self.remaining().is_empty()
    }

    /// The next unconsumed character, if any
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The user data, if it is a `T`
    pub fn custom<T: Any>(&self) -> Option<&'code T> {
        self.context.custom.downcast_ref::<T>()
    }

    pub fn is_committed(&self) -> bool {
        self.context.committed
    }

    /// Labels active at this point, outermost first
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.context.labels.iter().map(|label| label.as_ref())
    }

    /// Owned copy of the label trail for error context
    pub fn label_trail(&self) -> Vec<String> {
        self.labels().map(str::to_string).collect()
    }

    /// Consume `bytes` bytes of the remaining input
    ///
    /// The count is clamped to the remaining input and must land on a char
    /// boundary; callers always pass lengths of matched text.
    pub fn advance(&self, bytes: usize) -> Self {
        let remaining = self.remaining();
        let consumed = remaining.get(..bytes.min(remaining.len())).unwrap_or("");
        State {
            position: self.position.advance(consumed),
            context: self.context.clone(),
        }
    }

    pub fn with_committed(&self, committed: bool) -> Self {
        let mut next = self.clone();
        next.context.committed = committed;
        next
    }

    pub fn push_label(&self, label: Cow<'static, str>) -> Self {
        let mut next = self.clone();
        next.context.labels.push_back(label);
        next
    }

    /// Replace the label trail with the one from `other`
    pub fn with_labels_of(&self, other: &State<'code>) -> Self {
        let mut next = self.clone();
        next.context.labels = other.context.labels.clone();
        next
    }

    /// Span starting at the current position
    pub fn span(&self, length: usize) -> Span {
        Span::new(self.position, length)
    }

    /// Length in bytes of the next character, 0 at end of input
    pub fn next_char_len(&self) -> usize {
        self.peek().map(char::len_utf8).unwrap_or(0)
    }

    /// `Expected` error at the current position
    pub fn expected<I, S>(&self, items: I, length: usize) -> ParseErr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParseErr::expected(self.span(length), items, self.label_trail())
    }

    /// `Unexpected` error for `found` at the current position
    pub fn unexpected(&self, found: impl Into<String>) -> ParseErr {
        let found = found.into();
        ParseErr::Unexpected {
            span: self.span(found.len()),
            found,
            context: self.label_trail(),
            hints: Vec::new(),
        }
    }

    /// `Custom` error at the current position
    pub fn custom_error(&self, message: impl Into<String>) -> ParseErr {
        ParseErr::Custom {
            span: self.span(0),
            message: message.into(),
            context: self.label_trail(),
            hints: Vec::new(),
        }
    }

    /// `Fatal` error at the current position
    pub fn fatal_error(&self, message: impl Into<String>) -> ParseErr {
        ParseErr::Fatal {
            span: self.span(0),
            message: message.into(),
            context: self.label_trail(),
        }
    }

    /// Turn `err` into a failure observed at this state
    pub fn fail(&self, err: ParseErr) -> Failure<'code> {
        Failure {
            bundle: ErrorBundle::new(err, self.context.source),
            state: self.clone(),
        }
    }
}

impl<'code> Clone for State<'code> {
    fn clone(&self) -> Self {
        State {
            position: self.position,
            context: self.context.clone(),
        }
    }
}

impl<'code> fmt::Debug for State<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("position", &self.position)
            .field("context", &self.context)
            .finish()
    }
}

impl<'code> PartialEq for State<'code> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.context.committed == other.context.committed
            && self.context.labels == other.context.labels
            && std::ptr::eq(self.context.source, other.context.source)
            && std::ptr::addr_eq(self.context.custom, other.context.custom)
    }
}
