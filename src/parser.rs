use crate::error::ErrorBundle;
use crate::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A failed parse: every error collected so far and the state it stopped in
///
/// The state is where the failure was observed. Alternation reads its commit
/// flag to decide whether siblings may still be tried.
pub struct Failure<'code> {
    pub bundle: ErrorBundle<'code>,
    pub state: State<'code>,
}

impl<'code> Failure<'code> {
    /// Whether alternation must stop here instead of trying the next branch
    pub fn is_final(&self) -> bool {
        self.state.is_committed() || self.bundle.has_fatal()
    }

    /// Same bundle, observed at another state
    pub fn at(self, state: State<'code>) -> Self {
        Failure {
            bundle: self.bundle,
            state,
        }
    }
}

impl<'code> Clone for Failure<'code> {
    fn clone(&self) -> Self {
        Failure {
            bundle: self.bundle.clone(),
            state: self.state.clone(),
        }
    }
}

impl<'code> fmt::Debug for Failure<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("bundle", &self.bundle)
            .field("state", &self.state)
            .finish()
    }
}

/// Success carries the value and the advanced state
pub type ParseResult<'code, T> = Result<(T, State<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure description: running it never mutates it, so one value
/// can serve any number of parses.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given state
    ///
    /// On success returns the value and a state reflecting everything that was
    /// consumed. On failure the caller's state is left alone; rewinding is the
    /// business of the alternation and atomic combinators.
    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(state)
    }
}

/// Parser built from a plain function over states
pub struct FnParser<F, T> {
    function: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> FnParser<F, T> {
    pub fn new(function: F) -> Self {
        FnParser {
            function,
            _output: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for FnParser<F, T>
where
    F: Fn(State<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (self.function)(state)
    }
}

/// Wrap a function over states as a parser
pub fn from_fn<'code, F, T>(function: F) -> FnParser<F, T>
where
    F: Fn(State<'code>) -> ParseResult<'code, T>,
{
    FnParser::new(function)
}

/// Type-erased, shareable parser
///
/// Cloning is a reference-count bump. Boxed parsers are `Send + Sync`, so a
/// grammar built once can be used from several threads at the same time.
pub struct BoxedParser<'code, T> {
    parser: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, T> Clone for BoxedParser<'code, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
