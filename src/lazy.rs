use crate::parser::{ParseResult, Parser};
use crate::state::State;
use once_cell::sync::OnceCell;
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The parser is built on first use and cached, so the factory runs at most once
/// per `Lazy` value.
pub struct Lazy<'code, F, P> {
    factory: F,
    parser: OnceCell<P>,
    _phantom: PhantomData<&'code ()>,
}

impl<'code, F, P> Lazy<'code, F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
            _phantom: PhantomData,
        }
    }

    fn get(&self) -> &P {
        self.parser.get_or_init(&self.factory)
    }
}

impl<'code, F, P> Parser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.get().parse(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, F, P>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::many::many0;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::utf8::char::char;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_basic() {
        let lazy_parser = lazy(|| char('a'));
        let (output, remaining) = lazy_parser.parse(State::new("aaaa")).unwrap();
        assert_eq!(output, 'a');
        assert_eq!(remaining.offset(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let lazy_parser = lazy(|| many0(char('a')));
        let (output, remaining) = lazy_parser.parse(State::new("aaaa")).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining.offset(), 4);
    }

    #[test]
    fn test_lazy_factory_runs_once() {
        let calls = AtomicUsize::new(0);
        let lazy_parser = lazy(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            char('x')
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        for _ in 0..3 {
            assert!(lazy_parser.parse(State::new("xyz")).is_ok());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    fn nested() -> BoxedParser<'static, usize> {
        between(char('('), char(')'), lazy(nested))
            .map(|depth| depth + 1)
            .or(char('x').map(|_| 0))
            .boxed()
    }

    #[test]
    fn test_lazy_self_recursion() {
        let (depth, state) = nested().parse(State::new("((x))")).unwrap();
        assert_eq!(depth, 2);
        assert!(state.is_eof());
    }
}
