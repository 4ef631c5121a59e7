use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that always succeeds with a clone of its value, consuming nothing
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), state))
    }
}

/// Always succeed with `value` without consuming input
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Alias of [`succeed`]
pub fn pure<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Alias of [`succeed`]
pub fn lift<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        DefaultParser::new()
    }
}

impl<'code, T> Parser<'code> for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        Ok((T::default(), state))
    }
}

/// Convenience function to create a default parser
pub fn default<T>() -> DefaultParser<T>
where
    T: Default,
{
    DefaultParser::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeed_consumes_nothing() {
        let state = State::new("hello");
        let (value, remaining) = succeed(7).parse(state.clone()).unwrap();
        assert_eq!(value, 7);
        assert_eq!(remaining, state);
    }

    #[test]
    fn test_pure_and_lift_are_succeed() {
        let (a, _) = pure("a").parse(State::new("")).unwrap();
        let (b, _) = lift(vec![1, 2]).parse(State::new("")).unwrap();
        assert_eq!(a, "a");
        assert_eq!(b, vec![1, 2]);
    }

    #[test]
    fn test_succeed_is_reusable() {
        let parser = succeed(String::from("x"));
        for _ in 0..3 {
            let (value, _) = parser.parse(State::new("abc")).unwrap();
            assert_eq!(value, "x");
        }
    }

    #[test]
    fn test_default_string() {
        let state = State::new("hello");
        let (result, remaining) = default::<String>().parse(state).unwrap();
        assert_eq!(result, String::default());
        assert_eq!(remaining.peek(), Some('h'));
    }

    #[test]
    fn test_default_empty_input() {
        let (result, remaining) = default::<i32>().parse(State::new("")).unwrap();
        assert_eq!(result, 0);
        assert!(remaining.is_eof());
    }
}
