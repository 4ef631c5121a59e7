use crate::map::Map;
use crate::or::Or;

pub mod digit;
pub mod f64;
pub mod i64;
pub mod u64;

pub use digit::digit;
pub use f64::f64;
pub use i64::i64;
pub use u64::u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

pub type NumberParser =
    Or<Map<f64::FloatParser, fn(f64) -> Number>, Map<i64::IntParser, fn(i64) -> Number>>;

/// Parser that matches either an integer or a float and returns a Number enum
///
/// A float is tried first; an input without a fractional part falls back to
/// an integer from the same starting point. A float that overflows is an
/// error and never falls back.
pub fn number() -> NumberParser {
    Or::new(
        Map::new(f64(), Number::F64 as fn(f64) -> Number),
        Map::new(i64(), Number::I64 as fn(i64) -> Number),
    )
}
