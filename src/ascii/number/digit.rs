use crate::utf8::char::{Satisfy, satisfy};

pub type Digit = Satisfy<fn(char) -> bool>;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Digit {
    let is_digit: fn(char) -> bool = |c| c.is_ascii_digit();
    satisfy(is_digit, "digit")
}
