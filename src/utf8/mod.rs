pub mod char;
pub mod pattern;
pub mod string;
pub mod whitespace;

pub use char::{any_char, char, none_of, one_of, satisfy};
pub use pattern::regex;
pub use string::string;
pub use whitespace::{lexeme, spaces, whitespace};
