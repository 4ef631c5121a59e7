pub mod number;

pub use number::{Number, digit, f64, i64, number, u64};
