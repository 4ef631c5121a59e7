//! # Parsecraft - Parser Combinator Library
//!
//! Parsecraft builds recursive-descent parsers by composing small parsers into
//! larger ones. Parsers are plain values: building one runs nothing, and a
//! built parser can be run any number of times, from any number of threads.
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Every error carries a span, line and column,
//!   the trail of grammar labels it happened under, and optional suggestions
//! - **Explicit backtracking**: `commit` and `atomic` decide exactly when an
//!   alternative may be retried
//! - **Cheap state**: The parse state is an offset into the source plus a
//!   persistent context, so snapshots and rewinds never copy text
//!
//! ```
//! use parsecraft::prelude::*;
//!
//! let list = between(char('('), char(')'), sep_by(u64(), char(','))).label("list");
//!
//! assert_eq!(parse_or_error(&list, "(1,2,3)"), Ok(vec![1, 2, 3]));
//!
//! let err = parse_or_throw(&list, "(1,2").unwrap_err();
//! assert_eq!(err.to_string(), "expected closing ')' at line 1, column 5");
//! ```

pub mod and;
pub mod ascii;
pub mod atomic;
pub mod between;
pub mod commit;
pub mod diagnostic;
pub mod eof;
pub mod error;
pub mod fail;
pub mod filter;
pub mod flat_map;
pub mod hints;
pub mod label;
pub mod lazy;
pub mod look_ahead;
pub mod many;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod run;
pub mod separated_list;
pub mod sequence;
pub mod sequential;
pub mod state;
pub mod succeed;
pub mod then;
pub mod utf8;
pub mod with_error;

pub use diagnostic::{Diagnostic, FormatOptions};
pub use error::{ErrorBundle, ErrorKind, ParseErr, SyntaxError};
pub use hints::HintOptions;
pub use parser::{BoxedParser, Failure, ParseResult, Parser};
pub use position::{Position, Span};
pub use run::{ParseOutcome, parse, parse_or_error, parse_or_throw, parse_with};
pub use state::State;

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::and::{AndExt, and};
    pub use crate::ascii::number::{Number, digit, f64, i64, number, u64};
    pub use crate::atomic::{AtomicExt, atomic};
    pub use crate::between::{BetweenExt, between};
    pub use crate::commit::commit;
    pub use crate::eof::eof;
    pub use crate::error::{ErrorBundle, ErrorKind, ParseErr, SyntaxError};
    pub use crate::fail::{fail, fail_with, fatal};
    pub use crate::filter::FilterExt;
    pub use crate::flat_map::{FlatMapExt, flat_map};
    pub use crate::hints::{
        HintOptions, any_keyword_with_hints, generate_hints, keyword_with_hints,
        levenshtein_distance, string_with_hints,
    };
    pub use crate::label::{LabelExt, label};
    pub use crate::lazy::lazy;
    pub use crate::look_ahead::look_ahead;
    pub use crate::many::{ManyExt, many_n, many0, many1, skip_many0, skip_many1};
    pub use crate::map::{MapExt, map};
    pub use crate::not::{NotExt, not};
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::or::{OrExt, choice, or};
    pub use crate::parser::{BoxedExt, BoxedParser, Failure, ParseResult, Parser, from_fn};
    pub use crate::position::{Position, Span, SpannedExt, spanned};
    pub use crate::run::{RunExt, parse, parse_or_error, parse_or_throw, parse_with};
    pub use crate::separated_list::{sep_by, sep_by1};
    pub use crate::sequence::sequence;
    pub use crate::sequential::{Steps, sequential};
    pub use crate::state::State;
    pub use crate::succeed::{default, lift, pure, succeed};
    pub use crate::then::{ThenExt, skip, then};
    pub use crate::utf8::{
        any_char, char, lexeme, none_of, one_of, regex, satisfy, spaces, string, whitespace,
    };
    pub use crate::with_error::WithErrorExt;
}
