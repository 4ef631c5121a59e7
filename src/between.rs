use crate::error::ParseErr;
use crate::parser::{Failure, ParseResult, Parser};
use crate::state::State;

/// Parser combinator that matches content between opening and closing delimiters
///
/// Returns only the content. A missing closing delimiter is reported as
/// `expected closing ...` at the position where it should have been, which
/// reads better than a bare token list when the opener is far away.
///
/// # Examples
/// - `between(char('('), char(')'), u64())` on `"(42)"` → `42`
/// - on `"(42"` → `expected closing ')'` at offset 3
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (_, state) = self.open.parse(state)?;
        let (value, state) = self.content.parse(state)?;
        match self.close.parse(state) {
            Ok((_, state)) => Ok((value, state)),
            Err(failure) => Err(closing(failure)),
        }
    }
}

fn closing<'code>(failure: Failure<'code>) -> Failure<'code> {
    if failure.bundle.has_fatal() {
        return failure;
    }
    let primary = failure.bundle.primary();
    let items: Vec<String> = match primary {
        ParseErr::Expected { items, .. } => {
            items.iter().map(|item| format!("closing {}", item)).collect()
        }
        other => vec![format!("closing {}", other)],
    };
    let rewritten = ParseErr::expected(primary.span(), items, primary.context().to_vec());
    Failure {
        bundle: failure.bundle.replace(rewritten),
        state: failure.state,
    }
}

/// Convenience function to create a Between parser
pub fn between<P1, P2, P3>(open: P1, close: P3, content: P2) -> Between<P1, P2, P3> {
    Between::new(open, content, close)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt<'code>: Parser<'code> + Sized {
    /// Surround this parser with an opening and closing delimiter
    fn between<P1, P3>(self, open: P1, close: P3) -> Between<P1, Self, P3>
    where
        P1: Parser<'code>,
        P3: Parser<'code>,
    {
        Between::new(open, self, close)
    }
}

impl<'code, P> BetweenExt<'code> for P where P: Parser<'code> {}
