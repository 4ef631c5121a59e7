use crate::atomic::Atomic;
use crate::many::{keep_commit, step};
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use crate::then::Then;

/// Parser combinator that matches a list of items separated by a parser
///
/// Each `separator + item` pair is attempted as a unit: if the pair fails
/// without committing, parsing backs out to just before the separator and the
/// list ends there. A trailing separator is therefore left unconsumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    at_least_one: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, at_least_one: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            at_least_one,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut state) = match step(&self.parser, &state) {
            Ok(result) => result,
            Err(failure) if failure.is_final() || self.at_least_one => {
                return Err(keep_commit(failure, &state));
            }
            Err(_) => return Ok((Vec::new(), state)),
        };

        let pair = Atomic::new(Then::new(&self.separator, &self.parser));
        let mut items = vec![first];
        loop {
            match step(&pair, &state) {
                Ok((item, next)) => {
                    items.push(item);
                    state = next;
                }
                Err(failure) if failure.is_final() => return Err(keep_commit(failure, &state)),
                Err(_) => break,
            }
        }
        Ok((items, state))
    }
}

/// Zero or more `parser` separated by `separator`
pub fn sep_by<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS> {
    SeparatedList::new(parser, separator, false)
}

/// One or more `parser` separated by `separator`
pub fn sep_by1<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS> {
    SeparatedList::new(parser, separator, true)
}
