//! Ordered choice between parsers.

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::parser::Parser;

#[derive(Copy, Clone)]
pub struct Or<P1, P2>(P1, P2);

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        match self.0.parse(input.clone()) {
            Matched(value, rest) => Matched(value, rest),
            NoMatch => self.1.parse(input),
        }
    }
}

/// Tries `first`; only if it fails outright, tries `second` against the same
/// original input. Both alternatives see the full input, no matter how far
/// the first one got before failing.
///
/// ```
/// use nibble::{or, Parser};
/// use nibble::parser::char::string;
/// use nibble::ParseOutcome::Matched;
///
/// let keyword = or(string("two"), string("three"));
/// assert_eq!(keyword.run("threes"), Matched("three", "s"));
/// ```
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    Or(first, second)
}

#[derive(Copy, Clone)]
pub struct Optional<P>(P);

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Option<P::Output>;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        match self.0.parse(input.clone()) {
            Matched(value, rest) => Matched(Some(value), rest),
            NoMatch => Matched(None, input),
        }
    }
}

/// Turns a parser into one that always succeeds, yielding `None` and leaving
/// the input untouched where the inner parser fails.
///
/// ```
/// use nibble::{optional, token, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(optional(token('-')).run("-1"), Matched(Some('-'), "1"));
/// assert_eq!(optional(token('-')).run("1"), Matched(None, "1"));
/// ```
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional(parser)
}

/// Ordered choice over any number of parsers of the same type signature,
/// expanding to a chain of [`or`]s.
///
/// ```
/// use nibble::{choice, Parser};
/// use nibble::parser::char::string;
/// use nibble::ParseOutcome::Matched;
///
/// let keyword = choice!(string("one"), string("two"), string("three"));
/// assert_eq!(keyword.run("two!"), Matched("two", "!"));
/// ```
#[macro_export]
macro_rules! choice {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::parser::choice::or($first, $crate::choice!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{token, value};

    #[test]
    fn leftmost_bias() {
        // both match: the left result wins
        let p = or(token('a'), value('z'));
        assert_eq!(p.parse("ab"), Matched('a', "b"));
        // left fails: the right sees the original input
        let p = or(token('b'), value('z'));
        assert_eq!(p.parse("ab"), Matched('z', "ab"));
    }

    #[test]
    fn both_fail() {
        let p = or(token('x'), token('y'));
        assert_eq!(p.parse("ab"), NoMatch);
    }

    #[test]
    fn choice_macro_chains() {
        let p = choice!(token('x'), token('y'), token('a'));
        assert_eq!(p.parse("ab"), Matched('a', "b"));
    }

    #[test]
    fn optional_never_fails() {
        assert_eq!(optional(token('a')).parse(""), Matched(None, ""));
    }
}
