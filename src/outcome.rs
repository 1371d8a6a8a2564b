//! The result type shared by every parser in the crate.
//!
//! A parse either matches, yielding a value together with the rest of the
//! input, or it does not. There is deliberately no third case and no payload
//! on failure: combinators such as [`or`](crate::parser::choice::or) recover
//! by retrying on the original input, so nothing needs to be reported back
//! through the failing branch.

/// The outcome of running a parser: a value plus the remaining input, or
/// nothing at all.
///
/// `Matched` always carries the remainder as a suffix of the input the parser
/// was given. `NoMatch` carries no remainder; the input a caller handed to a
/// failing parser is whatever the caller still holds, untouched.
///
/// ```
/// use nibble::{token, Parser};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// assert_eq!(token('a').run("abc"), Matched('a', "bc"));
/// assert_eq!(token('a').run("xyz"), NoMatch);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOutcome<O, S> {
    /// The parser matched, producing `O` and leaving `S` unconsumed.
    Matched(O, S),
    /// The parser did not match. The input is considered unconsumed.
    NoMatch,
}

use self::ParseOutcome::*;

impl<O, S> ParseOutcome<O, S> {
    /// Applies `f` to the matched value, leaving the remainder and a
    /// `NoMatch` untouched.
    pub fn map<B, F>(self, f: F) -> ParseOutcome<B, S>
    where
        F: FnOnce(O) -> B,
    {
        match self {
            Matched(value, rest) => Matched(f(value), rest),
            NoMatch => NoMatch,
        }
    }

    /// Chains a second stage which receives both the value and the remainder.
    pub fn and_then<B, F>(self, f: F) -> ParseOutcome<B, S>
    where
        F: FnOnce(O, S) -> ParseOutcome<B, S>,
    {
        match self {
            Matched(value, rest) => f(value, rest),
            NoMatch => NoMatch,
        }
    }

    /// Returns `true` on `Matched`.
    pub fn is_match(&self) -> bool {
        matches!(self, Matched(..))
    }

    /// Converts into an `Option`, for use with the standard adapters.
    pub fn into_option(self) -> Option<(O, S)> {
        self.into()
    }
}

impl<O, S> From<Option<(O, S)>> for ParseOutcome<O, S> {
    fn from(option: Option<(O, S)>) -> Self {
        match option {
            Some((value, rest)) => Matched(value, rest),
            None => NoMatch,
        }
    }
}

impl<O, S> From<ParseOutcome<O, S>> for Option<(O, S)> {
    fn from(outcome: ParseOutcome<O, S>) -> Self {
        match outcome {
            Matched(value, rest) => Some((value, rest)),
            NoMatch => None,
        }
    }
}

/// Keeps `value` if `predicate` holds for it, otherwise collapses to `None`.
///
/// This is the single primitive behind every filtering combinator
/// ([`Parser::filter`](crate::Parser::filter), [`satisfy`](crate::satisfy)
/// and friends).
///
/// ```
/// use nibble::some_if;
///
/// assert_eq!(some_if(4, |n| n % 2 == 0), Some(4));
/// assert_eq!(some_if(5, |n| n % 2 == 0), None);
/// ```
pub fn some_if<T, F>(value: T, predicate: F) -> Option<T>
where
    F: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_touches_only_the_value() {
        assert_eq!(Matched(2, "rest").map(|n| n * 10), Matched(20, "rest"));
        let none: ParseOutcome<i32, &str> = NoMatch;
        assert_eq!(none.map(|n| n * 10), NoMatch);
    }

    #[test]
    fn option_round_trip() {
        let outcome: ParseOutcome<_, _> = Some((1, "x")).into();
        assert_eq!(outcome, Matched(1, "x"));
        assert_eq!(outcome.into_option(), Some((1, "x")));
        assert_eq!(ParseOutcome::<i32, &str>::from(None).into_option(), None);
    }

    #[test]
    fn some_if_borrows_the_value() {
        let s = String::from("hello");
        assert_eq!(some_if(s, |s| s.starts_with('h')).as_deref(), Some("hello"));
    }
}
