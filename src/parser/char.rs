//! Parsers for character streams: single characters, the usual character
//! classes, and the small vocabulary (`word`, `number`, `string`) most text
//! grammars start from.
//!
//! The classes are defined by explicit ranges and sets joined with ordered
//! choice, so membership is exactly what the docs say: `letter` is ASCII
//! `a..=z` or `A..=Z`, `space` is the set `' '`, `'\n'`, `'\t'`.

use crate::parser::Parser;
use crate::parser::choice::{Or, optional, or};
use crate::parser::repeat::{Many1, many1};
use crate::parser::token::{Satisfy, SatisfyMap, Token, satisfy, satisfy_map, token, tokens};
use crate::stream::Substream;

/// Matches the character `c`.
///
/// ```
/// use nibble::Parser;
/// use nibble::parser::char::char;
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(char('!').run("!?"), Matched('!', "?"));
/// ```
pub fn char<I>(c: char) -> Token<I>
where
    I: Substream<Item = char>,
{
    token(c)
}

pub type Lower<I> = Satisfy<I, fn(char) -> bool>;

/// Matches an ASCII lowercase letter, `'a'..='z'`.
pub fn lower<I>() -> Lower<I>
where
    I: Substream<Item = char>,
{
    fn is_lower(c: char) -> bool {
        ('a'..='z').contains(&c)
    }
    satisfy(is_lower as fn(char) -> bool)
}

pub type Upper<I> = Satisfy<I, fn(char) -> bool>;

/// Matches an ASCII uppercase letter, `'A'..='Z'`.
pub fn upper<I>() -> Upper<I>
where
    I: Substream<Item = char>,
{
    fn is_upper(c: char) -> bool {
        ('A'..='Z').contains(&c)
    }
    satisfy(is_upper as fn(char) -> bool)
}

pub type Letter<I> = Or<Lower<I>, Upper<I>>;

/// Matches a letter of either case.
pub fn letter<I>() -> Letter<I>
where
    I: Substream<Item = char>,
{
    or(lower(), upper())
}

pub type Digit<I> = SatisfyMap<I, fn(char) -> Option<i64>>;

/// Matches one decimal digit, yielding its numeric value.
///
/// ```
/// use nibble::Parser;
/// use nibble::parser::char::digit;
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(digit().run("123abc"), Matched(1, "23abc"));
/// ```
pub fn digit<I>() -> Digit<I>
where
    I: Substream<Item = char>,
{
    fn digit_value(c: char) -> Option<i64> {
        c.to_digit(10).map(i64::from)
    }
    satisfy_map(digit_value as fn(char) -> Option<i64>)
}

pub type AlphaNum<I> = Or<Letter<I>, Satisfy<I, fn(char) -> bool>>;

/// Matches a letter or a decimal digit.
pub fn alpha_num<I>() -> AlphaNum<I>
where
    I: Substream<Item = char>,
{
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }
    or(letter(), satisfy(is_digit as fn(char) -> bool))
}

pub type Space<I> = Satisfy<I, fn(char) -> bool>;

/// Matches one whitespace character: space, newline or tab.
pub fn space<I>() -> Space<I>
where
    I: Substream<Item = char>,
{
    fn is_space(c: char) -> bool {
        c == ' ' || c == '\n' || c == '\t'
    }
    satisfy(is_space as fn(char) -> bool)
}

pub type Word<I> = Many1<String, Letter<I>>;

/// Matches one or more letters, collected into a `String`.
///
/// ```
/// use nibble::Parser;
/// use nibble::parser::char::word;
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(word().run("hey875"), Matched("hey".to_string(), "875"));
/// ```
pub fn word<I>() -> Word<I>
where
    I: Substream<Item = char>,
{
    many1(letter())
}

// `many1` folds digits straight into the value, no intermediate Vec.
// Saturating arithmetic keeps overlong digit runs deterministic in every
// build profile.
#[derive(Default)]
struct DecimalFold {
    value: i64,
}

impl Extend<i64> for DecimalFold {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, digits: T) {
        for digit in digits {
            self.value = self.value.saturating_mul(10).saturating_add(digit);
        }
    }
}

/// Matches an integer: an optional `-` sign followed by one or more decimal
/// digits, folded into an `i64`. The sign alone never matches, and a sign
/// with no digit after it fails without consuming the sign.
///
/// Digit runs beyond the range of `i64` saturate at `i64::MAX` (or its
/// negation with a sign); the whole run is still consumed.
///
/// ```
/// use nibble::Parser;
/// use nibble::parser::char::number;
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(number().run("123abc"), Matched(123, "abc"));
/// assert_eq!(number().run("-42"), Matched(-42, ""));
/// ```
pub fn number<I>() -> impl Parser<Input = I, Output = i64>
where
    I: Substream<Item = char>,
{
    (optional(char('-')), many1::<DecimalFold, _>(digit())).map(|(sign, digits)| {
        if sign.is_some() {
            -digits.value
        } else {
            digits.value
        }
    })
}

/// Matches the text `s` verbatim, yielding it back.
///
/// ```
/// use nibble::Parser;
/// use nibble::parser::char::string;
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// assert_eq!(string("abc1").run("abc123"), Matched("abc1", "23"));
/// assert_eq!(string("abc1").run("abc2"), NoMatch);
/// ```
pub fn string<I>(s: &'static str) -> impl Parser<Input = I, Output = &'static str>
where
    I: Substream<Item = char>,
{
    tokens(s.chars()).map(move |()| s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ParseOutcome::{Matched, NoMatch};

    #[test]
    fn classes() {
        assert_eq!(lower().parse("abc"), Matched('a', "bc"));
        assert_eq!(lower().parse("Abc"), NoMatch);
        assert_eq!(upper().parse("Abc"), Matched('A', "bc"));
        assert_eq!(letter().parse("x1"), Matched('x', "1"));
        assert_eq!(letter().parse("1x"), NoMatch);
        assert_eq!(alpha_num().parse("1x"), Matched('1', "x"));
        assert_eq!(space().parse("\nx"), Matched('\n', "x"));
    }

    #[test]
    fn digit_yields_the_value() {
        assert_eq!(digit().parse("123abc"), Matched(1, "23abc"));
        assert_eq!(digit().parse("abc"), NoMatch);
    }

    #[test]
    fn word_takes_leading_letters() {
        assert_eq!(word().parse("hey875"), Matched("hey".to_string(), "875"));
        assert_eq!(word().parse("875"), NoMatch);
    }

    #[test]
    fn number_folds_digits() {
        assert_eq!(number().parse("123abc"), Matched(123, "abc"));
        assert_eq!(number().parse("-17.5"), Matched(-17, ".5"));
        assert_eq!(number().parse("abc"), NoMatch);
    }

    #[test]
    fn lone_sign_does_not_match() {
        assert_eq!(number().parse("-abc"), NoMatch);
        assert_eq!(number().parse("-"), NoMatch);
    }

    #[test]
    fn number_saturates_instead_of_overflowing() {
        let over = "99999999999999999999";
        assert_eq!(number().parse(over), Matched(i64::MAX, ""));
        let under = format!("-{}x", over);
        assert_eq!(number().parse(under.as_str()), Matched(-i64::MAX, "x"));
        // the largest representable values come through exactly
        let max = i64::MAX.to_string();
        assert_eq!(number().parse(max.as_str()), Matched(i64::MAX, ""));
    }

    #[test]
    fn string_is_all_or_nothing() {
        assert_eq!(string("abc1").parse("abc123"), Matched("abc1", "23"));
        assert_eq!(string("abc1").parse("abc2"), NoMatch);
        assert_eq!(string("abc1").parse("ab"), NoMatch);
    }
}
