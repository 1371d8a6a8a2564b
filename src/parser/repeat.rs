//! Repetition combinators, with and without separators.
//!
//! All four parsers collect into any `Extend + Default` target (`Vec<O>`,
//! `String`, a custom accumulator) chosen by the caller, and run as plain
//! loops so stack use does not grow with the input. Element parsers must
//! consume input on success, or the loop will not terminate.

use std::iter;
use std::marker::PhantomData;

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::parser::Parser;

#[derive(Copy, Clone)]
pub struct Many<F, P> {
    parser: P,
    _marker: PhantomData<fn() -> F>,
}

impl<F, P> Parser for Many<F, P>
where
    P: Parser,
    F: Extend<P::Output> + Default,
{
    type Input = P::Input;
    type Output = F;

    fn parse(&self, input: Self::Input) -> ParseOutcome<F, Self::Input> {
        let mut collection = F::default();
        let mut rest = input;
        loop {
            match self.parser.parse(rest.clone()) {
                Matched(value, next) => {
                    collection.extend(iter::once(value));
                    rest = next;
                }
                NoMatch => return Matched(collection, rest),
            }
        }
    }
}

/// Applies `parser` zero or more times, collecting the outputs. Never fails:
/// if the first attempt does not match, yields the empty collection with the
/// input untouched.
///
/// ```
/// use nibble::{many, Parser};
/// use nibble::parser::char::letter;
/// use nibble::ParseOutcome::Matched;
///
/// let word = many::<String, _>(letter());
/// assert_eq!(word.run("hey875"), Matched("hey".to_string(), "875"));
/// assert_eq!(word.run("875"), Matched(String::new(), "875"));
/// ```
pub fn many<F, P>(parser: P) -> Many<F, P> {
    Many {
        parser,
        _marker: PhantomData,
    }
}

#[derive(Copy, Clone)]
pub struct Many1<F, P> {
    parser: P,
    _marker: PhantomData<fn() -> F>,
}

impl<F, P> Parser for Many1<F, P>
where
    P: Parser,
    F: Extend<P::Output> + Default,
{
    type Input = P::Input;
    type Output = F;

    fn parse(&self, input: Self::Input) -> ParseOutcome<F, Self::Input> {
        match self.parser.parse(input) {
            Matched(first, mut rest) => {
                let mut collection = F::default();
                collection.extend(iter::once(first));
                loop {
                    match self.parser.parse(rest.clone()) {
                        Matched(value, next) => {
                            collection.extend(iter::once(value));
                            rest = next;
                        }
                        NoMatch => return Matched(collection, rest),
                    }
                }
            }
            NoMatch => NoMatch,
        }
    }
}

/// Like [`many`] but requires at least one element, failing as a whole on
/// zero.
pub fn many1<F, P>(parser: P) -> Many1<F, P> {
    Many1 {
        parser,
        _marker: PhantomData,
    }
}

#[derive(Copy, Clone)]
pub struct SepBy<F, P, Sep> {
    parser: P,
    separator: Sep,
    _marker: PhantomData<fn() -> F>,
}

impl<F, P, Sep> Parser for SepBy<F, P, Sep>
where
    P: Parser,
    Sep: Parser<Input = P::Input>,
    F: Extend<P::Output> + Default,
{
    type Input = P::Input;
    type Output = F;

    fn parse(&self, input: Self::Input) -> ParseOutcome<F, Self::Input> {
        match sep_by1::<F, _, _>(&self.parser, &self.separator).parse(input.clone()) {
            Matched(collection, rest) => Matched(collection, rest),
            NoMatch => Matched(F::default(), input),
        }
    }
}

/// Applies `parser` zero or more times, requiring `separator` to match
/// between consecutive elements. Separator outputs are discarded.
///
/// A separator is only ever consumed together with the element after it: if
/// the separator matches but no element follows, both are rolled back and
/// the parse ends at the previous element.
///
/// ```
/// use nibble::{sep_by, token, Parser};
/// use nibble::parser::char::number;
/// use nibble::ParseOutcome::Matched;
///
/// let numbers = sep_by::<Vec<_>, _, _>(number(), token(' '));
/// assert_eq!(numbers.run("123 321 234 abc"), Matched(vec![123, 321, 234], " abc"));
/// assert_eq!(numbers.run("abc"), Matched(vec![], "abc"));
/// ```
pub fn sep_by<F, P, Sep>(parser: P, separator: Sep) -> SepBy<F, P, Sep> {
    SepBy {
        parser,
        separator,
        _marker: PhantomData,
    }
}

#[derive(Copy, Clone)]
pub struct SepBy1<F, P, Sep> {
    parser: P,
    separator: Sep,
    _marker: PhantomData<fn() -> F>,
}

impl<F, P, Sep> Parser for SepBy1<F, P, Sep>
where
    P: Parser,
    Sep: Parser<Input = P::Input>,
    F: Extend<P::Output> + Default,
{
    type Input = P::Input;
    type Output = F;

    fn parse(&self, input: Self::Input) -> ParseOutcome<F, Self::Input> {
        let mut collection = F::default();
        let mut rest = match self.parser.parse(input) {
            Matched(first, rest) => {
                collection.extend(iter::once(first));
                rest
            }
            NoMatch => return NoMatch,
        };
        loop {
            // separator and element stand or fall together
            let after_sep = match self.separator.parse(rest.clone()) {
                Matched(_, after) => after,
                NoMatch => return Matched(collection, rest),
            };
            match self.parser.parse(after_sep) {
                Matched(value, next) => {
                    collection.extend(iter::once(value));
                    rest = next;
                }
                NoMatch => return Matched(collection, rest),
            }
        }
    }
}

/// Like [`sep_by`] but requires at least one element.
pub fn sep_by1<F, P, Sep>(parser: P, separator: Sep) -> SepBy1<F, P, Sep> {
    SepBy1 {
        parser,
        separator,
        _marker: PhantomData,
    }
}
