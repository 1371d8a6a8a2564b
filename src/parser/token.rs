//! Parsers matching a single element of the input, plus the constant parsers
//! `value`, `fail` and `empty` and the literal-run parser `tokens`.

use std::marker::PhantomData;

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::outcome::some_if;
use crate::parser::Parser;
use crate::stream::Substream;

#[derive(Copy, Clone)]
pub struct Any<I>(PhantomData<fn(I) -> I>);

impl<I> Parser for Any<I>
where
    I: Substream,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        input.split_first().into()
    }
}

/// Matches any single element, failing only at end of input.
///
/// ```
/// use nibble::{any, Parser};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// assert_eq!(any().run("ab"), Matched('a', "b"));
/// assert_eq!(any().run(""), NoMatch::<char, _>);
/// ```
pub fn any<I>() -> Any<I>
where
    I: Substream,
{
    Any(PhantomData)
}

fn satisfy_impl<I, P, R>(input: I, predicate: P) -> ParseOutcome<R, I>
where
    I: Substream,
    P: FnOnce(I::Item) -> Option<R>,
{
    match input.split_first() {
        Some((first, rest)) => match predicate(first) {
            Some(value) => Matched(value, rest),
            None => NoMatch,
        },
        None => NoMatch,
    }
}

#[derive(Copy, Clone)]
pub struct Satisfy<I, P> {
    predicate: P,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, P> Parser for Satisfy<I, P>
where
    I: Substream,
    P: Fn(I::Item) -> bool,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        satisfy_impl(input, |item| {
            some_if(item, |item| (self.predicate)(item.clone()))
        })
    }
}

/// Matches a single element for which `predicate` returns `true`.
///
/// ```
/// use nibble::{satisfy, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// let vowel = satisfy(|c: char| "aeiou".contains(c));
/// assert_eq!(vowel.run("ox"), Matched('o', "x"));
/// ```
pub fn satisfy<I, P>(predicate: P) -> Satisfy<I, P>
where
    I: Substream,
    P: Fn(I::Item) -> bool,
{
    Satisfy {
        predicate,
        _marker: PhantomData,
    }
}

#[derive(Copy, Clone)]
pub struct SatisfyMap<I, P> {
    predicate: P,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, P, R> Parser for SatisfyMap<I, P>
where
    I: Substream,
    P: Fn(I::Item) -> Option<R>,
{
    type Input = I;
    type Output = R;

    fn parse(&self, input: I) -> ParseOutcome<R, I> {
        satisfy_impl(input, &self.predicate)
    }
}

/// Matches and converts a single element in one step: the element is consumed
/// exactly when `predicate` returns `Some`, and the parser yields the
/// converted value.
///
/// ```
/// use nibble::{satisfy_map, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// let digit = satisfy_map(|c: char| c.to_digit(10));
/// assert_eq!(digit.run("7a"), Matched(7, "a"));
/// ```
pub fn satisfy_map<I, P, R>(predicate: P) -> SatisfyMap<I, P>
where
    I: Substream,
    P: Fn(I::Item) -> Option<R>,
{
    SatisfyMap {
        predicate,
        _marker: PhantomData,
    }
}

#[derive(Clone)]
pub struct Token<I>
where
    I: Substream,
{
    token: I::Item,
}

impl<I> Parser for Token<I>
where
    I: Substream,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        satisfy_impl(input, |item| some_if(item, |item| *item == self.token))
    }
}

/// Matches the single element `token`.
pub fn token<I>(token: I::Item) -> Token<I>
where
    I: Substream,
{
    Token { token }
}

#[derive(Clone)]
pub struct NotToken<I>
where
    I: Substream,
{
    token: I::Item,
}

impl<I> Parser for NotToken<I>
where
    I: Substream,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        satisfy_impl(input, |item| some_if(item, |item| *item != self.token))
    }
}

/// Matches any single element except `token`.
///
/// ```
/// use nibble::{not_token, Parser};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// assert_eq!(not_token('"').run("ab"), Matched('a', "b"));
/// assert_eq!(not_token('"').run("\"ab"), NoMatch);
/// ```
pub fn not_token<I>(token: I::Item) -> NotToken<I>
where
    I: Substream,
{
    NotToken { token }
}

#[derive(Clone)]
pub struct OneOf<I, T> {
    tokens: T,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, T> Parser for OneOf<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        satisfy_impl(input, |item| {
            some_if(item, |item| {
                self.tokens.clone().into_iter().any(|t| t == *item)
            })
        })
    }
}

/// Matches a single element contained in `tokens`.
///
/// ```
/// use nibble::{one_of, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// let sign = one_of("+-".chars());
/// assert_eq!(sign.run("-3"), Matched('-', "3"));
/// ```
pub fn one_of<I, T>(tokens: T) -> OneOf<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    OneOf {
        tokens,
        _marker: PhantomData,
    }
}

#[derive(Clone)]
pub struct NoneOf<I, T> {
    tokens: T,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, T> Parser for NoneOf<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    type Input = I;
    type Output = I::Item;

    fn parse(&self, input: I) -> ParseOutcome<I::Item, I> {
        satisfy_impl(input, |item| {
            some_if(item, |item| {
                self.tokens.clone().into_iter().all(|t| t != *item)
            })
        })
    }
}

/// Matches a single element not contained in `tokens`.
pub fn none_of<I, T>(tokens: T) -> NoneOf<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    NoneOf {
        tokens,
        _marker: PhantomData,
    }
}

#[derive(Clone)]
pub struct Tokens<I, T> {
    tokens: T,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, T> Parser for Tokens<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    type Input = I;
    type Output = ();

    fn parse(&self, input: I) -> ParseOutcome<(), I> {
        let mut rest = input;
        for expected in self.tokens.clone() {
            match rest.split_first() {
                Some((first, next)) if first == expected => rest = next,
                _ => return NoMatch,
            }
        }
        Matched((), rest)
    }
}

/// Matches the elements of `tokens` verbatim, element by element. The output
/// is `()`: the caller already knows what matched. Failing anywhere along
/// the run fails the whole parser.
///
/// ```
/// use nibble::{tokens, Parser};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// let magic = [0x89, b'P'];
/// let header = tokens(magic.iter().cloned());
/// let input: &[u8] = &[0x89, b'P', b'N', b'G'];
/// assert_eq!(header.run(input), Matched((), &[b'N', b'G'][..]));
/// assert_eq!(tokens("abc".chars()).run("abd"), NoMatch);
/// ```
pub fn tokens<I, T>(tokens: T) -> Tokens<I, T>
where
    I: Substream,
    T: Clone + IntoIterator<Item = I::Item>,
{
    Tokens {
        tokens,
        _marker: PhantomData,
    }
}

#[derive(Clone)]
pub struct Value<I, T> {
    value: T,
    _marker: PhantomData<fn(I) -> I>,
}

impl<I, T> Parser for Value<I, T>
where
    I: Substream,
    T: Clone,
{
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> ParseOutcome<T, I> {
        Matched(self.value.clone(), input)
    }
}

/// Always succeeds with a clone of `value`, consuming nothing.
///
/// ```
/// use nibble::{value, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(value::<&str, _>(1).run("abc"), Matched(1, "abc"));
/// ```
pub fn value<I, T>(value: T) -> Value<I, T>
where
    I: Substream,
    T: Clone,
{
    Value {
        value,
        _marker: PhantomData,
    }
}

/// Always succeeds with `()`, consuming nothing. The identity of sequencing:
/// unseparated repetition is separated repetition over `empty`.
pub fn empty<I>() -> Value<I, ()>
where
    I: Substream,
{
    value(())
}

pub struct Fail<I, O>(PhantomData<fn(I) -> O>);

impl<I, O> Clone for Fail<I, O> {
    fn clone(&self) -> Self {
        Fail(PhantomData)
    }
}

impl<I, O> Copy for Fail<I, O> {}

impl<I, O> Parser for Fail<I, O>
where
    I: Substream,
{
    type Input = I;
    type Output = O;

    fn parse(&self, _input: I) -> ParseOutcome<O, I> {
        NoMatch
    }
}

/// Always fails, consuming nothing. The identity of ordered choice.
pub fn fail<I, O>() -> Fail<I, O>
where
    I: Substream,
{
    Fail(PhantomData)
}
