//! The [`Parser`] trait and the combinators operating on it.
//!
//! Concrete parsers live in the submodules: single-element and constant
//! parsers in [`token`], closure wrappers in [`function`], choice in
//! [`choice`], sequencing in [`sequence`], repetition in [`repeat`], output
//! adapters in [`combinator`] and the textual vocabulary in [`char`].

use either::Either;

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::stream::{StateStream, Stream, Substream};

use self::choice::{Or, or};
use self::combinator::{
    AndThen, Filter, Ignore, Map, MapWith, OnMatch, Then, and_then, filter, ignore, map, map_with,
    on_match, then,
};
use self::sequence::{Skip, With, skip, with};

pub mod char;
pub mod choice;
pub mod combinator;
pub mod function;
pub mod repeat;
pub mod sequence;
pub mod token;

/// A parser over substreams of type `Self::Input`, producing `Self::Output`.
///
/// Parsers are immutable values. `parse` borrows the parser, so one parser
/// can be shared, stored, and rerun freely; combinators that retry keep a
/// clone of the input view instead of rewinding anything.
pub trait Parser {
    /// The view type this parser consumes.
    type Input: Substream;
    /// The value a successful parse produces.
    type Output;

    /// Runs the parser on `input`.
    ///
    /// On a match, the returned remainder is a suffix of `input`. On
    /// `NoMatch` nothing was consumed; `input` was taken by value, but every
    /// caller that wants to continue from the same place holds its own clone
    /// of the view.
    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input>;

    /// Runs the parser against a whole [`Stream`].
    ///
    /// ```
    /// use nibble::{token, Parser};
    /// use nibble::ParseOutcome::Matched;
    ///
    /// assert_eq!(token('a').run("abc"), Matched('a', "bc"));
    /// ```
    fn run<St>(&self, input: St) -> ParseOutcome<Self::Output, St>
    where
        Self: Sized,
        St: Stream<Sub = Self::Input>,
    {
        match self.parse(input.into_substream()) {
            Matched(value, rest) => Matched(value, St::from_substream(rest)),
            NoMatch => NoMatch,
        }
    }

    /// Transforms the output value with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        map(self, f)
    }

    /// Like [`map`](Parser::map), with mutable access to the state of a
    /// [`StateStream`] input.
    ///
    /// ```
    /// use nibble::{any, run_state, Parser};
    /// use nibble::ParseOutcome::Matched;
    ///
    /// let counted = any().map_with(|c: char, count: &mut usize| {
    ///     *count += 1;
    ///     c
    /// });
    /// assert_eq!(run_state(counted, "ab", 0), Matched(('a', 1), "b"));
    /// ```
    fn map_with<I, U, B, F>(self, f: F) -> MapWith<Self, F>
    where
        Self: Sized + Parser<Input = StateStream<I, U>>,
        I: Substream,
        U: Clone,
        F: Fn(Self::Output, &mut U) -> B,
    {
        map_with(self, f)
    }

    /// Monadic bind: uses the output to decide which parser consumes the
    /// rest of the input.
    ///
    /// ```
    /// use nibble::{any, token, Parser};
    /// use nibble::ParseOutcome::{Matched, NoMatch};
    ///
    /// // any element, doubled
    /// let doubled = any().then(token);
    /// assert_eq!(doubled.run("aab"), Matched('a', "b"));
    /// assert_eq!(doubled.run("ab"), NoMatch);
    /// ```
    fn then<N, F>(self, f: F) -> Then<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> N,
        N: Parser<Input = Self::Input>,
    {
        then(self, f)
    }

    /// Transforms the output with a fallible `f`; `None` turns the whole
    /// parse into `NoMatch`.
    fn and_then<B, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<B>,
    {
        and_then(self, f)
    }

    /// Fails the parse when `predicate` rejects the output.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        filter(self, predicate)
    }

    /// Ordered choice, see [`or`](choice::or).
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Parser<Input = Self::Input, Output = Self::Output>,
    {
        or(self, other)
    }

    /// Sequences with `other`, keeping only its output.
    fn with<P>(self, other: P) -> With<Self, P>
    where
        Self: Sized,
        P: Parser<Input = Self::Input>,
    {
        with(self, other)
    }

    /// Sequences with `other`, keeping only `self`'s output.
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        Self: Sized,
        P: Parser<Input = Self::Input>,
    {
        skip(self, other)
    }

    /// Replaces the output with a clone of `value` on every match.
    fn value<B>(self, value: B) -> OnMatch<Self, B>
    where
        Self: Sized,
        B: Clone,
    {
        on_match(self, value)
    }

    /// Discards the output, yielding `()`.
    fn ignore(self) -> Ignore<Self>
    where
        Self: Sized,
    {
        ignore(self)
    }

    /// Erases the parser's concrete type.
    fn boxed<'a>(self) -> Box<dyn Parser<Input = Self::Input, Output = Self::Output> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Wraps into the left variant of [`Either`], so two different parser
    /// types can flow through one binding.
    fn left<R>(self) -> Either<Self, R>
    where
        Self: Sized,
    {
        Either::Left(self)
    }

    /// Wraps into the right variant of [`Either`].
    fn right<L>(self) -> Either<L, Self>
    where
        Self: Sized,
    {
        Either::Right(self)
    }
}

/// Runs a parser over a [`StateStream`], threading `state` through the
/// parse. On a match the final state is returned next to the value; a
/// `NoMatch` discards the state along with everything else.
///
/// ```
/// use nibble::{run_state, state_parser, Substream};
/// use nibble::ParseOutcome::Matched;
///
/// let next = state_parser(|input: &str, count: &mut usize| {
///     *count += 1;
///     input.split_first().into()
/// });
/// assert_eq!(run_state(next, "ab", 0), Matched(('a', 1), "b"));
/// ```
pub fn run_state<P, St, U>(parser: P, input: St, state: U) -> ParseOutcome<(P::Output, U), St>
where
    St: Stream,
    U: Clone,
    P: Parser<Input = StateStream<St::Sub, U>>,
{
    match parser.parse(StateStream::new(input.into_substream(), state)) {
        Matched(value, rest) => Matched((value, rest.state), St::from_substream(rest.stream)),
        NoMatch => NoMatch,
    }
}

impl<'a, P> Parser for &'a P
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        (**self).parse(input)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        (**self).parse(input)
    }
}

impl<L, R> Parser for Either<L, R>
where
    L: Parser,
    R: Parser<Input = L::Input, Output = L::Output>,
{
    type Input = L::Input;
    type Output = L::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        match self {
            Either::Left(parser) => parser.parse(input),
            Either::Right(parser) => parser.parse(input),
        }
    }
}
