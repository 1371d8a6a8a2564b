//! Parsers built directly from closures.

use std::marker::PhantomData;

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::parser::Parser;
use crate::stream::{StateStream, Substream};

#[derive(Copy, Clone)]
pub struct FnParser<I, F>(F, PhantomData<fn(I) -> I>);

impl<I, O, F> Parser for FnParser<I, F>
where
    I: Substream,
    F: Fn(I) -> ParseOutcome<O, I>,
{
    type Input = I;
    type Output = O;

    fn parse(&self, input: I) -> ParseOutcome<O, I> {
        (self.0)(input)
    }
}

/// Wraps a function returning a [`ParseOutcome`] into a parser.
///
/// ```
/// use nibble::{parser, Parser, Substream};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// let leading_digit = parser(|input: &str| match input.split_first() {
///     Some((first, rest)) if first.is_ascii_digit() => Matched(first, rest),
///     _ => NoMatch,
/// });
/// assert_eq!(leading_digit.run("2x"), Matched('2', "x"));
/// assert_eq!(leading_digit.run("x2"), NoMatch);
/// ```
pub fn parser<I, O, F>(f: F) -> FnParser<I, F>
where
    I: Substream,
    F: Fn(I) -> ParseOutcome<O, I>,
{
    FnParser(f, PhantomData)
}

#[derive(Copy, Clone)]
pub struct FnStateParser<I, U, F>(F, PhantomData<fn(I, U) -> (I, U)>);

impl<I, U, O, F> Parser for FnStateParser<I, U, F>
where
    I: Substream,
    U: Clone,
    F: Fn(I, &mut U) -> ParseOutcome<O, I>,
{
    type Input = StateStream<I, U>;
    type Output = O;

    fn parse(&self, input: StateStream<I, U>) -> ParseOutcome<O, StateStream<I, U>> {
        let StateStream { stream, mut state } = input;
        match (self.0)(stream, &mut state) {
            Matched(value, rest) => Matched(value, StateStream::new(rest, state)),
            NoMatch => NoMatch,
        }
    }
}

/// Like [`parser`] but the closure also receives the state of a
/// [`StateStream`] input; run the result with
/// [`run_state`](crate::run_state).
pub fn state_parser<I, U, O, F>(f: F) -> FnStateParser<I, U, F>
where
    I: Substream,
    U: Clone,
    F: Fn(I, &mut U) -> ParseOutcome<O, I>,
{
    FnStateParser(f, PhantomData)
}
