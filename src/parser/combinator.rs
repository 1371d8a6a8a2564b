//! Adapters transforming the output of an inner parser.

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::outcome::some_if;
use crate::parser::Parser;
use crate::stream::{StateStream, Substream};

#[derive(Copy, Clone)]
pub struct Map<P, F>(P, F);

impl<P, F, B> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> B,
{
    type Input = P::Input;
    type Output = B;

    fn parse(&self, input: Self::Input) -> ParseOutcome<B, Self::Input> {
        self.0.parse(input).map(&self.1)
    }
}

/// Equivalent to [`Parser::map`].
pub fn map<P, F, B>(parser: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> B,
{
    Map(parser, f)
}

#[derive(Copy, Clone)]
pub struct MapWith<P, F>(P, F);

impl<P, F, I, U, B> Parser for MapWith<P, F>
where
    P: Parser<Input = StateStream<I, U>>,
    I: Substream,
    U: Clone,
    F: Fn(P::Output, &mut U) -> B,
{
    type Input = StateStream<I, U>;
    type Output = B;

    fn parse(&self, input: Self::Input) -> ParseOutcome<B, Self::Input> {
        match self.0.parse(input) {
            Matched(value, mut rest) => {
                let value = (self.1)(value, &mut rest.state);
                Matched(value, rest)
            }
            NoMatch => NoMatch,
        }
    }
}

/// Equivalent to [`Parser::map_with`].
pub fn map_with<P, F, I, U, B>(parser: P, f: F) -> MapWith<P, F>
where
    P: Parser<Input = StateStream<I, U>>,
    I: Substream,
    U: Clone,
    F: Fn(P::Output, &mut U) -> B,
{
    MapWith(parser, f)
}

#[derive(Copy, Clone)]
pub struct Then<P, F>(P, F);

impl<P, F, N> Parser for Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> N,
    N: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = N::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<N::Output, Self::Input> {
        match self.0.parse(input) {
            Matched(value, rest) => (self.1)(value).parse(rest),
            NoMatch => NoMatch,
        }
    }
}

/// Equivalent to [`Parser::then`].
pub fn then<P, F, N>(parser: P, f: F) -> Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> N,
    N: Parser<Input = P::Input>,
{
    Then(parser, f)
}

#[derive(Copy, Clone)]
pub struct AndThen<P, F>(P, F);

impl<P, F, B> Parser for AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<B>,
{
    type Input = P::Input;
    type Output = B;

    fn parse(&self, input: Self::Input) -> ParseOutcome<B, Self::Input> {
        match self.0.parse(input) {
            Matched(value, rest) => match (self.1)(value) {
                Some(converted) => Matched(converted, rest),
                None => NoMatch,
            },
            NoMatch => NoMatch,
        }
    }
}

/// Equivalent to [`Parser::and_then`].
pub fn and_then<P, F, B>(parser: P, f: F) -> AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<B>,
{
    AndThen(parser, f)
}

#[derive(Copy, Clone)]
pub struct Filter<P, F>(P, F);

impl<P, F> Parser for Filter<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<P::Output, Self::Input> {
        match self.0.parse(input) {
            Matched(value, rest) => match some_if(value, &self.1) {
                Some(value) => Matched(value, rest),
                None => NoMatch,
            },
            NoMatch => NoMatch,
        }
    }
}

/// Equivalent to [`Parser::filter`].
pub fn filter<P, F>(parser: P, predicate: F) -> Filter<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    Filter(parser, predicate)
}

#[derive(Copy, Clone)]
pub struct Ignore<P>(P);

impl<P> Parser for Ignore<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = ();

    fn parse(&self, input: Self::Input) -> ParseOutcome<(), Self::Input> {
        self.0.parse(input).map(|_| ())
    }
}

/// Discards the output of `parser`, yielding `()` on success.
pub fn ignore<P>(parser: P) -> Ignore<P>
where
    P: Parser,
{
    Ignore(parser)
}

#[derive(Copy, Clone)]
pub struct OnMatch<P, B>(P, B);

impl<P, B> Parser for OnMatch<P, B>
where
    P: Parser,
    B: Clone,
{
    type Input = P::Input;
    type Output = B;

    fn parse(&self, input: Self::Input) -> ParseOutcome<B, Self::Input> {
        self.0.parse(input).map(|_| self.1.clone())
    }
}

/// Equivalent to [`Parser::value`]: replaces the output with a constant.
pub fn on_match<P, B>(parser: P, value: B) -> OnMatch<P, B>
where
    P: Parser,
    B: Clone,
{
    OnMatch(parser, value)
}
