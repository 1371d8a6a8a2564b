//! Sequencing: tuples of parsers, keep-left/keep-right, and applicative
//! application.
//!
//! A tuple of up to six parsers is itself a parser, running its members left
//! to right and yielding the tuple of their outputs. A failure anywhere
//! fails the whole sequence.

use crate::outcome::ParseOutcome::{self, Matched, NoMatch};
use crate::parser::Parser;

macro_rules! tuple_parser {
    ($($id:ident)+) => {
        #[allow(non_snake_case)]
        impl<Head, $($id),+> Parser for (Head, $($id),+)
        where
            Head: Parser,
            $($id: Parser<Input = Head::Input>,)+
        {
            type Input = Head::Input;
            type Output = (Head::Output, $($id::Output),+);

            fn parse(
                &self,
                input: Self::Input,
            ) -> ParseOutcome<Self::Output, Self::Input> {
                let (ref head, $(ref $id),+) = *self;
                let (head, rest) = match head.parse(input) {
                    Matched(value, rest) => (value, rest),
                    NoMatch => return NoMatch,
                };
                $(
                    let ($id, rest) = match $id.parse(rest) {
                        Matched(value, rest) => (value, rest),
                        NoMatch => return NoMatch,
                    };
                )+
                Matched((head, $($id),+), rest)
            }
        }
    };
}

tuple_parser!(P2);
tuple_parser!(P2 P3);
tuple_parser!(P2 P3 P4);
tuple_parser!(P2 P3 P4 P5);
tuple_parser!(P2 P3 P4 P5 P6);

#[derive(Copy, Clone)]
pub struct With<P1, P2>((P1, P2));

impl<P1, P2> Parser for With<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = P2::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        self.0.parse(input).map(|(_, right)| right)
    }
}

/// Runs both parsers in sequence, keeping only the second output.
///
/// ```
/// use nibble::{with, token, Parser};
/// use nibble::ParseOutcome::Matched;
///
/// assert_eq!(with(token('#'), token('x')).run("#xy"), Matched('x', "y"));
/// ```
pub fn with<P1, P2>(first: P1, second: P2) -> With<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    With((first, second))
}

#[derive(Copy, Clone)]
pub struct Skip<P1, P2>((P1, P2));

impl<P1, P2> Parser for Skip<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse(&self, input: Self::Input) -> ParseOutcome<Self::Output, Self::Input> {
        self.0.parse(input).map(|(left, _)| left)
    }
}

/// Runs both parsers in sequence, keeping only the first output. The second
/// parser must still succeed.
///
/// ```
/// use nibble::{skip, token, Parser};
/// use nibble::ParseOutcome::{Matched, NoMatch};
///
/// assert_eq!(skip(token('x'), token(';')).run("x;y"), Matched('x', "y"));
/// assert_eq!(skip(token('x'), token(';')).run("xy"), NoMatch);
/// ```
pub fn skip<P1, P2>(first: P1, second: P2) -> Skip<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    Skip((first, second))
}

#[derive(Copy, Clone)]
pub struct Apply<PF, PA>(PF, PA);

impl<PF, PA, B> Parser for Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Input = PF::Input>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Input = PF::Input;
    type Output = B;

    fn parse(&self, input: Self::Input) -> ParseOutcome<B, Self::Input> {
        match self.0.parse(input) {
            Matched(f, rest) => self.1.parse(rest).map(f),
            NoMatch => NoMatch,
        }
    }
}

/// Applicative application: `function` parses to a function, `argument`
/// parses the rest of the input to its argument. Useful for building a value
/// from a run of heterogeneous parses without nesting tuples.
///
/// ```
/// use nibble::{apply, Parser};
/// use nibble::parser::char::{letter, number};
/// use nibble::ParseOutcome::Matched;
///
/// let tagged = apply(letter().map(|tag: char| move |n: i64| (tag, n)), number());
/// assert_eq!(tagged.run("x42!"), Matched(('x', 42), "!"));
/// ```
pub fn apply<PF, PA, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Input = PF::Input>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    Apply(function, argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{any, token};

    #[test]
    fn tuples_sequence_left_to_right() {
        let p = (token('a'), token('b'), any());
        assert_eq!(p.parse("abcd"), Matched(('a', 'b', 'c'), "d"));
        assert_eq!(p.parse("axcd"), NoMatch);
    }

    #[test]
    fn with_keeps_the_right_value() {
        let p = with(token(' '), any());
        assert_eq!(p.parse(" x"), Matched('x', ""));
        assert_eq!(p.parse("x"), NoMatch);
    }

    #[test]
    fn skip_keeps_the_left_value() {
        let p = skip(any(), token(';'));
        assert_eq!(p.parse("x;rest"), Matched('x', "rest"));
        assert_eq!(p.parse("x,rest"), NoMatch);
    }

    #[test]
    fn apply_runs_the_function_side_first() {
        let p = apply(any().map(|a: char| move |b: char| (a, b)), any());
        assert_eq!(p.parse("xyz"), Matched(('x', 'y'), "z"));
        assert_eq!(p.parse("x"), NoMatch);
    }
}
