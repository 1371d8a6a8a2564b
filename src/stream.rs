//! Input abstraction decoupling parsers from concrete containers.
//!
//! Parsing works on a [`Substream`]: a cheap view into a sequence that can
//! hand out its first element together with the view of everything after it.
//! Splitting is value-semantic, the original view is never mutated, so a
//! combinator that wants to retry simply keeps a clone of the view it was
//! given.
//!
//! A [`Stream`] is the caller-facing container the view comes from. For the
//! provided implementations (`&str`, `&[T]`) the container and the view are
//! the same type and the conversions are identity.

/// A whole input sequence, convertible to and from its view type.
///
/// `from_substream` exists so [`run`](crate::Parser::run) can return the
/// unconsumed remainder in the caller's own type.
pub trait Stream: Sized {
    /// The view this stream parses through.
    type Sub: Substream;

    /// Converts the stream into a view of its full contents.
    fn into_substream(self) -> Self::Sub;

    /// Rebuilds a stream from a (suffix) view of it.
    fn from_substream(sub: Self::Sub) -> Self;
}

/// A non-mutating, cheaply cloneable view into a sequence of items.
///
/// `split_first` either yields the first item and the view of the rest, or
/// `None` when the view is exhausted. Both operations are O(1); a view is a
/// pair of pointers in practice, never an owned buffer.
pub trait Substream: Clone {
    /// The element type of the sequence.
    type Item: Clone + PartialEq;

    /// Splits off the first item, leaving `self` untouched.
    fn split_first(&self) -> Option<(Self::Item, Self)>;
}

impl<'a> Stream for &'a str {
    type Sub = &'a str;

    fn into_substream(self) -> Self::Sub {
        self
    }

    fn from_substream(sub: Self::Sub) -> Self {
        sub
    }
}

impl<'a> Substream for &'a str {
    type Item = char;

    fn split_first(&self) -> Option<(char, Self)> {
        let mut chars = self.chars();
        let first = chars.next()?;
        Some((first, chars.as_str()))
    }
}

impl<'a, T> Stream for &'a [T]
where
    T: Clone + PartialEq,
{
    type Sub = &'a [T];

    fn into_substream(self) -> Self::Sub {
        self
    }

    fn from_substream(sub: Self::Sub) -> Self {
        sub
    }
}

impl<'a, T> Substream for &'a [T]
where
    T: Clone + PartialEq,
{
    type Item = T;

    fn split_first(&self) -> Option<(T, Self)> {
        let slice = *self;
        slice.first().map(|first| (first.clone(), &slice[1..]))
    }
}

/// A stream carrying a user state value alongside the input.
///
/// The state travels with the view: splitting clones it, so a combinator
/// that backtracks to an earlier view also backtracks to the state as it was
/// there. State changed inside a failed alternative leaves no trace.
///
/// Parsers over a `StateStream` compose with ordinary element parsers
/// unchanged, since its items are the inner stream's items. Write to the
/// state with [`Parser::map_with`](crate::Parser::map_with) or
/// [`state_parser`](crate::state_parser), and run with
/// [`run_state`](crate::run_state) to get the final state back.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StateStream<S, U> {
    pub stream: S,
    pub state: U,
}

impl<S, U> StateStream<S, U> {
    pub fn new(stream: S, state: U) -> Self {
        StateStream { stream, state }
    }
}

impl<S, U> Stream for StateStream<S, U>
where
    S: Stream,
    U: Clone,
{
    type Sub = StateStream<S::Sub, U>;

    fn into_substream(self) -> Self::Sub {
        StateStream {
            stream: self.stream.into_substream(),
            state: self.state,
        }
    }

    fn from_substream(sub: Self::Sub) -> Self {
        StateStream {
            stream: S::from_substream(sub.stream),
            state: sub.state,
        }
    }
}

impl<S, U> Substream for StateStream<S, U>
where
    S: Substream,
    U: Clone,
{
    type Item = S::Item;

    fn split_first(&self) -> Option<(S::Item, Self)> {
        let (first, rest) = self.stream.split_first()?;
        Some((
            first,
            StateStream {
                stream: rest,
                state: self.state.clone(),
            },
        ))
    }
}
