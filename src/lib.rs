//! Minimal parser combinators over splittable streams.
//!
//! A parser is a value implementing [`Parser`]: a function from an input
//! view to a [`ParseOutcome`], which is either `Matched(value, remainder)`
//! or `NoMatch` and nothing more. Small parsers match single elements or
//! literals; combinators compose them into choice ([`or`], [`choice!`]),
//! sequences (tuples, [`with`], [`skip`], [`apply`]), repetition ([`many`],
//! [`sep_by`]) and transformations ([`Parser::map`], [`Parser::then`],
//! [`Parser::filter`]).
//!
//! Input is anything implementing [`Stream`], with `&str` and `&[T]`
//! provided. Views into the input have value semantics: nothing is ever
//! rewound because nothing was ever advanced in place, and a failing parser
//! leaves its caller exactly where it was. Ordered choice in particular
//! always retries the second alternative against the full original input.
//!
//! ```
//! use nibble::{sep_by, token, Parser};
//! use nibble::parser::char::number;
//! use nibble::ParseOutcome::Matched;
//!
//! let numbers = sep_by::<Vec<_>, _, _>(number(), token(' '));
//! assert_eq!(
//!     numbers.run("123 321 234 abc"),
//!     Matched(vec![123, 321, 234], " abc"),
//! );
//! ```
//!
//! Parsers can also carry a user state value through a run by parsing a
//! [`StateStream`], which travels with the view and backtracks with it; see
//! [`run_state`], [`Parser::map_with`] and [`state_parser`].

pub use either;

pub mod outcome;
pub mod parser;
pub mod stream;

#[doc(inline)]
pub use crate::outcome::{ParseOutcome, some_if};
#[doc(inline)]
pub use crate::parser::{Parser, run_state};
#[doc(inline)]
pub use crate::stream::{StateStream, Stream, Substream};

#[doc(inline)]
pub use crate::parser::choice::{optional, or};
#[doc(inline)]
pub use crate::parser::combinator::ignore;
#[doc(inline)]
pub use crate::parser::function::{parser, state_parser};
#[doc(inline)]
pub use crate::parser::repeat::{many, many1, sep_by, sep_by1};
#[doc(inline)]
pub use crate::parser::sequence::{apply, skip, with};
#[doc(inline)]
pub use crate::parser::token::{
    any, empty, fail, none_of, not_token, one_of, satisfy, satisfy_map, token, tokens, value,
};
