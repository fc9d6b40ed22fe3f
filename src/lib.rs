//! `argwise` is a declarative command line parser for Rust.
//!
//! Declare each argument against a variable you own, register the arguments with an [`ArgumentParser`], and parse.
//! The parser writes the values straight into your variables; there is no intermediate map of matches to query.
//!
//! `argwise` prioritizes the following design concerns:
//! * *Declarative binding*:
//! Each [`Argument`] mutably borrows the variable it writes into, so the value type is fixed by construction.
//! * *Fail fast, fail precisely*:
//! Invalid declarations are rejected at registration ([`ConfigError`]).
//! Invalid input is rejected at the first offending token ([`ParseError`]), along with the offset of that token.
//! * *Familiar syntax*:
//! Flags, names, grouped flags, negated toggles and positionals behave as they do in most Unix programs.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] [-n | --negate | --no-negate] x y
//!
//! Adds two integers together.
//!
//! positional arguments:
//!  x              The first integer to add.
//!  y              The second integer to add.
//!
//! options:
//!  -h, --help     Show this help message and exit.
//!  -n, --negate   Negate the sum.
//!
//! $ summer 1 2 -n
//! Sum: -3
//!
//! $ summer 1
//! Parse error: missing required argument 'y'.
//! 1
//! ^
//!
//! $ summer 1 blah
//! Parse error: value 'blah' for 'y' cannot convert to i32.
//! 1 blah
//!   ^
//! ```
//!
//! # Arguments
//! An argument is either *positional* or an *option*.
//! * A positional argument has a name that does not start with `-` (ex: `item`).
//! It always has the [`Action::Store`] action, and is matched by its position amongst the positionals.
//! * An option has a single character flag (ex: `-v`), a name starting with `-` (ex: `--verbose`), or both.
//!
//! Each argument takes an [`Action`]:
//!
//! ```console
//! Action         | Storage               | Constructor            | Effect
//! ----------------------------------------------------------------------------------------------------
//! Store          | i32, f32, String      | positional, option     | coerce the value token and store it
//! StoreTrue      | bool                  | flag_true              | store true
//! StoreFalse     | bool                  | flag_false             | store false
//! Count          | i32                   | count                  | store the number of occurrences
//! BooleanToggle  | bool                  | toggle                 | store true for --NAME, false for --no-NAME
//! ```
//!
//! A `Store` argument may restrict its values via [`Argument::choices`].
//! Only `Store` arguments may be [`Argument::required`]; positionals always are.
//!
//! # Parsing Semantics
//! * `-h` and `--help` stop the parse and request the help message.
//! Tokens after the request are not examined, although errors in the tokens before it are reported first.
//! * `-F` matches the option with flag `F`.
//! * `--NAME` matches the option with name `--NAME`.
//! `--no-NAME` matches the toggle `--NAME`, negated.
//! * Any other token starting with `-` is a group of flags (ex: `-abc` is equivalent to `-a -b -c`).
//! A `Store` flag within the group takes the token following the group as its value.
//! * All other tokens are matched to the positionals, in registration order.
//! * A `Store` option takes the following token as its value, even when that token starts with `-`.
//! * Repeating an option overwrites its value; `Count` options accumulate.
//! * After all tokens are consumed, `Count` values are stored, and missing `required` arguments are reported.
//!
//! Integers are parsed from decimal, hexadecimal (`0x1f`) or octal (`017`) text, and must fit an `i32`.
//! Floats are parsed from standard float text; float choices match within a small epsilon.
//!
//! # Defaults
//! The defaults of your program come from the variable initializations.
//! `argwise` only writes to a variable when its argument matches (or, for `Count`, once parsing completes).
//! Read [`Argument::occurrences`] to find out whether an argument occurred.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, Outcome, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
