mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, Outcome, ParseError};

pub(crate) use base::Parser;
pub(crate) use interface::*;
pub(crate) use middleware::*;
pub(crate) use printer::*;
