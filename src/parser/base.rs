use thiserror::Error;

use crate::api::{Argument, InvalidCapture};
use crate::matcher::*;
use crate::model::{Action, Identity, ValueType};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid argument declaration, rejected during registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The argument has neither a flag nor a name.
    #[error("Config error: argument must have at least one of a flag or a name.")]
    MissingIdentity,

    /// The action cannot operate on the argument's value type.
    #[error("Config error: action {action} does not support type {value_type} for '{identity}'.")]
    UnsupportedAction {
        /// The offending argument.
        identity: Identity,
        /// The declared action.
        action: Action,
        /// The value type of the bound variable.
        value_type: ValueType,
    },

    /// The choices do not share the type of the bound variable.
    #[error("Config error: choices must match the type of '{0}'.")]
    InvalidType(Identity),

    /// Choices were declared for an action other than `Store`.
    #[error("Config error: only the Store action supports choices for '{0}'.")]
    UnsupportedChoices(Identity),

    /// A positional argument declared an action other than `Store`.
    #[error("Config error: positional argument '{0}' must have the Store action.")]
    PositionalAction(Identity),

    /// An action other than `Store` was declared required.
    #[error("Config error: only the Store action may be required for '{0}'.")]
    UnsupportedRequire(Identity),

    /// A positional argument declared a flag.
    #[error("Config error: positional argument '{0}' cannot have a flag (option names must start with '-').")]
    PositionalFlag(Identity),

    /// An option name has nothing after its prefix.
    #[error("Config error: must provide a name for options like '{0}'.")]
    BarePrefix(String),

    /// The flag or name is reserved, or already in use by another argument.
    #[error("Config error: option string '{0}' is already in use.")]
    Conflicting(String),
}

/// A failure to parse the command line tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token does not match any argument.
    #[error("Parse error: unknown argument '{0}'.")]
    Unknown(String),

    /// The option token is the final token, so it has no value.
    #[error("Parse error: expected a value for '{0}'.")]
    MissingValue(String),

    /// The integer value does not fit an `i32`.
    #[error("Parse error: value '{token}' for '{identity}' exceeds the range of i32.")]
    IntRangeExceeded {
        /// The argument receiving the value.
        identity: Identity,
        /// The value token.
        token: String,
    },

    /// The value is not a number of the required type.
    #[error("Parse error: value '{token}' for '{identity}' cannot convert to {value_type}.")]
    InvalidConversion {
        /// The argument receiving the value.
        identity: Identity,
        /// The value token.
        token: String,
        /// The value type of the argument.
        value_type: ValueType,
    },

    /// The value is not one of the argument's choices.
    /// References the option token, or for a positional argument, the value itself.
    #[error("Parse error: value provided for '{0}' is not a valid choice.")]
    InvalidChoice(String),

    /// A required argument did not occur.
    #[error("Parse error: missing required argument '{0}'.")]
    MissingArgument(Identity),
}

/// How a successful parse concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens were consumed and every required argument occurred.
    Complete,
    /// Help was requested; tokens after the request were not examined.
    Help,
}

pub(crate) struct Parser<'r, 'a> {
    options: Vec<&'r mut Argument<'a>>,
    positionals: Vec<&'r mut Argument<'a>>,
}

impl<'r, 'a> std::fmt::Debug for Parser<'r, 'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'r, 'a> Parser<'r, 'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default())
    }

    pub(crate) fn new(
        options: Vec<&'r mut Argument<'a>>,
        positionals: Vec<&'r mut Argument<'a>>,
    ) -> Self {
        Self {
            options,
            positionals,
        }
    }

    /// Scan the tokens in order, binding each to its argument, then finalize every argument.
    ///
    /// On failure, the `usize` is the combined length of the tokens before the one at fault.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Outcome, (usize, ParseError)> {
        let mut session = Session::new(tokens);

        while let Some(token) = session.current() {
            match classify(token) {
                Token::Help => {
                    return Ok(Outcome::Help);
                }
                Token::Flag(flag) => {
                    let index = find(&self.options, Lookup::Flag(flag))
                        .ok_or_else(|| session.unknown())?;
                    session.bind_option(&mut *self.options[index], false)?;
                }
                Token::Long(long) => match find_long(&self.options, long) {
                    Some((index, negated)) => {
                        session.bind_option(&mut *self.options[index], negated)?;
                    }
                    None => {
                        let cluster_cursor = session.cursor;
                        let mut flags = cluster(long).peekable();

                        if flags.peek().is_none() {
                            return Err(session.unknown());
                        }

                        for flag in flags {
                            let index = find(&self.options, Lookup::Flag(flag)).ok_or_else(|| {
                                let offset = session.offset(cluster_cursor);
                                (offset, ParseError::Unknown(long.to_string()))
                            })?;
                            session.bind_grouped(&mut *self.options[index], cluster_cursor)?;
                        }
                    }
                },
                Token::Value(value) => {
                    let index = find(&self.positionals, Lookup::Index(session.positional))
                        .ok_or_else(|| session.unknown())?;
                    session.positional += 1;
                    session.bind_positional(&mut *self.positionals[index], value)?;
                }
            }

            session.advance();
        }

        let end = session.offset(tokens.len());

        for argument in self.options.iter_mut().chain(self.positionals.iter_mut()) {
            finalize(argument).map_err(|error| (end, error))?;
        }

        Ok(Outcome::Complete)
    }
}

/// The scan state over one token stream.
struct Session<'t> {
    tokens: &'t [&'t str],
    cursor: usize,
    positional: usize,
}

impl<'t> Session<'t> {
    fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            cursor: 0,
            positional: 0,
        }
    }

    fn current(&self) -> Option<&'t str> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn offset(&self, index: usize) -> usize {
        self.tokens[..index]
            .iter()
            .map(|token| token.chars().count())
            .sum()
    }

    fn unknown(&self) -> (usize, ParseError) {
        let token = self.tokens[self.cursor];
        (self.offset(self.cursor), ParseError::Unknown(token.to_string()))
    }

    fn bind_option(
        &mut self,
        argument: &mut Argument<'_>,
        negated: bool,
    ) -> Result<(), (usize, ParseError)> {
        self.bind(argument, self.cursor, negated)
    }

    /// A flag within a cluster binds as an option, with the cluster as its origin.
    /// The cursor may have moved past the cluster when an earlier flag took a value.
    fn bind_grouped(
        &mut self,
        argument: &mut Argument<'_>,
        cluster_cursor: usize,
    ) -> Result<(), (usize, ParseError)> {
        self.bind(argument, cluster_cursor, false)
    }

    fn bind(
        &mut self,
        argument: &mut Argument<'_>,
        origin_cursor: usize,
        negated: bool,
    ) -> Result<(), (usize, ParseError)> {
        let origin = self.tokens[origin_cursor];
        argument.matched();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{origin}' to {argument:?}.");
        }

        match argument.action() {
            Action::Store => {
                if self.cursor + 1 >= self.tokens.len() {
                    return Err((
                        self.offset(origin_cursor),
                        ParseError::MissingValue(origin.to_string()),
                    ));
                }

                // The value is the whole next token.
                self.advance();
                let value = self.tokens[self.cursor];
                argument
                    .capture(value)
                    .map_err(|error| (self.offset(self.cursor), lift(error, argument, origin)))
            }
            Action::StoreTrue => {
                argument.assign_bool(true);
                Ok(())
            }
            Action::StoreFalse => {
                argument.assign_bool(false);
                Ok(())
            }
            Action::BooleanToggle => {
                argument.assign_bool(!negated);
                Ok(())
            }
            // Written once the scan completes.
            Action::Count => Ok(()),
        }
    }

    fn bind_positional(
        &mut self,
        argument: &mut Argument<'_>,
        value: &str,
    ) -> Result<(), (usize, ParseError)> {
        argument.matched();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{value}' to {argument:?}.");
        }

        match argument.action() {
            Action::Store => argument
                .capture(value)
                .map_err(|error| (self.offset(self.cursor), lift(error, argument, value))),
            _ => unreachable!("internal error - positional arguments must have the Store action"),
        }
    }
}

fn lift(error: InvalidCapture, argument: &Argument<'_>, origin: &str) -> ParseError {
    match error {
        InvalidCapture::InvalidConversion { token, value_type } => ParseError::InvalidConversion {
            identity: argument.identity(),
            token,
            value_type,
        },
        InvalidCapture::OutOfRange { token } => ParseError::IntRangeExceeded {
            identity: argument.identity(),
            token,
        },
        InvalidCapture::InvalidChoice { .. } => ParseError::InvalidChoice(origin.to_string()),
    }
}

fn finalize(argument: &mut Argument<'_>) -> Result<(), ParseError> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Finalizing {argument:?}.");
    }

    if argument.action() == Action::Count {
        argument.commit_count();
    } else if argument.is_required() && argument.occurrences() == 0 {
        return Err(ParseError::MissingArgument(argument.identity()));
    }

    Ok(())
}
