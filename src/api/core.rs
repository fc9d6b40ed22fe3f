use std::rc::Rc;

use crate::api::Argument;
use crate::constant::*;
use crate::model::{Action, ValueType};
use crate::parser::{
    ArgumentDoc, ConfigError, ConsoleInterface, GeneralParser, Outcome, ParseError, Parser,
    Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser: a registry of arguments, and the entry points to parse tokens into them.
///
/// The parser holds each added [`Argument`] by mutable reference until parsing consumes the parser.
///
/// ### Example
/// ```
/// use argwise::{Argument, ArgumentParser};
///
/// let mut x: i32 = 0;
/// let mut verbose: bool = false;
/// let mut x_arg = Argument::option(&mut x).flag('x').name("--value");
/// let mut verbose_arg = Argument::toggle(&mut verbose).name("--verbose");
///
/// let mut parser = ArgumentParser::new("program");
/// parser.add(&mut x_arg).unwrap();
/// parser.add(&mut verbose_arg).unwrap();
/// parser.parse_tokens(&["-x", "52", "--verbose"]).unwrap();
///
/// assert_eq!(x_arg.occurrences(), 1);
/// assert_eq!(x, 52);
/// assert!(verbose);
/// ```
pub struct ArgumentParser<'r, 'a> {
    program: String,
    description: Option<String>,
    epilog: Option<String>,
    options: Vec<&'r mut Argument<'a>>,
    positionals: Vec<&'r mut Argument<'a>>,
}

impl<'r, 'a> std::fmt::Debug for ArgumentParser<'r, 'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program", &self.program)
            .field("options", &self.options)
            .field("positionals", &self.positionals)
            .finish()
    }
}

impl<'r, 'a> ArgumentParser<'r, 'a> {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            description: None,
            epilog: None,
            options: Vec::default(),
            positionals: Vec::default(),
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a command line parser for use in testing.
    ///
    /// ### Example
    /// ```
    /// use argwise::{Argument, ArgumentParser};
    ///
    /// // Function under test.
    /// // We want to make sure the arguments are wired up correctly.
    /// fn setup<'r, 'a>(parser: &mut ArgumentParser<'r, 'a>, value: &'r mut Argument<'a>) {
    ///     parser.add(value).unwrap();
    /// }
    ///
    /// let mut x: i32 = 1;
    /// let mut x_arg = Argument::positional(&mut x, "x");
    /// let mut parser = ArgumentParser::test_dummy();
    /// setup(&mut parser, &mut x_arg);
    /// parser.parse_tokens(&["2"]).unwrap();
    /// assert_eq!(x, 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        Self::new("test-dummy")
    }

    /// Document the parser, shown after the usage line of the help message.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Document the parser, shown at the end of the help message.
    /// If repeated, only the final epilog will apply.
    pub fn epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog.replace(epilog.into());
        self
    }

    /// Register an argument.
    ///
    /// The order of positional arguments corresponds to their positional order during parsing.
    /// The order of options does not affect the parser semantics, other than their order in the help message.
    ///
    /// A rejected argument is not registered; the parser remains usable.
    ///
    /// ### Example
    /// ```
    /// use argwise::{Argument, ArgumentParser, ConfigError};
    ///
    /// let mut a: i32 = 0;
    /// let mut b: i32 = 0;
    /// let mut a_arg = Argument::option(&mut a).flag('a');
    /// let mut b_arg = Argument::option(&mut b).flag('a');
    ///
    /// let mut parser = ArgumentParser::new("program");
    /// parser.add(&mut a_arg).unwrap();
    /// assert_eq!(
    ///     parser.add(&mut b_arg),
    ///     Err(ConfigError::Conflicting("-a".to_string()))
    /// );
    /// ```
    pub fn add(&mut self, argument: &'r mut Argument<'a>) -> Result<(), ConfigError> {
        validate(argument)?;

        let sequence = if argument.is_positional() {
            &mut self.positionals
        } else {
            &mut self.options
        };
        check_conflicts(sequence, argument)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered {argument:?}.");
        }

        sequence.push(argument);
        Ok(())
    }

    /// Register each argument in turn.
    ///
    /// Stops at the first rejected argument, returning its error.
    /// The arguments registered before it remain registered.
    pub fn add_all(
        &mut self,
        arguments: impl IntoIterator<Item = &'r mut Argument<'a>>,
    ) -> Result<(), ConfigError> {
        for argument in arguments {
            self.add(argument)?;
        }

        Ok(())
    }

    /// Parse the tokens into the registered arguments, without printing anything.
    ///
    /// The tokens exclude the program name.
    /// On failure, the `usize` is the character offset of the token at fault, when the tokens are concatenated.
    ///
    /// ### Example
    /// ```
    /// use argwise::{Argument, ArgumentParser, Outcome, ParseError};
    ///
    /// let mut x: i32 = 0;
    /// let mut x_arg = Argument::option(&mut x).flag('x');
    ///
    /// let mut parser = ArgumentParser::new("program");
    /// parser.add(&mut x_arg).unwrap();
    /// assert_eq!(
    ///     parser.try_parse_tokens(&["-y"]),
    ///     Err((0, ParseError::Unknown("-y".to_string())))
    /// );
    /// ```
    pub fn try_parse_tokens(self, tokens: &[&str]) -> Result<Outcome, (usize, ParseError)> {
        Parser::new(self.options, self.positionals).consume(tokens)
    }

    /// Parse the tokens into the registered arguments, printing the help message or error.
    ///
    /// The tokens exclude the program name.
    /// Returns the exit code the program should end with when it should not continue:
    /// `0` after printing help, or `1` after printing an error.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        self.build_with_interface(Rc::new(ConsoleInterface::default()))
            .parse_tokens(tokens)
    }

    /// Parse the program's command line arguments into the registered arguments.
    /// If help is requested or an error is encountered, prints and then exits (via [`std::process::exit`]).
    pub fn parse(self) {
        self.build_with_interface(Rc::new(ConsoleInterface::default()))
            .parse();
    }

    fn build_with_interface(self, user_interface: Rc<dyn UserInterface>) -> GeneralParser<'r, 'a> {
        let printer = Printer::terminal(
            self.description,
            self.epilog,
            self.options.iter().map(|a| ArgumentDoc::from(&**a)).collect(),
            self.positionals.iter().map(|a| ArgumentDoc::from(&**a)).collect(),
        );

        GeneralParser::new(
            self.program,
            Parser::new(self.options, self.positionals),
            printer,
            user_interface,
        )
    }
}

fn validate(argument: &Argument<'_>) -> Result<(), ConfigError> {
    if argument.flag_value().is_none() && argument.name_value().is_none() {
        return Err(ConfigError::MissingIdentity);
    }

    let identity = argument.identity();
    let action = argument.action();
    let value_type = argument.value_type();
    let unsupported = || ConfigError::UnsupportedAction {
        identity: identity.clone(),
        action,
        value_type,
    };

    match action {
        Action::Store => {
            if value_type == ValueType::Bool {
                return Err(unsupported());
            }

            if let Some(choices) = argument.choices_value() {
                if choices.value_type() != value_type {
                    return Err(ConfigError::InvalidType(identity));
                }
            }
        }
        Action::Count | Action::StoreTrue | Action::StoreFalse | Action::BooleanToggle => {
            let required_type = if action == Action::Count {
                ValueType::Int32
            } else {
                ValueType::Bool
            };

            if value_type != required_type {
                return Err(unsupported());
            }

            if argument.choices_value().is_some() {
                return Err(ConfigError::UnsupportedChoices(identity));
            }

            if argument.is_positional() {
                return Err(ConfigError::PositionalAction(identity));
            }

            if argument.is_required() {
                return Err(ConfigError::UnsupportedRequire(identity));
            }
        }
    }

    if argument.is_positional() {
        if argument.flag_value().is_some() {
            return Err(ConfigError::PositionalFlag(identity));
        }
    } else if let Some(name) = argument.name_value() {
        // Nothing but the prefix, ex: `--` or `-x`.
        if name.chars().count() == 2 {
            return Err(ConfigError::BarePrefix(name.to_string()));
        }
    }

    if argument.flag_value() == Some(HELP_SHORT) {
        return Err(ConfigError::Conflicting(format!("{OPTION_PREFIX}{HELP_SHORT}")));
    }

    if argument.name_value() == Some(HELP_NAME) {
        return Err(ConfigError::Conflicting(HELP_NAME.to_string()));
    }

    Ok(())
}

fn check_conflicts(
    registered: &[&mut Argument<'_>],
    argument: &Argument<'_>,
) -> Result<(), ConfigError> {
    for other in registered {
        if let Some(flag) = argument.flag_value() {
            if other.flag_value() == Some(flag) {
                return Err(ConfigError::Conflicting(format!("{OPTION_PREFIX}{flag}")));
            }
        }

        if let Some(name) = argument.name_value() {
            if other.name_value() == Some(name) {
                return Err(ConfigError::Conflicting(name.to_string()));
            }
        }
    }

    Ok(())
}
