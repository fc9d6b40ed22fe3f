use std::env;
use std::rc::Rc;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::{ErrorContext, Printer};

/// Runs a parse, reporting help and errors through the user interface.
pub(crate) struct GeneralParser<'r, 'a> {
    program: String,
    parser: Parser<'r, 'a>,
    printer: Printer,
    user_interface: Rc<dyn UserInterface>,
}

impl<'r, 'a> GeneralParser<'r, 'a> {
    pub(crate) fn new(
        program: String,
        parser: Parser<'r, 'a>,
        printer: Printer,
        user_interface: Rc<dyn UserInterface>,
    ) -> Self {
        Self {
            program,
            parser,
            printer,
            user_interface,
        }
    }

    /// Parse the tokens, mapping help to exit code `0` and errors to exit code `1`.
    pub(crate) fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let GeneralParser {
            program,
            parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Outcome::Complete) => Ok(()),
            Ok(Outcome::Help) => {
                printer.print_help(program, user_interface.as_ref());
                Err(0)
            }
            Err((offset, parse_error)) => {
                user_interface.print_error(parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }

    pub(crate) fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}
