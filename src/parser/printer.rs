use terminal_size::{terminal_size, Width};

use crate::api::Argument;
use crate::constant::*;
use crate::model::Action;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, TotalWidth};

/// The documentation view of an argument.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ArgumentDoc {
    flag: Option<char>,
    name: Option<String>,
    action: Action,
    required: bool,
    help: Option<String>,
    choices: Vec<String>,
}

impl From<&Argument<'_>> for ArgumentDoc {
    fn from(value: &Argument<'_>) -> Self {
        Self {
            flag: value.flag_value(),
            name: value.name_value().map(str::to_string),
            action: value.action(),
            required: value.is_required(),
            help: value.help_value().map(str::to_string),
            choices: value
                .choices_value()
                .map(|choices| choices.descriptions())
                .unwrap_or_default(),
        }
    }
}

impl ArgumentDoc {
    fn name_or_flag(&self) -> String {
        match (&self.name, &self.flag) {
            (Some(name), _) => name.clone(),
            (None, Some(flag)) => format!("{OPTION_PREFIX}{flag}"),
            (None, None) => unreachable!("internal error - registered arguments must have an identity"),
        }
    }

    fn negated_name(&self) -> Option<String> {
        if self.action != Action::BooleanToggle {
            return None;
        }

        self.name
            .as_ref()
            .and_then(|name| name.strip_prefix(NAME_PREFIX))
            .map(|suffix| format!("{NEGATED_PREFIX}{suffix}"))
    }

    /// The value placeholder, ex: `--max-depth` shows as `MAX_DEPTH`.
    fn metavar(&self) -> Option<String> {
        if self.action != Action::Store || !self.choices.is_empty() {
            return None;
        }

        match (&self.name, &self.flag) {
            (Some(name), _) => Some(
                name.trim_start_matches(OPTION_PREFIX)
                    .to_ascii_uppercase()
                    .replace(OPTION_PREFIX, "_"),
            ),
            (None, Some(flag)) => Some(flag.to_ascii_uppercase().to_string()),
            (None, None) => None,
        }
    }

    fn usage(&self) -> String {
        let mut grammar = match &self.flag {
            Some(flag) => format!("{OPTION_PREFIX}{flag}"),
            None => self.name_or_flag(),
        };

        if let Some(negated) = self.negated_name() {
            if let (Some(name), Some(_)) = (&self.name, &self.flag) {
                grammar.push_str(&format!(" | {name}"));
            }

            grammar.push_str(&format!(" | {negated}"));
        }

        if let Some(metavar) = self.metavar() {
            grammar.push_str(&format!(" {metavar}"));
        }

        if !self.choices.is_empty() {
            grammar.push_str(&format!(" {{{}}}", self.choices.join(",")));
        }

        if self.required {
            grammar
        } else {
            format!("[{grammar}]")
        }
    }

    fn option_flags(&self) -> String {
        match (&self.flag, &self.name) {
            (Some(flag), Some(name)) => format!("{OPTION_PREFIX}{flag}, {name}"),
            (Some(flag), None) => format!("{OPTION_PREFIX}{flag}"),
            (None, Some(name)) => name.clone(),
            (None, None) => unreachable!("internal error - registered arguments must have an identity"),
        }
    }

    fn description(&self) -> String {
        let help = self.help.clone().unwrap_or_default();

        if self.choices.is_empty() {
            help
        } else if help.is_empty() {
            format!("(choices: {})", self.choices.join(","))
        } else {
            format!("{help} (choices: {})", self.choices.join(","))
        }
    }
}

pub(crate) struct Printer {
    description: Option<String>,
    epilog: Option<String>,
    options: Vec<ArgumentDoc>,
    positionals: Vec<ArgumentDoc>,
    terminal_width: Option<usize>,
}

const MAIN_INDENT: usize = 1;
const PADDING_WIDTH: usize = 3;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, None, Vec::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(
        description: Option<String>,
        epilog: Option<String>,
        options: Vec<ArgumentDoc>,
        positionals: Vec<ArgumentDoc>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(description, epilog, options, positionals, terminal_width)
    }

    pub(crate) fn new(
        description: Option<String>,
        epilog: Option<String>,
        options: Vec<ArgumentDoc>,
        positionals: Vec<ArgumentDoc>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            description,
            epilog,
            options,
            positionals,
            terminal_width,
        }
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let help_flags = format!("{OPTION_PREFIX}{HELP_SHORT}, {HELP_NAME}");
        let mut summary = vec![format!("[{OPTION_PREFIX}{HELP_SHORT}]")];
        summary.extend(self.options.iter().map(ArgumentDoc::usage));
        summary.extend(self.positionals.iter().map(ArgumentDoc::name_or_flag));

        let positional_rows: Vec<(String, String)> = self
            .positionals
            .iter()
            .map(|p| (p.name_or_flag(), p.description()))
            .collect();
        let mut option_rows = vec![(help_flags, HELP_MESSAGE.to_string())];
        option_rows.extend(
            self.options
                .iter()
                .map(|o| (o.option_flags(), o.description())),
        );

        let rows = positional_rows.iter().chain(option_rows.iter());
        let left_column_width = rows
            .clone()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let middle_column_width = rows
            .map(|(_, middle)| middle.chars().count())
            .max()
            .unwrap_or_default();

        let column_renderer = match &self.terminal_width {
            Some(total_width) => ColumnRenderer::guided(
                MAIN_INDENT,
                PADDING_WIDTH,
                LeftWidth::new(left_column_width),
                MiddleWidth::new(middle_column_width),
                TotalWidth(*total_width),
            ),
            None => ColumnRenderer::new(
                MAIN_INDENT,
                PADDING_WIDTH,
                LeftWidth::new(left_column_width),
                MiddleWidth::new(middle_column_width),
            ),
        };

        user_interface.print(format!(
            "usage: {p} {s}",
            p = program.into(),
            s = summary.join(" ")
        ));

        if let Some(description) = &self.description {
            user_interface.print("".to_string());
            user_interface.print(description.clone());
        }

        if !positional_rows.is_empty() {
            user_interface.print("".to_string());
            user_interface.print("positional arguments:".to_string());

            for (left, middle) in &positional_rows {
                for line in column_renderer.render(left, middle) {
                    user_interface.print(line);
                }
            }
        }

        user_interface.print("".to_string());
        user_interface.print("options:".to_string());

        for (left, middle) in &option_rows {
            for line in column_renderer.render(left, middle) {
                user_interface.print(line);
            }
        }

        if let Some(epilog) = &self.epilog {
            user_interface.print("".to_string());
            user_interface.print(epilog.clone());
        }
    }
}

/// Points at the offending character offset beneath the (space separated) tokens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens_length = 0;
        let mut separators = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            tokens_length += token.chars().count();

            // Each separating space ahead of the offset shifts the caret.
            if i + 1 < self.tokens.len() && tokens_length <= self.offset {
                separators += 1;
            }
        }

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            projection = self.tokens.join(" "),
            width = std::cmp::min(self.offset, tokens_length.saturating_sub(1)) + separators
        )
    }
}
