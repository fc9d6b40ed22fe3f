use crate::api::Argument;
use crate::constant::*;
use crate::matcher::model::*;
use crate::model::Action;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) fn classify(token: &str) -> Token<'_> {
    if token == HELP_NAME {
        return Token::Help;
    }

    let mut chars = token.chars();
    let token_class = match (chars.next(), chars.next(), chars.next()) {
        (Some(OPTION_PREFIX), Some(HELP_SHORT), None) => Token::Help,
        (Some(OPTION_PREFIX), Some(flag), None) => Token::Flag(flag),
        (Some(OPTION_PREFIX), _, _) => Token::Long(token),
        _ => Token::Value(token),
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Classified '{token}' as {token_class:?}.");
    }

    token_class
}

/// Find the position of the argument matching `lookup`.
pub(crate) fn find(arguments: &[&mut Argument<'_>], lookup: Lookup<'_>) -> Option<usize> {
    match lookup {
        Lookup::Flag(flag) => arguments.iter().position(|a| a.flag_value() == Some(flag)),
        Lookup::Name(name) => arguments.iter().position(|a| a.name_value() == Some(name)),
        Lookup::Suffix(suffix) => arguments.iter().position(|a| {
            a.name_value()
                .and_then(|name| name.strip_prefix(NAME_PREFIX))
                == Some(suffix)
        }),
        Lookup::Index(index) => (index < arguments.len()).then_some(index),
    }
}

/// Find the option named by a prefixed token, along with whether it was negated.
///
/// `--no-NAME` resolves to the toggle `--NAME` when one exists.
/// Otherwise the token is looked up as a name verbatim.
pub(crate) fn find_long(options: &[&mut Argument<'_>], token: &str) -> Option<(usize, bool)> {
    if let Some(suffix) = token.strip_prefix(NEGATED_PREFIX) {
        if let Some(index) = find(options, Lookup::Suffix(suffix)) {
            if options[index].action() == Action::BooleanToggle {
                return Some((index, true));
            }
        }
    }

    find(options, Lookup::Name(token)).map(|index| (index, false))
}

/// The flags grouped into a single prefixed token (ex: `-abc` yields `a`, `b`, `c`).
pub(crate) fn cluster(token: &str) -> std::str::Chars<'_> {
    token.strip_prefix(OPTION_PREFIX).unwrap_or(token).chars()
}
