use crate::constant::*;

/// The kind of value an [`Argument`](crate::Argument) stores.
///
/// Derived from the argument's [`Storage`](crate::Storage), so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// A 32-bit signed integer (`i32`).
    Int32,
    /// A 32-bit float (`f32`).
    Float32,
    /// A boolean (`bool`).
    Bool,
    /// A string (`String`).
    String,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Int32 => "i32",
            ValueType::Float32 => "f32",
            ValueType::Bool => "bool",
            ValueType::String => "String",
        };
        write!(f, "{name}")
    }
}

/// The effect a successful match has on an argument's storage.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#action>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Coerce the value token and store it (any non-`bool` type).
    Store,
    /// Store `true` when present (`bool` only).
    StoreTrue,
    /// Store `false` when present (`bool` only).
    StoreFalse,
    /// Store the number of occurrences once parsing completes (`i32` only).
    Count,
    /// Store `true` for `--name` and `false` for `--no-name` (`bool` only).
    BooleanToggle,
}

impl Action {
    pub(crate) fn is_boolean(&self) -> bool {
        matches!(
            self,
            Action::StoreTrue | Action::StoreFalse | Action::BooleanToggle
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The flag and/or name by which an argument is known.
///
/// Displays as the name when present, otherwise as `-FLAG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    flag: Option<char>,
    name: Option<String>,
}

impl Identity {
    pub(crate) fn new(flag: Option<char>, name: Option<String>) -> Self {
        Self { flag, name }
    }

    /// The single character flag, if any.
    pub fn flag(&self) -> Option<char> {
        self.flag
    }

    /// The multi-character name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.name, &self.flag) {
            (Some(name), _) => write!(f, "{name}"),
            (None, Some(flag)) => write!(f, "{OPTION_PREFIX}{flag}"),
            (None, None) => write!(f, "<unnamed>"),
        }
    }
}
