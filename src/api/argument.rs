use crate::api::capture::InvalidCapture;
use crate::api::storage::{Choices, Storage};
use crate::constant::*;
use crate::model::{Action, Identity, ValueType};

/// A declared command line argument, bound to a caller-owned variable.
///
/// The argument is *positional* when it has a name that does not start with `-`; otherwise it is an *option*.
/// Options are matched by `-FLAG` and/or `--NAME`; positionals are matched in registration order.
///
/// The argument borrows its variable mutably, so the variable may only be read once the argument is no longer used.
/// Read [`Argument::occurrences`] before inspecting the variable.
///
/// ### Example
/// ```
/// use argwise::{Argument, ArgumentParser};
///
/// let mut verbose: i32 = 0;
/// let mut verbose_arg = Argument::count(&mut verbose).flag('v');
///
/// let mut parser = ArgumentParser::new("program");
/// parser.add(&mut verbose_arg).unwrap();
/// parser.try_parse_tokens(&["-vvv"]).unwrap();
///
/// assert_eq!(verbose_arg.occurrences(), 3);
/// assert_eq!(verbose, 3);
/// ```
pub struct Argument<'a> {
    storage: Storage<'a>,
    action: Action,
    flag: Option<char>,
    name: Option<String>,
    help: Option<String>,
    required: bool,
    choices: Option<Choices>,
    count: u32,
}

impl<'a> Argument<'a> {
    /// Create an argument with the given action and no identity.
    /// Supply the identity via [`Argument::flag`] and/or [`Argument::name`].
    pub fn new(storage: impl Into<Storage<'a>>, action: Action) -> Self {
        Self {
            storage: storage.into(),
            action,
            flag: None,
            name: None,
            help: None,
            required: false,
            choices: None,
            count: 0,
        }
    }

    /// Create a required positional argument that stores its token.
    ///
    /// ### Example
    /// ```
    /// use argwise::Argument;
    ///
    /// let mut item: String = String::default();
    /// let argument = Argument::positional(&mut item, "item").help("The item to process.");
    /// ```
    pub fn positional(storage: impl Into<Storage<'a>>, name: impl Into<String>) -> Self {
        Self::new(storage, Action::Store).name(name).required()
    }

    /// Create an optional argument that stores the token following `-FLAG`/`--NAME`.
    pub fn option(storage: impl Into<Storage<'a>>) -> Self {
        Self::new(storage, Action::Store)
    }

    /// Create an option which records the number of times it occurs.
    pub fn count(storage: &'a mut i32) -> Self {
        Self::new(storage, Action::Count)
    }

    /// Create an option which stores `true` via `--NAME` and `false` via `--no-NAME`.
    pub fn toggle(storage: &'a mut bool) -> Self {
        Self::new(storage, Action::BooleanToggle)
    }

    /// Create an option which stores `true` when present.
    pub fn flag_true(storage: &'a mut bool) -> Self {
        Self::new(storage, Action::StoreTrue)
    }

    /// Create an option which stores `false` when present.
    pub fn flag_false(storage: &'a mut bool) -> Self {
        Self::new(storage, Action::StoreFalse)
    }

    /// Set the single character flag, matched as `-FLAG`.
    pub fn flag(mut self, flag: char) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Set the name.
    /// Option names include their prefix (ex: `--verbose`); positional names do not (ex: `item`).
    /// An empty name is treated as no name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Document the argument for the help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Require the argument to occur at least once.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the stored value to a closed set.
    ///
    /// ### Example
    /// ```
    /// use argwise::Argument;
    ///
    /// let mut colour: String = String::default();
    /// let argument = Argument::option(&mut colour)
    ///     .name("--colour")
    ///     .choices(["red", "green", "blue"]);
    /// ```
    pub fn choices(mut self, choices: impl Into<Choices>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    /// The number of times the argument matched during parsing.
    pub fn occurrences(&self) -> u32 {
        self.count
    }

    /// The flag and/or name of the argument.
    pub fn identity(&self) -> Identity {
        Identity::new(self.flag, self.name.clone())
    }

    /// The value type of the bound variable.
    pub fn value_type(&self) -> ValueType {
        self.storage.value_type()
    }

    /// The action taken when the argument matches.
    pub fn action(&self) -> Action {
        self.action
    }

    pub(crate) fn flag_value(&self) -> Option<char> {
        self.flag
    }

    pub(crate) fn name_value(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn help_value(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn choices_value(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }

    pub(crate) fn is_positional(&self) -> bool {
        match &self.name {
            Some(name) => !name.starts_with(OPTION_PREFIX),
            None => false,
        }
    }

    pub(crate) fn matched(&mut self) {
        self.count += 1;
    }

    pub(crate) fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let Argument {
            storage, choices, ..
        } = self;
        storage.capture(token, choices.as_ref())
    }

    pub(crate) fn assign_bool(&mut self, value: bool) {
        self.storage.assign_bool(value);
    }

    pub(crate) fn commit_count(&mut self) {
        self.storage.assign_count(self.count);
    }
}

impl<'a> std::fmt::Debug for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = if self.is_positional() { "Arg" } else { "Opt" };
        let required = if self.required { ", required" } else { "" };

        write!(
            f,
            "{class}[{t}, {a}, {i}{required}, count={c}]",
            t = self.value_type(),
            a = self.action,
            i = self.identity(),
            c = self.count,
        )
    }
}
