/// The shape of a single command line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `-h` or `--help`.
    Help,
    /// `-F`: exactly one character after the prefix.
    Flag(char),
    /// Any other prefixed token: a long name, a negated toggle, or a cluster of flags.
    Long(&'t str),
    /// A token without the prefix.
    Value(&'t str),
}

/// What to look for amongst the registered arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup<'t> {
    /// The argument with this flag.
    Flag(char),
    /// The argument with exactly this name.
    Name(&'t str),
    /// The argument whose name is `--` followed by this suffix.
    Suffix(&'t str),
    /// The argument at this registration position.
    Index(usize),
}
