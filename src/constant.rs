pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_NAME: &str = "--help";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const NAME_PREFIX: &str = "--";
pub(crate) const NEGATED_PREFIX: &str = "--no-";

// Absorbs the imprecision between a textual float and its declared choice.
// Compared in f64 so the bounds do not round outward.
pub(crate) const FLOAT_EPSILON: f64 = 1e-5;
