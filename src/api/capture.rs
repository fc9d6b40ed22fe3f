use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

use crate::api::storage::{Choices, Storage};
use crate::constant::FLOAT_EPSILON;
use crate::model::ValueType;

/// Failure to coerce a raw token into an argument's storage.
///
/// Lifted into a [`ParseError`](crate::ParseError) by the parser, which knows the argument at fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidCapture {
    #[error("cannot convert '{token}' to {value_type}.")]
    InvalidConversion {
        token: String,
        value_type: ValueType,
    },
    #[error("'{token}' exceeds the range of i32.")]
    OutOfRange { token: String },
    #[error("'{token}' is not a valid choice.")]
    InvalidChoice { token: String },
}

impl<'a> Storage<'a> {
    /// Coerce `token` to the storage type, validate it against `choices`, and write it.
    ///
    /// Nothing is written when any step fails.
    pub(crate) fn capture(
        &mut self,
        token: &str,
        choices: Option<&Choices>,
    ) -> Result<(), InvalidCapture> {
        let admitted = match self {
            Storage::Int(variable) => {
                let value = parse_int(token)?;
                let admitted = choices.map_or(true, |c| c.admits_int(value));
                if admitted {
                    **variable = value;
                }
                admitted
            }
            Storage::Float(variable) => {
                let value = parse_float(token)?;
                let admitted = choices.map_or(true, |c| c.admits_float(value));
                if admitted {
                    **variable = value;
                }
                admitted
            }
            Storage::Str(variable) => {
                let admitted = choices.map_or(true, |c| c.admits_str(token));
                if admitted {
                    **variable = token.to_string();
                }
                admitted
            }
            Storage::Bool(_) => {
                unreachable!("internal error - must not capture a token into bool storage");
            }
        };

        if admitted {
            Ok(())
        } else {
            Err(InvalidCapture::InvalidChoice {
                token: token.to_string(),
            })
        }
    }

    pub(crate) fn assign_bool(&mut self, value: bool) {
        match self {
            Storage::Bool(variable) => **variable = value,
            _ => unreachable!("internal error - boolean actions must have bool storage"),
        }
    }

    pub(crate) fn assign_count(&mut self, count: u32) {
        match self {
            Storage::Int(variable) => **variable = i32::try_from(count).unwrap_or(i32::MAX),
            _ => unreachable!("internal error - the count action must have i32 storage"),
        }
    }
}

impl Choices {
    fn admits_int(&self, value: i32) -> bool {
        match self {
            Choices::Int(choices) => choices.contains(&value),
            _ => unreachable!("internal error - choices must match the storage type"),
        }
    }

    fn admits_float(&self, value: f32) -> bool {
        match self {
            Choices::Float(choices) => choices
                .iter()
                .any(|c| (f64::from(value) - f64::from(*c)).abs() <= FLOAT_EPSILON),
            _ => unreachable!("internal error - choices must match the storage type"),
        }
    }

    fn admits_str(&self, value: &str) -> bool {
        match self {
            Choices::Str(choices) => choices.iter().any(|c| c == value),
            _ => unreachable!("internal error - choices must match the storage type"),
        }
    }
}

/// Parse a signed integer whose base is given by its prefix: `0x` for hex, a leading `0` for octal.
/// Leading whitespace is skipped.
pub(crate) fn parse_int(token: &str) -> Result<i32, InvalidCapture> {
    let invalid = || InvalidCapture::InvalidConversion {
        token: token.to_string(),
        value_type: ValueType::Int32,
    };
    let out_of_range = || InvalidCapture::OutOfRange {
        token: token.to_string(),
    };

    let trimmed = token.trim_start();
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // `from_str_radix` would otherwise accept a second sign.
    if digits.starts_with(|c| c == '+' || c == '-') {
        return Err(invalid());
    }

    let magnitude = i64::from_str_radix(digits, radix).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => invalid(),
    })?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| out_of_range())
}

pub(crate) fn parse_float(token: &str) -> Result<f32, InvalidCapture> {
    f32::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        value_type: ValueType::Float32,
    })
}
