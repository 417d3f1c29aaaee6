//! Parsing of user-entered text into generator inputs.
//!
//! Every parser trims surrounding whitespace and rejects empty input before
//! looking at the value itself.

use algotrace_generators::greedy::Activity;
use thiserror::Error;

/// Smallest accepted search target.
pub const MIN_TARGET: i64 = -999;

/// Largest accepted search target.
pub const MAX_TARGET: i64 = 999;

/// Default upper bound for [`parse_fibonacci_n`].
pub const DEFAULT_MAX_FIBONACCI_N: u32 = 15;

/// Errors that can occur when parsing user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("value cannot be empty")]
    Empty,

    #[error("`{token}` is not a valid integer")]
    NotAnInteger { token: String },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("activity start must be non-negative, got {start}")]
    NegativeStart { start: i64 },

    #[error("activity finish ({finish}) must be after its start ({start})")]
    FinishNotAfterStart { start: i64, finish: i64 },
}

/// Parses a search target within `MIN_TARGET..=MAX_TARGET`.
///
/// # Errors
///
/// Returns an error if `text` is empty, not an integer, or out of range.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let value = parse_integer(text)?;
    check_range(value, MIN_TARGET, MAX_TARGET)
}

/// Parses a list of integers separated by commas and/or whitespace.
///
/// # Errors
///
/// Returns an error if `text` holds no values or any token is not an integer.
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_integer)
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Parses a Fibonacci argument within `0..=max`.
///
/// # Errors
///
/// Returns an error if `text` is empty, not an integer, or out of range.
pub fn parse_fibonacci_n(text: &str, max: u32) -> Result<u32, InputError> {
    let value = parse_integer(text)?;
    let value = check_range(value, 0, i64::from(max))?;

    u32::try_from(value).map_err(|_| InputError::OutOfRange {
        value,
        min: 0,
        max: i64::from(max),
    })
}

/// Builds an activity from user-entered start and finish times.
///
/// # Errors
///
/// Returns an error if either time is not an integer, `start` is negative,
/// or `finish` is not after `start`.
pub fn parse_activity(
    id: impl Into<String>,
    name: Option<String>,
    start: &str,
    finish: &str,
) -> Result<Activity, InputError> {
    let start = parse_integer(start)?;
    let finish = parse_integer(finish)?;

    if start < 0 {
        return Err(InputError::NegativeStart { start });
    }
    if finish <= start {
        return Err(InputError::FinishNotAfterStart { start, finish });
    }

    Ok(Activity {
        id: id.into(),
        name,
        start,
        finish,
    })
}

fn parse_integer(text: &str) -> Result<i64, InputError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::Empty);
    }

    token.parse().map_err(|_| {
        log::trace!("rejected non-integer input {token:?}");
        InputError::NotAnInteger {
            token: token.to_owned(),
        }
    })
}

fn check_range(value: i64, min: i64, max: i64) -> Result<i64, InputError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { value, min, max })
    }
}
