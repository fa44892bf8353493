//! Error handling: typed failures, `?` propagation, and graceful fallbacks.
//!
//! User input is parsed into [`InputError`] values that name exactly what was
//! wrong; arithmetic that can fail returns [`BasicsError::DivisionByZero`]
//! instead of panicking; a missing or corrupt file falls back to defaults
//! after a warning.

use crate::{BasicsError, BasicsResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// A value typed by the player could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field}: {input:?} is not a whole number")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("command {command:?} needs {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },
}

/// Parses a non-negative amount (gold, damage, potion count).
pub fn parse_amount(input: &str) -> Result<u32, InputError> {
    parse_bounded("amount", input, 0, i64::from(u32::MAX)).map(|v| v as u32)
}

/// Parses a starting health value in `1..=max`.
pub fn parse_health(input: &str, max: u32) -> Result<u32, InputError> {
    parse_bounded("health", input, 1, i64::from(max)).map(|v| v as u32)
}

fn parse_bounded(field: &'static str, input: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;
    if !(min..=max).contains(&value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Integer division that reports a zero divisor instead of panicking.
pub fn checked_divide(dividend: i64, divisor: i64) -> BasicsResult<i64> {
    if divisor == 0 {
        return Err(BasicsError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(BasicsError::Overflow)
}

/// Splits gold evenly across a party, returning `(share, leftover)`.
pub fn split_loot(gold: u32, party_size: u32) -> BasicsResult<(u32, u32)> {
    let share = checked_divide(i64::from(gold), i64::from(party_size))? as u32;
    Ok((share, gold - share * party_size))
}

/// A parsed line of the text-adventure prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Attack { target: String },
    Heal { amount: u32 },
    Take { item: String },
    Inventory,
    Quit,
}

/// Parses a prompt line such as `attack goblin` or `heal 20`.
///
/// Errors propagate with `?` from the argument parsers.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or(InputError::Empty { field: "command" })?
        .to_lowercase();
    let rest: Vec<&str> = words.collect();
    let missing = |expected: &'static str| InputError::MissingArgument {
        command: verb.clone(),
        expected,
    };
    match verb.as_str() {
        "attack" | "hit" => {
            if rest.is_empty() {
                return Err(missing("a target"));
            }
            Ok(Command::Attack {
                target: rest.join(" "),
            })
        }
        "heal" => {
            let amount = rest.first().ok_or_else(|| missing("an amount"))?;
            Ok(Command::Heal {
                amount: parse_amount(amount)?,
            })
        }
        "take" | "get" => {
            if rest.is_empty() {
                return Err(missing("an item"));
            }
            Ok(Command::Take {
                item: rest.join(" "),
            })
        }
        "inventory" | "inv" | "i" => Ok(Command::Inventory),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(InputError::UnknownCommand(verb.clone())),
    }
}

/// Loads a JSON file, falling back to `T::default()` when it is missing or
/// unreadable. The example keeps running either way.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    load_with_fallback(path, try_load)
}

/// Runs `load`, logging a warning and returning `T::default()` if it fails.
/// A missing file and a corrupt one get different messages.
pub fn load_with_fallback<T, F>(path: &Path, load: F) -> T
where
    T: Default,
    F: FnOnce(&Path) -> BasicsResult<T>,
{
    match load(path) {
        Ok(value) => value,
        Err(BasicsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "File not found, using defaults");
            T::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load file, using defaults");
            T::default()
        }
    }
}

fn try_load<T: DeserializeOwned>(path: &Path) -> BasicsResult<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_trims() {
        assert_eq!(parse_amount("  42 "), Ok(42));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert_eq!(
            parse_amount("-3"),
            Err(InputError::OutOfRange {
                field: "amount",
                value: -3,
                min: 0,
                max: i64::from(u32::MAX),
            })
        );
    }

    #[test]
    fn parse_health_names_the_failure() {
        let err = parse_health("lots", 100).unwrap_err();
        assert_eq!(err.to_string(), r#"health: "lots" is not a whole number"#);
    }

    #[test]
    fn parse_health_bounds() {
        assert!(parse_health("0", 100).is_err());
        assert_eq!(parse_health("100", 100), Ok(100));
        assert!(parse_health("101", 100).is_err());
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert!(matches!(checked_divide(10, 0), Err(BasicsError::DivisionByZero)));
        assert_eq!(checked_divide(10, 3).unwrap(), 3);
    }

    #[test]
    fn divide_overflow_is_not_division_by_zero() {
        assert!(matches!(checked_divide(i64::MIN, -1), Err(BasicsError::Overflow)));
        assert_eq!(checked_divide(i64::MIN, 1).unwrap(), i64::MIN);
    }

    #[test]
    fn split_loot_leftover() {
        assert_eq!(split_loot(100, 3).unwrap(), (33, 1));
        assert!(split_loot(100, 0).is_err());
    }
}
