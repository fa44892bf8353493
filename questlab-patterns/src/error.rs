//! Error types for the pattern demos.

use thiserror::Error;

/// Result type for pattern demos.
pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// The factory has no recipe for this name.
    #[error("unknown enemy {name:?}{}", suggestion(.suggestions))]
    UnknownEnemy {
        name: String,
        suggestions: Vec<String>,
    },

    /// A shape dimension was zero, negative or not finite.
    #[error("{shape}: invalid {dimension} {value}")]
    InvalidDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    },

    /// The three sides cannot close into a triangle.
    #[error("sides {a}, {b}, {c} do not form a triangle")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    /// Dice notation such as `2d6` could not be parsed.
    #[error("invalid dice notation {0:?}")]
    InvalidDice(String),

    /// A transaction tried to spend more than the wallet holds.
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    /// A guarded action was called while its precondition did not hold.
    #[error("{0}")]
    Precondition(String),
}

fn suggestion(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}
