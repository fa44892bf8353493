//! Error types for the view models.

use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;
pub type UiResult<T> = Result<T, UiError>;

/// Arithmetic failures in the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("result is too large to display")]
    Overflow,
}

/// Errors raised by widget models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("expected {expected} columns, got {got}")]
    ColumnCount { expected: usize, got: usize },

    #[error("row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("no column named {0:?}")]
    UnknownColumn(String),

    #[error("no tree node with id {0}")]
    UnknownNode(usize),

    #[error("point ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i64, y: i64 },

    #[error("no menu action {0:?}")]
    UnknownAction(String),

    #[error("menu action {0:?} is disabled")]
    ActionDisabled(String),

    #[error("menu path {0:?} must look like \"Menu/Item\"")]
    InvalidMenuPath(String),

    #[error("no field named {0:?}")]
    UnknownField(String),

    #[error("background worker failed: {0}")]
    Worker(String),

    #[error(transparent)]
    Calc(#[from] CalcError),
}
