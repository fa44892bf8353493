//! A four-function calculator driven by key presses.
//!
//! The display always shows the operand being typed (or the last result).
//! The left operand and the chosen operator wait in `accumulator` and
//! `pending` until the next operator or `=`.
//!
//! A failed evaluation such as `10 ÷ 0 =` returns an error and changes
//! nothing, so the user can correct the operand and press `=` again.

use crate::{CalcError, CalcResult, Dialog, View};
use std::fmt;
use tracing::{debug, warn};

/// Longest operand the display accepts.
const MAX_DIGITS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '−',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div if rhs == 0.0 => return Err(CalcError::DivisionByZero),
            Self::Div => lhs / rhs,
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One button on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Op),
    Equals,
    /// `C`: forget everything.
    Clear,
    /// `CE`: clear only the operand being typed.
    ClearEntry,
    Backspace,
    /// `±`
    Negate,
}

impl Key {
    /// Maps a typed character to a key. Both ASCII (`*`, `/`, `-`) and
    /// keypad symbols (`×`, `÷`, `−`) are accepted.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' | ',' => Self::Point,
            '+' => Self::Operator(Op::Add),
            '-' | '−' => Self::Operator(Op::Sub),
            '*' | 'x' | '×' => Self::Operator(Op::Mul),
            '/' | '÷' => Self::Operator(Op::Div),
            '=' | '\n' => Self::Equals,
            'C' | 'c' => Self::Clear,
            'E' | 'e' => Self::ClearEntry,
            '<' | '\u{8}' => Self::Backspace,
            '±' | '~' => Self::Negate,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Op>,
    /// The next digit starts a new operand instead of extending the display.
    fresh_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            fresh_entry: true,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    #[must_use]
    pub fn pending(&self) -> Option<Op> {
        self.pending
    }

    /// The displayed number. The display only ever holds valid numbers.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.digit(d),
            Key::Point => self.point(),
            Key::Operator(op) => self.operator(op)?,
            Key::Equals => self.equals()?,
            Key::Clear => *self = Self::new(),
            Key::ClearEntry => {
                self.display = "0".to_string();
                self.fresh_entry = true;
            }
            Key::Backspace => self.backspace(),
            Key::Negate => self.negate(),
        }
        Ok(())
    }

    /// Like [`press`](Self::press), but turns an error into the dialog the
    /// window would pop up.
    pub fn click(&mut self, key: Key) -> Option<Dialog> {
        self.press(key).err().map(|e| {
            warn!(error = %e, display = %self.display, "Calculation failed");
            Dialog::error("Calculator", e.to_string())
        })
    }

    /// Types a whole sequence such as `"12+3="`, stopping at the first
    /// error. Unknown characters and spaces are skipped.
    pub fn type_keys(&mut self, keys: &str) -> CalcResult<()> {
        for key in keys.chars().filter_map(Key::from_char) {
            self.press(key)?;
        }
        Ok(())
    }

    fn digit(&mut self, d: u8) {
        let d = char::from(b'0' + d.min(9));
        if self.fresh_entry {
            self.display = d.to_string();
            self.fresh_entry = false;
        } else if self.display == "0" {
            self.display = d.to_string();
        } else if self.display == "-0" {
            self.display = format!("-{d}");
        } else if self.digit_count() < MAX_DIGITS {
            self.display.push(d);
        }
    }

    fn point(&mut self) {
        if self.fresh_entry {
            self.display = "0.".to_string();
            self.fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn operator(&mut self, op: Op) -> CalcResult<()> {
        match (self.accumulator, self.pending) {
            // Consecutive operator presses: the last one wins.
            (Some(_), Some(_)) if self.fresh_entry => {}
            (Some(lhs), Some(pending)) => {
                let result = pending.apply(lhs, self.value())?;
                self.show(result);
                self.accumulator = Some(result);
            }
            _ => self.accumulator = Some(self.value()),
        }
        debug!(op = %op, "Operator pending");
        self.pending = Some(op);
        self.fresh_entry = true;
        Ok(())
    }

    fn equals(&mut self) -> CalcResult<()> {
        if let (Some(lhs), Some(op)) = (self.accumulator, self.pending) {
            let result = op.apply(lhs, self.value())?;
            self.show(result);
            self.accumulator = None;
            self.pending = None;
        }
        self.fresh_entry = true;
        Ok(())
    }

    fn backspace(&mut self) {
        if self.fresh_entry {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    fn negate(&mut self) {
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else if self.value() != 0.0 {
            self.display.insert(0, '-');
        }
    }

    fn digit_count(&self) -> usize {
        self.display.chars().filter(char::is_ascii_digit).count()
    }

    fn show(&mut self, value: f64) {
        self.display = format_number(value);
    }
}

/// Integers print without a decimal point; fractions are rounded to ten
/// places with trailing zeros dropped.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.10}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

impl View for Calculator {
    fn title(&self) -> &str {
        "Calculator"
    }

    fn render(&self) -> String {
        match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => format!("{} {op} {}", format_number(lhs), self.display),
            _ => self.display.clone(),
        }
    }
}
