use crate::View;

/// The classic first GUI: a number and three buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    initial: i64,
    step: i64,
}

impl Counter {
    #[must_use]
    pub fn new(initial: i64) -> Self {
        Self {
            value: initial,
            initial,
            step: 1,
        }
    }

    /// Each click moves the value by `step` instead of one.
    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.wrapping_add(self.step);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.wrapping_sub(self.step);
        self.value
    }

    /// Back to the initial value.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl View for Counter {
    fn title(&self) -> &str {
        "Counter"
    }

    fn render(&self) -> String {
        format!("Count: {}   [-] [reset] [+]", self.value)
    }
}
