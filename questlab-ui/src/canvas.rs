//! A drawing canvas: each click stamps the current tool's shape.

use crate::{UiError, UiResult, View};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What a click draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tool {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Default for Tool {
    fn default() -> Self {
        Self::Circle { radius: 10.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnShape {
    pub tool: Tool,
    pub center: Point,
}

impl DrawnShape {
    /// True when `p` lies inside or on the edge of the shape.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self.tool {
            Tool::Circle { radius } => self.center.distance(p) <= radius,
            Tool::Square { side } => {
                let half = side / 2.0;
                (p.x - self.center.x).abs() <= half && (p.y - self.center.y).abs() <= half
            }
        }
    }
}

impl fmt::Display for DrawnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tool {
            Tool::Circle { radius } => write!(f, "circle r={radius} at {}", self.center),
            Tool::Square { side } => write!(f, "square {side}x{side} at {}", self.center),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Edit {
    Drew,
    Cleared(Vec<DrawnShape>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    tool: Tool,
    shapes: Vec<DrawnShape>,
    history: Vec<Edit>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tool: Tool::default(),
            shapes: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn shapes(&self) -> &[DrawnShape] {
        &self.shapes
    }

    /// Handles a click: draws the current tool centered on `(x, y)` and
    /// returns the new shape's index.
    pub fn draw_at(&mut self, x: f64, y: f64) -> UiResult<usize> {
        let inside = (0.0..=f64::from(self.width)).contains(&x)
            && (0.0..=f64::from(self.height)).contains(&y);
        if !inside {
            return Err(UiError::OutOfBounds {
                x: x as i64,
                y: y as i64,
            });
        }
        let shape = DrawnShape {
            tool: self.tool,
            center: Point::new(x, y),
        };
        debug!(shape = %shape, "Drawn");
        self.shapes.push(shape);
        self.history.push(Edit::Drew);
        Ok(self.shapes.len() - 1)
    }

    /// Removes every shape and returns how many there were. Undo brings
    /// them back.
    pub fn clear(&mut self) -> usize {
        let removed = std::mem::take(&mut self.shapes);
        let count = removed.len();
        if count > 0 {
            self.history.push(Edit::Cleared(removed));
        }
        count
    }

    /// Reverts the last draw or clear. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(Edit::Drew) => {
                self.shapes.pop();
                true
            }
            Some(Edit::Cleared(shapes)) => {
                self.shapes = shapes;
                true
            }
            None => false,
        }
    }

    /// Index of the topmost shape under `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let p = Point::new(x, y);
        self.shapes.iter().rposition(|s| s.contains(p))
    }
}

impl View for Canvas {
    fn title(&self) -> &str {
        "Canvas"
    }

    fn render(&self) -> String {
        let mut out = vec![format!(
            "{}x{} canvas, {} shape(s)",
            self.width,
            self.height,
            self.shapes.len()
        )];
        out.extend(self.shapes.iter().map(|s| format!("  {s}")));
        out.join("\n")
    }
}
