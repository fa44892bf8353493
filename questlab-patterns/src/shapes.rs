//! Abstract types: [`Shape`] declares `area` and `perimeter` without a
//! default, so every implementor must provide them. Only `describe` is
//! shared.
//!
//! Constructors validate their dimensions and return an error instead of
//! building a shape that cannot exist.

use crate::{PatternError, PatternResult};
use std::f64::consts::PI;

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    fn describe(&self) -> String {
        format!(
            "{}: area {:.2}, perimeter {:.2}",
            self.name(),
            self.area(),
            self.perimeter()
        )
    }
}

fn positive(shape: &'static str, dimension: &'static str, value: f64) -> PatternResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PatternError::InvalidDimension {
            shape,
            dimension,
            value,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> PatternResult<Self> {
        Ok(Self {
            radius: positive("circle", "radius", radius)?,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> PatternResult<Self> {
        Ok(Self {
            width: positive("rectangle", "width", width)?,
            height: positive("rectangle", "height", height)?,
        })
    }

    pub fn square(side: f64) -> PatternResult<Self> {
        Self::new(side, side)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        if self.is_square() { "square" } else { "rectangle" }
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Sides must be positive and satisfy the triangle inequality strictly;
    /// degenerate (flat) triangles are rejected.
    pub fn new(a: f64, b: f64, c: f64) -> PatternResult<Self> {
        let a = positive("triangle", "side", a)?;
        let b = positive("triangle", "side", b)?;
        let c = positive("triangle", "side", c)?;
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(PatternError::InvalidTriangle { a, b, c });
        }
        Ok(Self { a, b, c })
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    /// Heron's formula.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Sum of the areas of any mix of shapes.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// The shape with the largest area.
pub fn largest(shapes: &[Box<dyn Shape>]) -> Option<&dyn Shape> {
    shapes
        .iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
        .map(|s| &**s)
}
