//! The Liskov Substitution seam, violation included on purpose.

use std::f64::consts::PI;

use crate::shapes::area::{Circle, Rectangle, Shape, Square};

/// A shape whose bounding dimensions can be adjusted after construction.
///
/// # Contract
/// `set_width` and `set_height` are independent: setting one must not change
/// the other dimension. Callers such as [`resize`] rely on this when handed
/// any `&mut dyn ScalableShape`.
///
/// [`Circle`] implements this trait by aliasing **both** setters to its
/// radius, which silently breaks the contract. That is the canonical Liskov
/// Substitution violation and it is kept here deliberately as the
/// demonstration: substituting a `Circle` where a `Rectangle` was expected
/// changes the program's observable behavior.
pub trait ScalableShape: Shape {
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
}

/// Resizes any scalable shape to the given bounding dimensions.
///
/// Assumes the [`ScalableShape`] contract holds. A well-behaved shape ends
/// up `width` wide and `height` tall; a `Circle` ends up with whatever the
/// last setter wrote into its radius.
pub fn resize(shape: &mut dyn ScalableShape, width: f64, height: f64) {
    shape.set_width(width);
    shape.set_height(height);
}

impl ScalableShape for Rectangle {
    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.length = height;
    }
}

impl ScalableShape for Square {
    // A square has one dimension, so either setter rescales the whole shape.
    fn set_width(&mut self, width: f64) {
        self.side = width;
    }

    fn set_height(&mut self, height: f64) {
        self.side = height;
    }
}

impl ScalableShape for Circle {
    // Contract violation, kept on purpose: both setters write the radius, so
    // `set_width` followed by `set_height` loses the width entirely.
    fn set_width(&mut self, width: f64) {
        self.radius = width;
    }

    fn set_height(&mut self, height: f64) {
        self.radius = height;
    }
}

/// A triangle described by base and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

impl ScalableShape for Triangle {
    fn set_width(&mut self, width: f64) {
        self.base = width;
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

/// A regular polygon with `sides` edges of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    pub sides: u32,
    pub side_length: f64,
}

impl Shape for RegularPolygon {
    fn name(&self) -> &'static str {
        "polygon"
    }

    fn area(&self) -> f64 {
        let n = f64::from(self.sides);
        0.25 * n * self.side_length.powi(2) / (PI / n).tan()
    }
}

impl ScalableShape for RegularPolygon {
    // A regular polygon is as wide as it is tall; either setter rescales the
    // side length.
    fn set_width(&mut self, width: f64) {
        self.side_length = width;
    }

    fn set_height(&mut self, height: f64) {
        self.side_length = height;
    }
}
