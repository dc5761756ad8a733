//! The Open/Closed seam: a closed-form area behind one trait.

use std::f64::consts::PI;

/// A two-dimensional shape with a closed-form area.
///
/// # Architecture Note
/// This trait is the extension point of the demo. Adding a new shape means
/// implementing `Shape` in a new type; nothing that iterates over
/// `&dyn Shape` is edited. Open for extension, closed for modification.
pub trait Shape {
    /// Human-readable shape name, used for log output.
    fn name(&self) -> &'static str;

    /// The shape's area.
    fn area(&self) -> f64;
}

/// A circle described by its radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

/// A square described by its side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side.powi(2)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.length * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_area_for_radius_five_is_twenty_five_pi() {
        let circle = Circle { radius: 5.0 };
        assert_eq!(circle.area(), 25.0 * PI);
    }

    #[test]
    fn square_area_for_side_four_is_sixteen() {
        let square = Square { side: 4.0 };
        assert_eq!(square.area(), 16.0);
    }

    #[test]
    fn rectangle_area_for_three_by_five_is_fifteen() {
        let rectangle = Rectangle {
            length: 3.0,
            width: 5.0,
        };
        assert_eq!(rectangle.area(), 15.0);
    }

    #[test]
    fn shapes_are_interchangeable_behind_the_trait() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle { radius: 5.0 }),
            Box::new(Square { side: 4.0 }),
            Box::new(Rectangle {
                length: 3.0,
                width: 5.0,
            }),
        ];
        let total: f64 = shapes.iter().map(|shape| shape.area()).sum();
        assert_eq!(total, 25.0 * PI + 16.0 + 15.0);
    }
}
