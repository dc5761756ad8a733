//! Liskov Substitution walkthrough, violation included.
//!
//! First every shape reports its area through the common trait. Then each is
//! resized to the same 4 x 6 bounding box through
//! [`resize`](solid_recipe::shapes::resize), which assumes width and height
//! are independent. The rectangle lands at area 24 as the caller expects;
//! the circle, whose setters both alias the radius, lands at 36 pi. Same
//! call, different contract, and that difference is the demo.

use solid_recipe::lifecycle::setup_tracing;
use solid_recipe::shapes::{
    resize, Circle, Rectangle, RegularPolygon, ScalableShape, Square, Triangle,
};
use tracing::{info, warn};

fn main() {
    setup_tracing();

    info!("Starting scalable shapes demo");

    let mut shapes: Vec<Box<dyn ScalableShape>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Square { side: 4.0 }),
        Box::new(Rectangle {
            length: 3.0,
            width: 5.0,
        }),
        Box::new(Triangle {
            base: 4.0,
            height: 6.0,
        }),
        Box::new(RegularPolygon {
            sides: 6,
            side_length: 7.0,
        }),
    ];

    for shape in &shapes {
        info!(shape = shape.name(), area = shape.area(), "Computed area");
    }

    let span = tracing::info_span!("substitution_check").entered();
    info!("Resizing every shape to a 4 x 6 bounding box");
    for shape in &mut shapes {
        resize(shape.as_mut(), 4.0, 6.0);
        info!(
            shape = shape.name(),
            area = shape.area(),
            "Area after resize"
        );
    }
    warn!("The circle ignored the width: its setters alias the radius, breaking the ScalableShape contract");
    drop(span);
}
