//! Open/Closed walkthrough.
//!
//! Three shapes go into a `Vec<Box<dyn Shape>>` and one loop prints every
//! area. Adding a fourth shape means implementing
//! [`Shape`](solid_recipe::shapes::Shape) somewhere else; this binary's loop
//! never changes.

use solid_recipe::lifecycle::setup_tracing;
use solid_recipe::shapes::{Circle, Rectangle, Shape, Square};
use tracing::info;

fn main() {
    setup_tracing();

    info!("Starting shape area demo");

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Square { side: 4.0 }),
        Box::new(Rectangle {
            length: 3.0,
            width: 5.0,
        }),
    ];

    for shape in &shapes {
        info!(shape = shape.name(), area = shape.area(), "Computed area");
    }
}
