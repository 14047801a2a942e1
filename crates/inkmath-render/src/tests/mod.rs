mod context;
mod node;

use inkmath_core::{BoundingBox, MathNode, Point, Stroke, TerminalNode};

pub(super) fn stroke_at(x: f64) -> Stroke {
    Stroke::new(vec![Point::new(x, 0.0), Point::new(x + 5.0, 10.0)])
}

pub(super) fn terminal(name: &str, b: BoundingBox) -> MathNode {
    TerminalNode::new(name, b).into()
}
