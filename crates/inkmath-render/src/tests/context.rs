use super::{stroke_at, terminal};
use crate::context::{DrawCall, DrawingContext, RecordingContext};
use crate::node::draw_node;
use crate::params::RenderingParameters;
use inkmath_core::{BoundingBox, MathNode, RuleNode, Stroke};

#[test]
fn draw_calls_expose_their_geometry() {
    let params = RenderingParameters::default();
    let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
    let mut ctx = RecordingContext::new();
    ctx.draw_stroke(&stroke_at(0.0), &params);
    ctx.draw_stroke(&Stroke::default(), &params);
    ctx.draw_rectangle(&b, &params);
    ctx.draw_bounding_box(&b);

    let boxes: Vec<_> = ctx.calls().iter().map(DrawCall::bounding_box).collect();
    assert_eq!(
        boxes,
        vec![
            Some(BoundingBox::new(0.0, 0.0, 5.0, 10.0)),
            None,
            Some(b),
            Some(b),
        ]
    );
}

#[test]
fn into_calls_keeps_issue_order() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let c = BoundingBox::new(20.0, 0.0, 10.0, 10.0);
    let root = RuleNode::new("juxtaposition", vec![terminal("a", a), terminal("c", c)], a.union(&c));
    let params = RenderingParameters::default();

    let mut ctx = RecordingContext::new();
    draw_node(&MathNode::from(root), &params, &mut ctx).unwrap();

    let calls = ctx.clone().into_calls();
    assert_eq!(calls.as_slice(), ctx.calls());
    let boxes: Vec<_> = calls.iter().filter_map(DrawCall::bounding_box).collect();
    assert_eq!(boxes, vec![a, c]);
}
