use super::terminal;
use crate::context::{DrawCall, RecordingContext};
use crate::node::draw_node;
use crate::params::{RULE_OVERLAY_RECT_COLOR, RenderingParameters};
use crate::{Color, Error};
use inkmath_core::{BoundingBox, MathNode, NonTerminalNode, RuleNode};

fn r(x: f64) -> BoundingBox {
    BoundingBox::new(x, 0.0, 10.0, 10.0)
}

fn diagnostics() -> RenderingParameters {
    RenderingParameters::default().with_show_bounding_boxes(true)
}

fn rect_boxes(calls: &[DrawCall]) -> Vec<BoundingBox> {
    calls
        .iter()
        .map(|c| match c {
            DrawCall::Rectangle { bounding_box, .. } => *bounding_box,
            other => panic!("unexpected draw call: {other:?}"),
        })
        .collect()
}

#[test]
fn terminal_draws_one_shape_with_caller_parameters() {
    let params = diagnostics();
    let mut ctx = RecordingContext::new();
    draw_node(&terminal("x", r(0.0)), &params, &mut ctx).unwrap();

    assert_eq!(
        ctx.calls(),
        &[DrawCall::Rectangle {
            bounding_box: r(0.0),
            parameters: params.clone(),
        }]
    );
}

#[test]
fn non_terminal_forwards_to_selected_candidate_only() {
    let node: MathNode =
        NonTerminalNode::new("expression", vec![terminal("a", r(0.0)), terminal("b", r(50.0))])
            .selecting(1)
            .into();

    for params in [RenderingParameters::default(), diagnostics()] {
        let mut ctx = RecordingContext::new();
        draw_node(&node, &params, &mut ctx).unwrap();
        assert_eq!(rect_boxes(ctx.calls()), vec![r(50.0)]);
    }
}

#[test]
fn non_terminal_without_selection_is_an_error() {
    let node: MathNode = NonTerminalNode::new("expression", vec![terminal("a", r(0.0))]).into();
    let mut ctx = RecordingContext::new();
    let err = draw_node(&node, &RenderingParameters::default(), &mut ctx).unwrap_err();
    assert!(matches!(err, Error::UnresolvedCandidate { ref name } if name == "expression"));
    assert!(ctx.is_empty());
}

#[test]
fn out_of_range_selection_is_an_error() {
    let node: MathNode = NonTerminalNode::new("expression", vec![terminal("a", r(0.0))])
        .selecting(4)
        .into();
    let err = draw_node(&node, &RenderingParameters::default(), &mut RecordingContext::new())
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedCandidate { .. }));
}

#[test]
fn rule_draws_children_then_its_overlay() {
    let own = BoundingBox::new(-1.0, -1.0, 30.0, 12.0);
    let rule: MathNode =
        RuleNode::new("juxtaposition", vec![terminal("a", r(0.0)), terminal("b", r(15.0))], own)
            .into();
    let params = diagnostics();
    let mut ctx = RecordingContext::new();
    draw_node(&rule, &params, &mut ctx).unwrap();

    assert_eq!(rect_boxes(ctx.calls()), vec![r(0.0), r(15.0), own]);

    let DrawCall::Rectangle {
        parameters: overlay,
        ..
    } = &ctx.calls()[2]
    else {
        unreachable!();
    };
    assert_eq!(overlay.color(), Color::RED);
    assert_eq!(overlay.rect_color(), RULE_OVERLAY_RECT_COLOR);
    assert_ne!(overlay.color(), params.color());
}

#[test]
fn rule_without_diagnostics_draws_only_children() {
    let rule: MathNode = RuleNode::new(
        "fraction",
        vec![terminal("n", r(0.0)), terminal("d", r(20.0))],
        r(0.0).union(&r(20.0)),
    )
    .into();
    let mut ctx = RecordingContext::new();
    draw_node(&rule, &RenderingParameters::default(), &mut ctx).unwrap();
    assert_eq!(ctx.len(), 2);
}

#[test]
fn overlay_does_not_leak_into_later_siblings() {
    let inner: MathNode =
        RuleNode::new("subscript", vec![terminal("a", r(0.0))], r(0.0)).into();
    let outer: MathNode =
        RuleNode::new("group", vec![inner, terminal("b", r(30.0))], r(0.0).union(&r(30.0)))
            .into();
    let params = diagnostics();
    let mut ctx = RecordingContext::new();
    draw_node(&outer, &params, &mut ctx).unwrap();

    // a, subscript overlay, b, group overlay
    assert_eq!(ctx.len(), 4);
    let DrawCall::Rectangle { parameters, .. } = &ctx.calls()[2] else {
        unreachable!();
    };
    assert_eq!(parameters, &params);
}

#[test]
fn error_deep_in_tree_keeps_already_issued_calls() {
    let broken: MathNode = NonTerminalNode::new("expression", Vec::new()).into();
    let rule: MathNode =
        RuleNode::new("group", vec![terminal("a", r(0.0)), broken, terminal("c", r(40.0))], r(0.0))
            .into();
    let mut ctx = RecordingContext::new();
    let err = draw_node(&rule, &diagnostics(), &mut ctx).unwrap_err();
    assert!(matches!(err, Error::UnresolvedCandidate { .. }));
    assert_eq!(rect_boxes(ctx.calls()), vec![r(0.0)]);
}
