use inkmath_core::{BoundingBox, InkRange, Point, RecognitionResult, ScratchOutResult, Stroke};
use inkmath_render::{DrawCall, Error, MathRenderer, RecordingContext, RenderingParameters};
use serde_json::json;

fn stroke(x: f64) -> Stroke {
    Stroke::new(vec![Point::new(x, 0.0), Point::new(x + 4.0, 8.0)])
}

fn drawn_strokes(calls: &[DrawCall]) -> Vec<Stroke> {
    calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Stroke { stroke, .. } => Some(stroke.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn scratched_strokes_are_not_drawn() {
    let strokes = vec![stroke(0.0), stroke(10.0), stroke(20.0), stroke(30.0)];
    let result = RecognitionResult::from_value(&json!({
        "scratchOutResults": [
            {"erasedInkRanges": [{"component": 3}], "inkRanges": [{"component": 1}]}
        ]
    }))
    .expect("decode");

    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(
            &strokes,
            &result,
            &RenderingParameters::default(),
            &mut ctx,
        )
        .expect("render");

    assert_eq!(drawn_strokes(ctx.calls()), vec![strokes[0].clone(), strokes[2].clone()]);
    assert_eq!(ctx.len(), 2, "no boxes without diagnostics");
}

#[test]
fn diagnostics_box_each_stroke_then_the_union() {
    let strokes = vec![stroke(0.0), stroke(10.0)];
    let params = RenderingParameters::default().with_show_bounding_boxes(true);

    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(&strokes, &RecognitionResult::default(), &params, &mut ctx)
        .expect("render");

    let calls = ctx.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[0], DrawCall::Stroke { .. }));
    assert_eq!(
        calls[1],
        DrawCall::BoundingBox {
            bounding_box: BoundingBox::new(0.0, 0.0, 4.0, 8.0)
        }
    );
    assert!(matches!(calls[2], DrawCall::Stroke { .. }));
    assert_eq!(
        calls[3],
        DrawCall::BoundingBox {
            bounding_box: BoundingBox::new(10.0, 0.0, 4.0, 8.0)
        }
    );
    assert_eq!(
        calls[4],
        DrawCall::BoundingBox {
            bounding_box: BoundingBox::new(0.0, 0.0, 14.0, 8.0)
        }
    );
}

#[test]
fn everything_scratched_out_draws_nothing() {
    let strokes = vec![stroke(0.0), stroke(10.0)];
    let result = RecognitionResult::new(vec![ScratchOutResult::new(
        vec![InkRange::component(1)],
        vec![InkRange::component(0)],
    )]);
    let params = RenderingParameters::default().with_show_bounding_boxes(true);

    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(&strokes, &result, &params, &mut ctx)
        .expect("render");
    assert!(ctx.is_empty());
}

#[test]
fn malformed_scratch_out_aborts_before_drawing() {
    let strokes = vec![stroke(0.0)];
    let result = RecognitionResult::new(vec![ScratchOutResult::new(
        vec![InkRange::component(5)],
        Vec::new(),
    )]);

    let mut ctx = RecordingContext::new();
    let err = MathRenderer::new()
        .draw_strokes_by_recognition_result(
            &strokes,
            &result,
            &RenderingParameters::default(),
            &mut ctx,
        )
        .unwrap_err();
    assert!(matches!(err, Error::MalformedScratchOut { index: 5, stroke_count: 1 }));
    assert!(ctx.is_empty());
}

#[test]
fn strokes_are_drawn_with_caller_parameters() {
    let strokes = vec![stroke(0.0)];
    let params = RenderingParameters::default().with_width(1.5);
    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(&strokes, &RecognitionResult::default(), &params, &mut ctx)
        .expect("render");

    let DrawCall::Stroke { parameters, .. } = &ctx.calls()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(parameters, &params);
}

#[test]
fn empty_strokes_are_drawn_but_not_boxed() {
    let strokes = vec![Stroke::default(), stroke(0.0)];
    let params = RenderingParameters::default().with_show_bounding_boxes(true);

    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(&strokes, &RecognitionResult::default(), &params, &mut ctx)
        .expect("render");

    let own = BoundingBox::new(0.0, 0.0, 4.0, 8.0);
    assert_eq!(
        ctx.calls(),
        &[
            DrawCall::Stroke {
                stroke: Stroke::default(),
                parameters: params.clone(),
            },
            DrawCall::Stroke {
                stroke: strokes[1].clone(),
                parameters: params.clone(),
            },
            DrawCall::BoundingBox { bounding_box: own },
            DrawCall::BoundingBox { bounding_box: own },
        ]
    );
}

#[test]
fn only_empty_strokes_draw_no_boxes() {
    let strokes = vec![Stroke::default(), Stroke::default()];
    let params = RenderingParameters::default().with_show_bounding_boxes(true);

    let mut ctx = RecordingContext::new();
    MathRenderer::new()
        .draw_strokes_by_recognition_result(&strokes, &RecognitionResult::default(), &params, &mut ctx)
        .expect("render");

    assert_eq!(ctx.len(), 2);
    assert!(
        ctx.calls()
            .iter()
            .all(|c| matches!(c, DrawCall::Stroke { .. }))
    );
}
