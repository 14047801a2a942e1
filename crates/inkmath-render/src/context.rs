use crate::params::RenderingParameters;
use inkmath_core::{BoundingBox, Stroke};

/// The drawing surface a render call paints on.
///
/// Implementations own pixel-level rendering; this crate only decides what to draw and in
/// which order. A render call holds the surface mutably for its whole duration.
pub trait DrawingContext {
    /// Paints one pen stroke with `parameters.color()` at `parameters.width()`.
    fn draw_stroke(&mut self, stroke: &Stroke, parameters: &RenderingParameters);

    /// Paints a recognized shape at its box: filled with `rect_color`, outlined with `color`.
    fn draw_rectangle(&mut self, bounding_box: &BoundingBox, parameters: &RenderingParameters);

    /// Outlines a diagnostic box around raw ink.
    fn draw_bounding_box(&mut self, bounding_box: &BoundingBox);
}

impl<T: DrawingContext + ?Sized> DrawingContext for &mut T {
    fn draw_stroke(&mut self, stroke: &Stroke, parameters: &RenderingParameters) {
        (**self).draw_stroke(stroke, parameters);
    }

    fn draw_rectangle(&mut self, bounding_box: &BoundingBox, parameters: &RenderingParameters) {
        (**self).draw_rectangle(bounding_box, parameters);
    }

    fn draw_bounding_box(&mut self, bounding_box: &BoundingBox) {
        (**self).draw_bounding_box(bounding_box);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Stroke {
        stroke: Stroke,
        parameters: RenderingParameters,
    },
    Rectangle {
        bounding_box: BoundingBox,
        parameters: RenderingParameters,
    },
    BoundingBox {
        bounding_box: BoundingBox,
    },
}

impl DrawCall {
    /// Box-like calls (shapes and diagnostic outlines) expose their geometry.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            DrawCall::Stroke { stroke, .. } => stroke.bounding_box(),
            DrawCall::Rectangle { bounding_box, .. } | DrawCall::BoundingBox { bounding_box } => {
                Some(*bounding_box)
            }
        }
    }
}

/// Keeps every draw call in issue order, for hosts that replay them later.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn replay<C: DrawingContext + ?Sized>(&self, target: &mut C) {
        for call in &self.calls {
            match call {
                DrawCall::Stroke { stroke, parameters } => target.draw_stroke(stroke, parameters),
                DrawCall::Rectangle {
                    bounding_box,
                    parameters,
                } => target.draw_rectangle(bounding_box, parameters),
                DrawCall::BoundingBox { bounding_box } => target.draw_bounding_box(bounding_box),
            }
        }
    }
}

impl DrawingContext for RecordingContext {
    fn draw_stroke(&mut self, stroke: &Stroke, parameters: &RenderingParameters) {
        self.calls.push(DrawCall::Stroke {
            stroke: stroke.clone(),
            parameters: parameters.clone(),
        });
    }

    fn draw_rectangle(&mut self, bounding_box: &BoundingBox, parameters: &RenderingParameters) {
        self.calls.push(DrawCall::Rectangle {
            bounding_box: *bounding_box,
            parameters: parameters.clone(),
        });
    }

    fn draw_bounding_box(&mut self, bounding_box: &BoundingBox) {
        self.calls.push(DrawCall::BoundingBox {
            bounding_box: *bounding_box,
        });
    }
}
