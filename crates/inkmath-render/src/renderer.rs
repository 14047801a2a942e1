use crate::Result;
use crate::context::DrawingContext;
use crate::layout::{Layout, TreeLayout};
use crate::node::draw_node;
use crate::params::RenderingParameters;
use crate::scratch_out::resolve_visible_strokes;
use inkmath_core::{
    BoundingBox, Component, MathNode, RecognitionResult, ScratchOutResult, Stroke, union_box,
};
use std::borrow::Cow;

/// Renders math recognition output: raw ink with scratch-outs applied, or the recognized
/// symbol tree.
///
/// The renderer keeps no state between calls; each call borrows the drawing surface for its
/// own duration only.
#[derive(Debug, Clone, Default)]
pub struct MathRenderer<L = TreeLayout> {
    layout: L,
}

impl MathRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Layout> MathRenderer<L> {
    pub fn with_layout(layout: L) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Input strokes minus everything the scratch-outs hide. See
    /// [`resolve_visible_strokes`](crate::scratch_out::resolve_visible_strokes).
    pub fn remove_scratch_out_strokes<'a>(
        &self,
        strokes: &'a [Stroke],
        scratch_outs: &[ScratchOutResult],
    ) -> Result<Cow<'a, [Stroke]>> {
        resolve_visible_strokes(strokes, scratch_outs)
    }

    /// Draws the strokes that survive the result's scratch-outs.
    ///
    /// With bounding boxes enabled, each stroke is followed by its own box and the union of
    /// all visible strokes is outlined last.
    pub fn draw_strokes_by_recognition_result<C: DrawingContext + ?Sized>(
        &self,
        strokes: &[Stroke],
        recognition_result: &RecognitionResult,
        parameters: &RenderingParameters,
        context: &mut C,
    ) -> Result<()> {
        let visible =
            self.remove_scratch_out_strokes(strokes, recognition_result.scratch_out_results())?;
        tracing::debug!(
            input = strokes.len(),
            visible = visible.len(),
            "draw strokes"
        );

        let show_boxes = parameters.show_bounding_boxes();
        let mut boxes = Vec::new();
        for stroke in visible.iter() {
            context.draw_stroke(stroke, parameters);
            if !show_boxes {
                continue;
            }
            if let Some(b) = stroke.bounding_box() {
                context.draw_bounding_box(&b);
                boxes.push(b);
            }
        }

        if let Some(global) = union_box(&boxes) {
            context.draw_bounding_box(&global);
        }
        Ok(())
    }

    /// Lays out and draws a recognized symbol tree; returns the tree's global box.
    ///
    /// With bounding boxes enabled the global box is drawn before the tree so that node
    /// overlays end up on top of it.
    pub fn draw_font_by_recognition_result<C: DrawingContext + ?Sized>(
        &self,
        components: &[Component],
        root: &MathNode,
        parameters: &RenderingParameters,
        context: &mut C,
    ) -> Result<BoundingBox> {
        let global = self.layout.layout(root, components)?;
        tracing::debug!(
            root = root.name(),
            components = components.len(),
            ?global,
            "draw symbol tree"
        );

        if parameters.show_bounding_boxes() {
            context.draw_rectangle(&global, parameters);
        }
        draw_node(root, parameters, context)?;
        Ok(global)
    }
}
