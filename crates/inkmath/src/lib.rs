#![forbid(unsafe_code)]

//! `inkmath` renders the output of a handwriting math recognizer, headless.
//!
//! # Features
//!
//! - `render`: enable scratch-out filtering, symbol-tree drawing and SVG output
//!   (`inkmath::render`)

pub use inkmath_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use inkmath_render::{
        Color, DrawCall, DrawingContext, Layout, MathRenderer, RecordingContext,
        RenderingParameters, SvgContext, SvgRenderOptions, TreeLayout, draw_node,
        resolve_visible_strokes,
    };
    pub use inkmath_render::Error as RenderError;

    use inkmath_core::{Component, RecognitionResult, Stroke};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Model(#[from] inkmath_core::Error),
        #[error(transparent)]
        Render(#[from] inkmath_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Bundles a renderer with the parameters and SVG options used for every call.
    ///
    /// Each call starts from a fresh SVG surface; nothing is carried over between calls.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub renderer: MathRenderer,
        pub parameters: RenderingParameters,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_parameters(mut self, parameters: RenderingParameters) -> Self {
            self.parameters = parameters;
            self
        }

        pub fn with_svg_options(mut self, svg: SvgRenderOptions) -> Self {
            self.svg = svg;
            self
        }

        /// Visible ink as SVG, with the result's scratch-outs applied.
        pub fn render_ink_svg(
            &self,
            strokes: &[Stroke],
            recognition_result: &RecognitionResult,
        ) -> Result<String> {
            let mut svg = SvgContext::new(self.svg.clone());
            self.renderer.draw_strokes_by_recognition_result(
                strokes,
                recognition_result,
                &self.parameters,
                &mut svg,
            )?;
            Ok(svg.finish())
        }

        /// Same as [`HeadlessRenderer::render_ink_svg`], decoding the recognizer's JSON answer.
        pub fn render_ink_svg_from_json(
            &self,
            strokes: &[Stroke],
            recognition_json: &str,
        ) -> Result<String> {
            let result = RecognitionResult::from_json(recognition_json)?;
            self.render_ink_svg(strokes, &result)
        }

        /// The recognized symbol tree as SVG, or `None` when the answer carries no tree.
        pub fn render_symbols_svg(
            &self,
            components: &[Component],
            recognition_result: &RecognitionResult,
        ) -> Result<Option<String>> {
            let Some(root) = &recognition_result.root else {
                return Ok(None);
            };
            let mut svg = SvgContext::new(self.svg.clone());
            self.renderer.draw_font_by_recognition_result(
                components,
                root,
                &self.parameters,
                &mut svg,
            )?;
            Ok(Some(svg.finish()))
        }

        pub fn render_symbols_svg_from_json(
            &self,
            components: &[Component],
            recognition_json: &str,
        ) -> Result<Option<String>> {
            let result = RecognitionResult::from_json(recognition_json)?;
            self.render_symbols_svg(components, &result)
        }
    }
}
