#![forbid(unsafe_code)]

//! Headless rendering of handwriting math recognition results.
//!
//! Two pipelines share the same drawing surface abstraction ([`DrawingContext`]):
//! - ink: input strokes, minus scratched-out ones, plus optional diagnostic boxes
//! - symbols: a recognized tree, laid out by a [`Layout`] and drawn node by node

pub mod color;
pub mod context;
pub mod layout;
pub mod node;
pub mod params;
pub mod renderer;
pub mod scratch_out;
pub mod svg;

pub use color::Color;
pub use context::{DrawCall, DrawingContext, RecordingContext};
pub use layout::{Layout, TreeLayout};
pub use node::draw_node;
pub use params::RenderingParameters;
pub use renderer::MathRenderer;
pub use scratch_out::resolve_visible_strokes;
pub use svg::{SvgContext, SvgRenderOptions};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("scratch-out references stroke {index}, but only {stroke_count} strokes were given")]
    MalformedScratchOut { index: usize, stroke_count: usize },
    #[error("non-terminal node `{name}` has no selected candidate")]
    UnresolvedCandidate { name: String },
    #[error("layout found no geometry to bound")]
    EmptyLayout,
    #[error("invalid color `{value}`: {message}")]
    InvalidColor { value: String, message: String },
    #[error(transparent)]
    Model(#[from] inkmath_core::Error),
    #[error("rendering parameters JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
