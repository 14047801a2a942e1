#![forbid(unsafe_code)]

//! Ink + math recognition model (headless).
//!
//! This crate holds the data a handwriting math recognizer hands back to its host: the input
//! strokes, scratch-out annotations that reference those strokes by position, and the
//! recognized symbol tree. Rendering lives in `inkmath-render`.

pub mod error;
pub mod geom;
pub mod ink;
mod json;
pub mod node;
pub mod stroke;

pub use error::{Error, Result};
pub use geom::{BoundingBox, Point, union_box};
pub use ink::{InkRange, RecognitionResult, ScratchOutResult};
pub use node::{MathNode, NonTerminalNode, RuleNode, TerminalNode};
pub use stroke::{Component, Stroke};
