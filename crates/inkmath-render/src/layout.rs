use crate::{Error, Result};
use inkmath_core::{BoundingBox, Component, MathNode};

/// The layout pass run before a symbol tree is drawn.
///
/// It reports the global box of the tree. Node geometry itself is placed upstream; a layout
/// only reads it.
pub trait Layout {
    fn layout(&self, root: &MathNode, components: &[Component]) -> Result<BoundingBox>;
}

impl<F> Layout for F
where
    F: Fn(&MathNode, &[Component]) -> Result<BoundingBox>,
{
    fn layout(&self, root: &MathNode, components: &[Component]) -> Result<BoundingBox> {
        self(root, components)
    }
}

/// Bounds the tree by composing node boxes bottom-up, optionally widened by the input
/// components the tree was recognized from.
#[derive(Debug, Clone, Copy)]
pub struct TreeLayout {
    pub include_components: bool,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            include_components: true,
        }
    }
}

impl TreeLayout {
    pub fn tree_only() -> Self {
        Self {
            include_components: false,
        }
    }
}

impl Layout for TreeLayout {
    fn layout(&self, root: &MathNode, components: &[Component]) -> Result<BoundingBox> {
        let mut bounds = root.composed_box();
        if self.include_components {
            for b in components.iter().filter_map(Component::bounding_box) {
                bounds = Some(bounds.map_or(b, |acc| acc.union(&b)));
            }
        }
        bounds.ok_or(Error::EmptyLayout)
    }
}
