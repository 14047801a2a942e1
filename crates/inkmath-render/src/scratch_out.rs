//! Scratch-out resolution: which input strokes are still visible.
//!
//! Scratch-out annotations address strokes by their position in the original input sequence.
//! Resolution happens in two phases so that removing one stroke never shifts the position of
//! another: first collect, validate and order every referenced index, then build a fresh
//! sequence that skips those positions.

use crate::{Error, Result};
use inkmath_core::{ScratchOutResult, Stroke};
use std::borrow::Cow;

/// Strokes left after hiding everything referenced by `scratch_outs`.
///
/// Both the scratching gesture (`erased_ink_ranges`) and its victims (`ink_ranges`) are removed.
/// With no annotations the input is returned as-is, borrowed; otherwise a filtered copy is
/// returned. The input slice is never modified.
pub fn resolve_visible_strokes<'a>(
    strokes: &'a [Stroke],
    scratch_outs: &[ScratchOutResult],
) -> Result<Cow<'a, [Stroke]>> {
    if scratch_outs.is_empty() {
        return Ok(Cow::Borrowed(strokes));
    }

    let indices = removal_indices(
        scratch_outs
            .iter()
            .flat_map(ScratchOutResult::component_indices),
        strokes.len(),
    )?;

    tracing::debug!(
        strokes = strokes.len(),
        scratch_outs = scratch_outs.len(),
        removed = ?indices,
        "resolved scratch-outs"
    );

    Ok(Cow::Owned(remove_indices(strokes, &indices)))
}

/// Validated removal positions, sorted descending, each listed once.
///
/// A stroke referenced several times (by the gesture and as a victim, or by overlapping
/// annotations) is still removed only once. Any index outside `0..len` fails with
/// [`Error::MalformedScratchOut`].
pub fn removal_indices(indices: impl IntoIterator<Item = usize>, len: usize) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for index in indices {
        if index >= len {
            return Err(Error::MalformedScratchOut {
                index,
                stroke_count: len,
            });
        }
        out.push(index);
    }
    out.sort_unstable_by(|a, b| b.cmp(a));
    out.dedup();
    Ok(out)
}

/// Copies `items` without the given positions, keeping the survivors in their original order.
///
/// The result does not depend on the order of `indices`; positions past the end are ignored.
pub fn remove_indices<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    let mut removed = vec![false; items.len()];
    for &index in indices {
        if let Some(slot) = removed.get_mut(index) {
            *slot = true;
        }
    }
    items
        .iter()
        .zip(removed)
        .filter(|(_, removed)| !removed)
        .map(|(item, _)| item.clone())
        .collect()
}
