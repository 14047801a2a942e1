use crate::node::MathNode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A span of ink inside one input component (stroke).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkRange {
    /// Position of the stroke in the original input sequence.
    pub component: usize,
    #[serde(default)]
    pub first_item: usize,
    #[serde(default)]
    pub last_item: Option<usize>,
}

impl InkRange {
    pub fn component(component: usize) -> Self {
        Self {
            component,
            first_item: 0,
            last_item: None,
        }
    }
}

/// "These strokes were scratched out."
///
/// `erased_ink_ranges` is the ink of the scratching gesture itself, `ink_ranges` the ink it
/// landed on. Renderers hide both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchOutResult {
    #[serde(default)]
    pub erased_ink_ranges: Vec<InkRange>,
    #[serde(default)]
    pub ink_ranges: Vec<InkRange>,
}

impl ScratchOutResult {
    pub fn new(erased_ink_ranges: Vec<InkRange>, ink_ranges: Vec<InkRange>) -> Self {
        Self {
            erased_ink_ranges,
            ink_ranges,
        }
    }

    /// Every component index referenced by this annotation, erasing ink first.
    pub fn component_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.erased_ink_ranges
            .iter()
            .chain(&self.ink_ranges)
            .map(|r| r.component)
    }
}

/// The part of a math recognition answer this library consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub scratch_out_results: Vec<ScratchOutResult>,
    pub root: Option<MathNode>,
}

impl RecognitionResult {
    pub fn new(scratch_out_results: Vec<ScratchOutResult>) -> Self {
        Self {
            scratch_out_results,
            root: None,
        }
    }

    pub fn with_root(mut self, root: MathNode) -> Self {
        self.root = Some(root);
        self
    }

    pub fn scratch_out_results(&self) -> &[ScratchOutResult] {
        &self.scratch_out_results
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decodes a recognition answer.
    ///
    /// The symbol tree is read from a top-level `root`, or from the `SYMBOLTREE` entry of a
    /// `results` array when the engine returns several result formats at once.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(obj) = value.as_object() else {
            return Err(Error::invalid_model("recognition result must be a JSON object"));
        };

        let scratch_out_results = match obj.get("scratchOutResults") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => crate::json::from_value_ref::<Vec<ScratchOutResult>>(v)?,
        };

        let root_value = obj.get("root").filter(|v| !v.is_null()).or_else(|| {
            obj.get("results")?
                .as_array()?
                .iter()
                .find(|r| r.get("type").and_then(Value::as_str) == Some("SYMBOLTREE"))?
                .get("root")
        });
        let root = root_value.map(MathNode::from_value).transpose()?;

        tracing::debug!(
            scratch_outs = scratch_out_results.len(),
            has_tree = root.is_some(),
            "decoded recognition result"
        );

        Ok(Self {
            scratch_out_results,
            root,
        })
    }
}
