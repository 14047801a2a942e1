//! Recognized math symbol tree.
//!
//! The tree is a closed set of three node kinds:
//! - [`TerminalNode`]: a leaf symbol with its placed bounding box
//! - [`NonTerminalNode`]: a choice among recognition alternatives, one of which is selected
//! - [`RuleNode`]: a structural composition (fraction, exponent, fence, ...) of ordered children

use crate::geom::{BoundingBox, union_box};
use crate::json::{from_value_ref, str_field};
use crate::{Error, Result};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum MathNode {
    Terminal(TerminalNode),
    NonTerminal(NonTerminalNode),
    Rule(RuleNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalNode {
    pub name: String,
    pub label: Option<String>,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NonTerminalNode {
    pub name: String,
    pub candidates: Vec<MathNode>,
    pub selected_candidate: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleNode {
    pub name: String,
    pub children: Vec<MathNode>,
    pub bounding_box: BoundingBox,
}

impl TerminalNode {
    pub fn new(name: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            name: name.into(),
            label: None,
            bounding_box,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl NonTerminalNode {
    pub fn new(name: impl Into<String>, candidates: Vec<MathNode>) -> Self {
        Self {
            name: name.into(),
            candidates,
            selected_candidate: None,
        }
    }

    pub fn selecting(mut self, index: usize) -> Self {
        self.selected_candidate = Some(index);
        self
    }

    /// The currently chosen alternative, if the selection points at an existing candidate.
    pub fn selected(&self) -> Option<&MathNode> {
        self.candidates.get(self.selected_candidate?)
    }
}

impl RuleNode {
    pub fn new(name: impl Into<String>, children: Vec<MathNode>, bounding_box: BoundingBox) -> Self {
        Self {
            name: name.into(),
            children,
            bounding_box,
        }
    }
}

impl From<TerminalNode> for MathNode {
    fn from(node: TerminalNode) -> Self {
        MathNode::Terminal(node)
    }
}

impl From<NonTerminalNode> for MathNode {
    fn from(node: NonTerminalNode) -> Self {
        MathNode::NonTerminal(node)
    }
}

impl From<RuleNode> for MathNode {
    fn from(node: RuleNode) -> Self {
        MathNode::Rule(node)
    }
}

impl MathNode {
    pub fn name(&self) -> &str {
        match self {
            MathNode::Terminal(n) => &n.name,
            MathNode::NonTerminal(n) => &n.name,
            MathNode::Rule(n) => &n.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MathNode::Terminal(_) => "terminalNode",
            MathNode::NonTerminal(_) => "nonTerminalNode",
            MathNode::Rule(_) => "rule",
        }
    }

    /// Bottom-up union of the geometry reachable through selected candidates.
    ///
    /// Non-terminals without a resolvable selection contribute nothing.
    pub fn composed_box(&self) -> Option<BoundingBox> {
        match self {
            MathNode::Terminal(n) => Some(n.bounding_box),
            MathNode::NonTerminal(n) => n.selected()?.composed_box(),
            MathNode::Rule(n) => {
                let children: Vec<BoundingBox> =
                    n.children.iter().filter_map(MathNode::composed_box).collect();
                Some(
                    union_box(&children)
                        .map_or(n.bounding_box, |b| b.union(&n.bounding_box)),
                )
            }
        }
    }

    /// Decodes a symbol tree node as emitted by the recognition engine.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(kind) = str_field(value, "type") else {
            return Err(Error::invalid_model("math node is missing its `type`"));
        };
        let name = str_field(value, "name").unwrap_or_default().to_string();

        match kind {
            "terminalNode" => {
                let bounding_box = bounding_box_field(value)?.ok_or_else(|| {
                    Error::invalid_model(format!("terminal node `{name}` has no boundingBox"))
                })?;
                Ok(MathNode::Terminal(TerminalNode {
                    label: terminal_label(value),
                    name,
                    bounding_box,
                }))
            }
            "nonTerminalNode" => {
                let candidates = child_nodes(value, "candidates")?;
                let selected_candidate = value
                    .get("selectedCandidate")
                    .and_then(Value::as_i64)
                    .and_then(|i| usize::try_from(i).ok());
                Ok(MathNode::NonTerminal(NonTerminalNode {
                    name,
                    candidates,
                    selected_candidate,
                }))
            }
            "rule" => {
                let children = child_nodes(value, "children")?;
                let bounding_box = match bounding_box_field(value)? {
                    Some(b) => b,
                    None => {
                        let boxes: Vec<BoundingBox> =
                            children.iter().filter_map(MathNode::composed_box).collect();
                        union_box(&boxes).ok_or_else(|| {
                            Error::invalid_model(format!(
                                "rule node `{name}` has no boundingBox and no placed children"
                            ))
                        })?
                    }
                };
                Ok(MathNode::Rule(RuleNode {
                    name,
                    children,
                    bounding_box,
                }))
            }
            other => Err(Error::UnsupportedNodeKind {
                kind: other.to_string(),
            }),
        }
    }
}

fn bounding_box_field(value: &Value) -> Result<Option<BoundingBox>> {
    match value.get("boundingBox") {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(from_value_ref(v)?)),
    }
}

fn child_nodes(value: &Value, key: &str) -> Result<Vec<MathNode>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(MathNode::from_value).collect(),
        Some(_) => Err(Error::invalid_model(format!("`{key}` must be an array"))),
    }
}

fn terminal_label(value: &Value) -> Option<String> {
    if let Some(label) = str_field(value, "label") {
        return Some(label.to_string());
    }
    // Engines report terminal alternatives as `candidates: [{label}]` plus a selection index.
    let candidates = value.get("candidates")?.as_array()?;
    let selected = value
        .get("selectedCandidate")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize;
    str_field(candidates.get(selected)?, "label").map(str::to_string)
}
