use crate::context::DrawingContext;
use crate::params::RenderingParameters;
use crate::{Error, Result};
use inkmath_core::{MathNode, NonTerminalNode, RuleNode, TerminalNode};

/// Draws a recognized symbol tree, depth first.
///
/// - terminal: one shape at the node's box
/// - non-terminal: whatever its selected candidate draws, nothing of its own
/// - rule: every child in order, then (with diagnostics on) its own box in the overlay colors
///
/// Drawing stops at the first error; calls already issued stay on the surface.
pub fn draw_node<C: DrawingContext + ?Sized>(
    node: &MathNode,
    parameters: &RenderingParameters,
    context: &mut C,
) -> Result<()> {
    tracing::trace!(kind = node.kind(), name = node.name(), "draw node");
    match node {
        MathNode::Terminal(n) => {
            draw_terminal_node(n, parameters, context);
            Ok(())
        }
        MathNode::NonTerminal(n) => draw_non_terminal_node(n, parameters, context),
        MathNode::Rule(n) => draw_rule_node(n, parameters, context),
    }
}

fn draw_terminal_node<C: DrawingContext + ?Sized>(
    node: &TerminalNode,
    parameters: &RenderingParameters,
    context: &mut C,
) {
    context.draw_rectangle(&node.bounding_box, parameters);
}

fn draw_non_terminal_node<C: DrawingContext + ?Sized>(
    node: &NonTerminalNode,
    parameters: &RenderingParameters,
    context: &mut C,
) -> Result<()> {
    let Some(candidate) = node.selected() else {
        return Err(Error::UnresolvedCandidate {
            name: node.name.clone(),
        });
    };
    // No diagnostic box here even when boxes are shown; only rules outline themselves.
    draw_node(candidate, parameters, context)
}

fn draw_rule_node<C: DrawingContext + ?Sized>(
    node: &RuleNode,
    parameters: &RenderingParameters,
    context: &mut C,
) -> Result<()> {
    for child in &node.children {
        draw_node(child, parameters, context)?;
    }

    if parameters.show_bounding_boxes() {
        let overlay = RenderingParameters::rule_overlay();
        context.draw_rectangle(&node.bounding_box, &overlay);
    }
    Ok(())
}
