//! Reads solved geometry back out of a node.
use crate::engine::EngineError;
use crate::node::Node;
use quire_style::BoxProperty;
use quire_types::{Edges, Size};

/// The node's solved width and height.
///
/// Unbound nodes report zero. `box_geometry` is not consulted:
/// a node without an engine handle has no current layout to report.
pub fn resolve_dimension(node: &Node) -> Result<Size, EngineError> {
    match node.engine() {
        Some(handle) => Ok(Size::new(handle.computed_width()?, handle.computed_height()?)),
        None => Ok(Size::zero()),
    }
}

/// Solved values for each edge of `property`.
///
/// Bound nodes report what the engine computed. Unbound nodes fall back to the
/// exact values in their style record; percentages, `auto` and unset edges
/// count as zero since they cannot be resolved without a layout.
pub fn resolve_edges(node: &Node, property: BoxProperty) -> Result<Edges<f32>, EngineError> {
    match node.engine() {
        Some(handle) => Edges::try_from_fn(|edge| handle.computed_edge(property, edge)),
        None => Ok(Edges::from_fn(|edge| {
            node.style
                .box_model
                .value(property, edge)
                .and_then(|value| value.exact())
                .unwrap_or(0.0)
        })),
    }
}

pub fn resolve_margin(node: &Node) -> Result<Edges<f32>, EngineError> {
    resolve_edges(node, BoxProperty::Margin)
}

pub fn resolve_padding(node: &Node) -> Result<Edges<f32>, EngineError> {
    resolve_edges(node, BoxProperty::Padding)
}
