//! Pushes a node's box-edge style values into its engine handle.
use crate::apply::{EdgeSetter, EdgeTarget};
use crate::engine::EngineError;
use crate::node::Node;
use quire_style::BoxProperty;
use quire_types::Edge;

/// Property families written by [`apply_box_style`], in application order.
pub const BOX_PROPERTIES: [BoxProperty; 3] = [
    BoxProperty::Margin,
    BoxProperty::Padding,
    BoxProperty::Position,
];

/// Applies every margin, padding and position value of the node's own style.
///
/// Edges are visited Top, Right, Bottom, Left within each property. Edges the
/// style leaves unset are skipped, so the engine keeps its defaults for them.
pub fn apply_box_style(node: &Node) -> Result<&Node, EngineError> {
    if !node.is_bound() {
        return Ok(node);
    }
    for property in BOX_PROPERTIES {
        for edge in Edge::ALL {
            let value = node.style.box_model.value(property, edge);
            if let Some(value) = value {
                log::trace!("Applying style {} = {}", property.style_key(edge), value);
            }
            EdgeSetter::new(property, EdgeTarget::Single(edge), value).apply(node)?;
        }
    }
    Ok(node)
}

/// [`apply_box_style`] for a node and all of its descendants, parents first.
pub fn apply_box_styles(node: &Node) -> Result<&Node, EngineError> {
    apply_box_style(node)?;
    for child in &node.children {
        apply_box_styles(child)?;
    }
    Ok(node)
}
