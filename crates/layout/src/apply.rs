//! Turns box-edge style values into engine calls.
//!
//! Every setter in this crate (the named margin, padding and position
//! helpers, and the all-edges aggregates) is an [`EdgeSetter`], and every
//! engine call they make goes through [`EdgeSetter::apply`].

use crate::engine::{EngineError, EngineHandle};
use crate::node::Node;
use quire_style::{BoxProperty, StyleValue};
use quire_types::Edge;

/// Which edges a setter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget {
    Single(Edge),
    /// Top, Right, Bottom, Left, in that order.
    All,
}

impl EdgeTarget {
    pub fn edges(&self) -> &'static [Edge] {
        match self {
            EdgeTarget::Single(Edge::Top) => &[Edge::Top],
            EdgeTarget::Single(Edge::Right) => &[Edge::Right],
            EdgeTarget::Single(Edge::Bottom) => &[Edge::Bottom],
            EdgeTarget::Single(Edge::Left) => &[Edge::Left],
            EdgeTarget::All => &Edge::ALL,
        }
    }
}

/// A reusable `Node -> Node` setter for one box-edge property.
///
/// Applying it never copies or mutates the node. When the node has no engine
/// handle, or the value is absent, it returns the node without calling the
/// engine. Otherwise it makes exactly one engine call per targeted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSetter {
    property: BoxProperty,
    target: EdgeTarget,
    value: Option<StyleValue>,
}

impl EdgeSetter {
    pub fn new(property: BoxProperty, target: EdgeTarget, value: Option<StyleValue>) -> Self {
        Self {
            property,
            target,
            value,
        }
    }

    pub fn property(&self) -> BoxProperty {
        self.property
    }

    pub fn target(&self) -> EdgeTarget {
        self.target
    }

    pub fn value(&self) -> Option<StyleValue> {
        self.value
    }

    /// Applies the value to the node's engine handle and returns the same node.
    ///
    /// The all-edges form writes edges one at a time. If the engine rejects
    /// an edge, the edges before it stay written and the error is returned
    /// as the engine reported it.
    pub fn apply<'n>(&self, node: &'n Node) -> Result<&'n Node, EngineError> {
        let Some(handle) = node.engine() else {
            log::trace!(
                "Skipping {} on {}: node is not bound to an engine.",
                self.property,
                node.kind.as_str()
            );
            return Ok(node);
        };
        let Some(value) = self.value else {
            return Ok(node);
        };

        for &edge in self.target.edges() {
            apply_edge(handle.as_ref(), self.property, edge, value)?;
        }
        Ok(node)
    }
}

fn apply_edge(
    handle: &dyn EngineHandle,
    property: BoxProperty,
    edge: Edge,
    value: StyleValue,
) -> Result<(), EngineError> {
    log::trace!("Setting {} {} to {}", property, edge, value);
    match value {
        StyleValue::Auto => handle.set_auto(property, edge),
        StyleValue::Percent(magnitude) => handle.set_percentage(property, edge, magnitude),
        StyleValue::Exact(magnitude) => handle.set_exact_value(property, edge, magnitude),
    }
}

/// Margin setter for a single edge.
pub fn apply_to_edge(edge: Edge, value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    EdgeSetter::new(BoxProperty::Margin, EdgeTarget::Single(edge), value.into())
}

/// Margin setter for every edge, applied Top, Right, Bottom, Left.
pub fn apply_to_all_edges(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    EdgeSetter::new(BoxProperty::Margin, EdgeTarget::All, value.into())
}
