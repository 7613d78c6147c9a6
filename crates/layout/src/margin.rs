//! Named margin setters.
use crate::apply::{EdgeSetter, apply_to_all_edges, apply_to_edge};
use quire_style::StyleValue;
use quire_types::Edge;

pub fn set_margin_top(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    apply_to_edge(Edge::Top, value)
}

pub fn set_margin_right(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    apply_to_edge(Edge::Right, value)
}

pub fn set_margin_bottom(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    apply_to_edge(Edge::Bottom, value)
}

pub fn set_margin_left(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    apply_to_edge(Edge::Left, value)
}

pub fn set_margin(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    apply_to_all_edges(value)
}

