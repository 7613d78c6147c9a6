//! Named inset setters for positioned nodes.
use crate::apply::{EdgeSetter, EdgeTarget};
use quire_style::{BoxProperty, StyleValue};
use quire_types::Edge;

fn position(target: EdgeTarget, value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    EdgeSetter::new(BoxProperty::Position, target, value.into())
}

pub fn set_top(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    position(EdgeTarget::Single(Edge::Top), value)
}

pub fn set_right(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    position(EdgeTarget::Single(Edge::Right), value)
}

pub fn set_bottom(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    position(EdgeTarget::Single(Edge::Bottom), value)
}

pub fn set_left(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    position(EdgeTarget::Single(Edge::Left), value)
}

pub fn set_position(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    position(EdgeTarget::All, value)
}
