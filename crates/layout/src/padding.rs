//! Named padding setters.
//!
//! The engine decides whether `auto` is meaningful for padding; the `taffy`
//! backend rejects it with [`EngineError::UnsupportedAuto`](crate::EngineError).
use crate::apply::{EdgeSetter, EdgeTarget};
use quire_style::{BoxProperty, StyleValue};
use quire_types::Edge;

fn padding(target: EdgeTarget, value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    EdgeSetter::new(BoxProperty::Padding, target, value.into())
}

pub fn set_padding_top(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    padding(EdgeTarget::Single(Edge::Top), value)
}

pub fn set_padding_right(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    padding(EdgeTarget::Single(Edge::Right), value)
}

pub fn set_padding_bottom(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    padding(EdgeTarget::Single(Edge::Bottom), value)
}

pub fn set_padding_left(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    padding(EdgeTarget::Single(Edge::Left), value)
}

pub fn set_padding(value: impl Into<Option<StyleValue>>) -> EdgeSetter {
    padding(EdgeTarget::All, value)
}
