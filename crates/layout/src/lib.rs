use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Taffy error: {0}")]
    Taffy(String),
}

pub mod apply;
pub mod config;
pub mod dimension;
pub mod engine;
pub mod margin;
pub mod node;
pub mod node_kind;
pub mod padding;
pub mod position;
pub mod recording;
pub mod styles;
pub mod taffy_engine;

pub use self::apply::{EdgeSetter, EdgeTarget, apply_to_all_edges, apply_to_edge};
pub use self::config::LayoutConfig;
pub use self::dimension::{resolve_dimension, resolve_edges, resolve_margin, resolve_padding};
pub use self::engine::{EngineError, EngineHandle, SharedHandle};
pub use self::margin::{set_margin, set_margin_bottom, set_margin_left, set_margin_right, set_margin_top};
pub use self::node::Node;
pub use self::node_kind::NodeKind;
pub use self::padding::{
    set_padding, set_padding_bottom, set_padding_left, set_padding_right, set_padding_top,
};
pub use self::position::{set_bottom, set_left, set_position, set_right, set_top};
pub use self::recording::{EngineCall, RecordingHandle};
pub use self::styles::{apply_box_style, apply_box_styles};
pub use self::taffy_engine::{TaffyEngine, TaffyHandle};

// Re-export the value types every caller of the setters needs
pub use quire_style::{BoxProperty, StyleValue};
pub use quire_types::{BoxGeometry, Edge, Edges, Size};

#[cfg(test)]
mod apply_test;
#[cfg(test)]
mod test_utils;
