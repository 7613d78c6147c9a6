//! Box-edge style resolution for a flexbox layout engine.
//!
//! Style values (numbers, `"50%"`, `"auto"`) are parsed by [`style`], applied
//! to engine handles by the setters in [`layout`], and read back with
//! [`layout::resolve_dimension`] once the engine has solved the tree.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{LayoutPipeline, PipelineBuilder};

pub use quire_layout as layout;
pub use quire_style as style;
pub use quire_types as types;

pub use quire_layout::{
    EdgeSetter, EngineError, EngineHandle, LayoutConfig, LayoutError, Node, NodeKind,
    apply_to_all_edges, apply_to_edge, resolve_dimension,
};
pub use quire_style::{BoxProperty, StyleParseError, StyleValue};
pub use quire_types::{Edge, Edges, Size};
