//! The capability surface the layout core needs from a layout engine.
use quire_style::BoxProperty;
use quire_types::Edge;
use std::fmt::Debug;
use std::rc::Rc;
use thiserror::Error;

/// Failures reported by an engine handle. The core passes these through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("The engine does not support 'auto' for {0} on edge {1}.")]
    UnsupportedAuto(BoxProperty, Edge),
    #[error("Engine handle no longer refers to a live engine node.")]
    StaleHandle,
    #[error("Engine error: {0}")]
    Backend(String),
}

/// A node inside an external layout engine.
///
/// Setters take `&self`: handles are shared between the tree that owns them
/// and the engine, so implementations mutate through interior mutability.
/// Percentages are passed as written, `50.0` for `"50%"`.
pub trait EngineHandle: Debug {
    fn set_exact_value(&self, property: BoxProperty, edge: Edge, magnitude: f32)
    -> Result<(), EngineError>;

    fn set_percentage(&self, property: BoxProperty, edge: Edge, magnitude: f32)
    -> Result<(), EngineError>;

    fn set_auto(&self, property: BoxProperty, edge: Edge) -> Result<(), EngineError>;

    fn computed_width(&self) -> Result<f32, EngineError>;

    fn computed_height(&self) -> Result<f32, EngineError>;

    /// The solved value of one edge of `property`, in points.
    fn computed_edge(&self, property: BoxProperty, edge: Edge) -> Result<f32, EngineError>;
}

/// A handle shared between a node and the engine that created it.
pub type SharedHandle = Rc<dyn EngineHandle>;
