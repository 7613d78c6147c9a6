use quire_layout::{EngineError, LayoutError};
use thiserror::Error;

/// Errors from running a node tree through the layout pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Node tree could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

impl From<EngineError> for PipelineError {
    fn from(e: EngineError) -> Self {
        PipelineError::Layout(LayoutError::Engine(e))
    }
}
