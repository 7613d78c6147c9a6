//! An in-memory engine handle that records every call made to it.
//!
//! Useful for tracing what a style pass would send to a real engine, and as
//! the stand-in engine in tests.
use crate::engine::{EngineError, EngineHandle};
use quire_style::BoxProperty;
use quire_types::{Edge, Size};
use std::cell::{Cell, RefCell};

/// One primitive call received by a [`RecordingHandle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCall {
    Exact(BoxProperty, Edge, f32),
    Percent(BoxProperty, Edge, f32),
    Auto(BoxProperty, Edge),
}

impl EngineCall {
    pub fn edge(&self) -> Edge {
        match self {
            EngineCall::Exact(_, edge, _)
            | EngineCall::Percent(_, edge, _)
            | EngineCall::Auto(_, edge) => *edge,
        }
    }

    pub fn property(&self) -> BoxProperty {
        match self {
            EngineCall::Exact(property, ..)
            | EngineCall::Percent(property, ..)
            | EngineCall::Auto(property, _) => *property,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingHandle {
    calls: RefCell<Vec<EngineCall>>,
    computed_size: Cell<Size>,
    fail_on: Option<Edge>,
}

impl RecordingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_computed_size(width: f32, height: f32) -> Self {
        Self {
            computed_size: Cell::new(Size::new(width, height)),
            ..Default::default()
        }
    }

    /// A handle that rejects every write to `edge` with [`EngineError::Backend`].
    pub fn failing_on(edge: Edge) -> Self {
        Self {
            fail_on: Some(edge),
            ..Default::default()
        }
    }

    /// Changes what the computed-size queries report, as a re-solve would.
    pub fn set_computed_size(&self, size: Size) {
        self.computed_size.set(size);
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: EngineCall) -> Result<(), EngineError> {
        if self.fail_on == Some(call.edge()) {
            return Err(EngineError::Backend(format!(
                "rejected {} write on edge {}",
                call.property(),
                call.edge()
            )));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl EngineHandle for RecordingHandle {
    fn set_exact_value(
        &self,
        property: BoxProperty,
        edge: Edge,
        magnitude: f32,
    ) -> Result<(), EngineError> {
        self.record(EngineCall::Exact(property, edge, magnitude))
    }

    fn set_percentage(
        &self,
        property: BoxProperty,
        edge: Edge,
        magnitude: f32,
    ) -> Result<(), EngineError> {
        self.record(EngineCall::Percent(property, edge, magnitude))
    }

    fn set_auto(&self, property: BoxProperty, edge: Edge) -> Result<(), EngineError> {
        self.record(EngineCall::Auto(property, edge))
    }

    fn computed_width(&self) -> Result<f32, EngineError> {
        Ok(self.computed_size.get().width)
    }

    fn computed_height(&self) -> Result<f32, EngineError> {
        Ok(self.computed_size.get().height)
    }

    /// The last exact value written to that edge, zero otherwise.
    fn computed_edge(&self, property: BoxProperty, edge: Edge) -> Result<f32, EngineError> {
        let calls = self.calls.borrow();
        let last = calls
            .iter()
            .rev()
            .find(|call| call.property() == property && call.edge() == edge);
        Ok(match last {
            Some(EngineCall::Exact(_, _, magnitude)) => *magnitude,
            _ => 0.0,
        })
    }
}
