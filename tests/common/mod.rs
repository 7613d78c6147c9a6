pub mod fixtures;

use quire::layout::{RecordingHandle, SharedHandle};
use quire::{Node, NodeKind};
use std::rc::Rc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A view bound to a recording handle, plus the handle for inspection.
pub fn recorded_view(handle: RecordingHandle) -> (Node, Rc<RecordingHandle>) {
    let handle = Rc::new(handle);
    let shared: SharedHandle = handle.clone();
    (Node::new(NodeKind::View).with_engine(shared), handle)
}
