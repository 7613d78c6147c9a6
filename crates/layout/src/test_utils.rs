use crate::engine::SharedHandle;
use crate::node::Node;
use crate::node_kind::NodeKind;
use crate::recording::RecordingHandle;
use quire_types::BoxGeometry;
use std::rc::Rc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A view bound to a fresh recording handle. The handle is returned too so
/// tests can inspect the calls it received.
pub fn bound_view() -> (Node, Rc<RecordingHandle>) {
    bound_view_with(RecordingHandle::new())
}

pub fn bound_view_with(handle: RecordingHandle) -> (Node, Rc<RecordingHandle>) {
    let handle = Rc::new(handle);
    let shared: SharedHandle = handle.clone();
    (Node::new(NodeKind::View).with_engine(shared), handle)
}

/// A view with no engine handle but with stored geometry.
pub fn unbound_view() -> Node {
    Node::new(NodeKind::View).with_box(BoxGeometry {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
        width: 10.0,
        height: 20.0,
    })
}
