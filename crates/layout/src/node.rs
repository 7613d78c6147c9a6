use crate::engine::SharedHandle;
use crate::node_kind::NodeKind;
use quire_style::Style;
use quire_types::BoxGeometry;
use serde::Deserialize;

/// A node of the document tree as the layout layer sees it.
///
/// Setters and readers in this crate borrow a `Node` and hand the same
/// reference back; they act only on the attached engine handle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub children: Vec<Node>,
    /// Present once the node has been bound to a layout engine.
    #[serde(skip)]
    pub engine: Option<SharedHandle>,
    /// Geometry from an earlier pass. Never written by this crate.
    #[serde(rename = "box", default)]
    pub box_geometry: Option<BoxGeometry>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_engine(mut self, engine: SharedHandle) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_box(mut self, geometry: BoxGeometry) -> Self {
        self.box_geometry = Some(geometry);
        self
    }

    pub fn engine(&self) -> Option<&SharedHandle> {
        self.engine.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.engine.is_some()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
