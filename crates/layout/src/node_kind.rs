use serde::{Deserialize, Serialize};

/// Represents the specific type of a document node.
///
/// The layout core never branches on it; it exists for the layers that build
/// and paint the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Document,
    Page,
    #[default]
    View,
    Text,
    Image,
    Link,
    Note,
    Canvas,
    Svg,
}

impl NodeKind {
    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Page => "PAGE",
            NodeKind::View => "VIEW",
            NodeKind::Text => "TEXT",
            NodeKind::Image => "IMAGE",
            NodeKind::Link => "LINK",
            NodeKind::Note => "NOTE",
            NodeKind::Canvas => "CANVAS",
            NodeKind::Svg => "SVG",
        }
    }
}
