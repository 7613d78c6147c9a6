use quire_types::Edge;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of style properties that assigns one value per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxProperty {
    Margin,
    Padding,
    /// The `top`/`right`/`bottom`/`left` insets of a positioned node.
    Position,
}

impl BoxProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxProperty::Margin => "margin",
            BoxProperty::Padding => "padding",
            BoxProperty::Position => "position",
        }
    }

    /// The camelCase style key for one edge, e.g. `marginTop` or `left`.
    pub fn style_key(&self, edge: Edge) -> &'static str {
        match (self, edge) {
            (BoxProperty::Margin, Edge::Top) => "marginTop",
            (BoxProperty::Margin, Edge::Right) => "marginRight",
            (BoxProperty::Margin, Edge::Bottom) => "marginBottom",
            (BoxProperty::Margin, Edge::Left) => "marginLeft",
            (BoxProperty::Padding, Edge::Top) => "paddingTop",
            (BoxProperty::Padding, Edge::Right) => "paddingRight",
            (BoxProperty::Padding, Edge::Bottom) => "paddingBottom",
            (BoxProperty::Padding, Edge::Left) => "paddingLeft",
            (BoxProperty::Position, edge) => edge.as_str(),
        }
    }
}

impl fmt::Display for BoxProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
