//! The box-edge portion of a node's style record.
use crate::parsers::parse_shorthand_edges;
use crate::property::BoxProperty;
use crate::value::StyleValue;
use quire_types::{Edge, Edges};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A 1-4 value shorthand such as `margin: "10 auto"`, expanded per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShorthand(pub Edges<StyleValue>);

impl BoxShorthand {
    pub fn get(&self, edge: Edge) -> StyleValue {
        *self.0.get(edge)
    }
}

impl From<StyleValue> for BoxShorthand {
    fn from(value: StyleValue) -> Self {
        Self(Edges::all(value))
    }
}

impl Serialize for BoxShorthand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Edges {
            top,
            right,
            bottom,
            left,
        } = self.0;
        if top == right && top == bottom && top == left {
            return top.serialize(serializer);
        }
        serializer.collect_str(&format_args!("{} {} {} {}", top, right, bottom, left))
    }
}

impl<'de> Deserialize<'de> for BoxShorthand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ShorthandDef {
            Number(f32),
            Str(String),
        }

        match ShorthandDef::deserialize(deserializer)? {
            ShorthandDef::Number(v) => Ok(StyleValue::Exact(v).into()),
            ShorthandDef::Str(s) => parse_shorthand_edges(&s)
                .map(BoxShorthand)
                .map_err(de::Error::custom),
        }
    }
}

/// Margin, padding and position values as written in a style record.
///
/// Several keys can address the same edge. [`BoxStyle::value`] resolves them,
/// most specific first: `marginTop`, then `marginVertical`, then `margin`.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxShorthand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<StyleValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxShorthand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<StyleValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StyleValue>,
}

impl BoxStyle {
    /// The value that applies to `edge` of `property`, if any key sets it.
    pub fn value(&self, property: BoxProperty, edge: Edge) -> Option<StyleValue> {
        match property {
            BoxProperty::Margin => self
                .margin_edge(edge)
                .or(if edge.is_vertical() {
                    self.margin_vertical
                } else {
                    self.margin_horizontal
                })
                .or(self.margin.map(|m| m.get(edge))),
            BoxProperty::Padding => self
                .padding_edge(edge)
                .or(if edge.is_vertical() {
                    self.padding_vertical
                } else {
                    self.padding_horizontal
                })
                .or(self.padding.map(|p| p.get(edge))),
            BoxProperty::Position => match edge {
                Edge::Top => self.top,
                Edge::Right => self.right,
                Edge::Bottom => self.bottom,
                Edge::Left => self.left,
            },
        }
    }

    /// Resolved values for every edge of `property`.
    pub fn edges(&self, property: BoxProperty) -> Edges<Option<StyleValue>> {
        Edges::from_fn(|edge| self.value(property, edge))
    }

    fn margin_edge(&self, edge: Edge) -> Option<StyleValue> {
        match edge {
            Edge::Top => self.margin_top,
            Edge::Right => self.margin_right,
            Edge::Bottom => self.margin_bottom,
            Edge::Left => self.margin_left,
        }
    }

    fn padding_edge(&self, edge: Edge) -> Option<StyleValue> {
        match edge {
            Edge::Top => self.padding_top,
            Edge::Right => self.padding_right,
            Edge::Bottom => self.padding_bottom,
            Edge::Left => self.padding_left,
        }
    }
}

/// A node's complete style record.
///
/// Only the box-edge keys are typed; everything else is carried through as
/// raw JSON for the layers that own it.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Style {
    #[serde(flatten)]
    pub box_model: BoxStyle,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Style {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
