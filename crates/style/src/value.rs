//! The value a single box edge can take.
use crate::parsers::{StyleParseError, parse_value_str};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A box-edge style value after it has crossed the parsing boundary.
///
/// An absent value is `Option::<StyleValue>::None` at every call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// An absolute magnitude in points.
    Exact(f32),
    /// A magnitude relative to the containing box, as written (`50.0` for `"50%"`).
    Percent(f32),
    /// Left to the layout engine.
    Auto,
}

impl StyleValue {
    pub fn exact(&self) -> Option<f32> {
        match self {
            StyleValue::Exact(v) => Some(*v),
            _ => None,
        }
    }

}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Exact(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Exact(value as f32)
    }
}

impl FromStr for StyleValue {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value_str(s)
    }
}

impl TryFrom<&str> for StyleValue {
    type Error = StyleParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_value_str(s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Exact(v) => write!(f, "{}", v),
            StyleValue::Percent(v) => write!(f, "{}%", v),
            StyleValue::Auto => f.write_str("auto"),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StyleValue::Exact(v) => serializer.serialize_f32(*v),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StyleValueDef {
            Number(f32),
            Str(String),
        }

        match StyleValueDef::deserialize(deserializer)? {
            StyleValueDef::Number(v) if !v.is_finite() => Err(de::Error::custom(format!(
                "Exact value {} is out of range for a box edge",
                v
            ))),
            StyleValueDef::Number(v) => Ok(StyleValue::Exact(v)),
            StyleValueDef::Str(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
