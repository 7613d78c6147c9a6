pub mod box_style;
pub mod parsers;
pub mod property;
pub mod value;

pub use box_style::{BoxShorthand, BoxStyle, Style};
pub use parsers::StyleParseError;
pub use property::BoxProperty;
pub use value::StyleValue;
