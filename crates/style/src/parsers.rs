//! Low-level nom parser functions for box-edge style values.
//!
//! Raw style data enters the crate here. Every string that reaches a setter
//! has already been turned into a [`StyleValue`], so a malformed value is
//! rejected once, at the boundary, for every edge and property alike.

use crate::value::StyleValue;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::sequence::terminated;
use quire_types::Edges;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Malformed percentage '{0}': expected a number before '%'")]
    MalformedPercentage(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| match s.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(()),
        },
    )
    .parse(input)
}

// --- Unit & Value Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, magnitude) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, magnitude * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a percentage (e.g., "50%"). The magnitude is kept as written.
pub fn parse_percentage(input: &str) -> IResult<&str, f32> {
    terminated(parse_f32, char('%')).parse(input)
}

/// Parses a single box-edge value: `auto`, a percentage, or a length.
pub fn parse_style_value(input: &str) -> IResult<&str, StyleValue> {
    alt((
        value(StyleValue::Auto, tag("auto")),
        map(parse_percentage, StyleValue::Percent),
        map(parse_length, StyleValue::Exact),
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Converts one raw style string into a [`StyleValue`].
///
/// A trailing `%` commits the input to being a percentage: if the prefix is
/// not a number the whole value is rejected with
/// [`StyleParseError::MalformedPercentage`] rather than coerced.
pub fn parse_value_str(input: &str) -> Result<StyleValue, StyleParseError> {
    let trimmed = input.trim();
    if let Some(prefix) = trimmed.strip_suffix('%') {
        return run_parser(parse_f32, prefix)
            .map(StyleValue::Percent)
            .map_err(|_| StyleParseError::MalformedPercentage(input.to_string()));
    }
    run_parser(parse_style_value, trimmed).map_err(|_| StyleParseError::InvalidValue {
        property: "box-edge".to_string(),
        value: input.to_string(),
    })
}

/// Parses CSS-style box shorthand (1, 2, 3, or 4 values), e.g. `"10 auto"`.
pub fn parse_shorthand_edges(input: &str) -> Result<Edges<StyleValue>, StyleParseError> {
    let parts = input
        .split_whitespace()
        .map(parse_value_str)
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [all] => Ok(Edges::all(*all)),
        [vertical, horizontal] => Ok(Edges {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        }),
        [top, horizontal, bottom] => Ok(Edges {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        }),
        [top, right, bottom, left] => Ok(Edges {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for box shorthand: got {}, expected 1 to 4.",
            parts.len()
        ))),
    }
}
