//! Normalization of loosely typed lengths, margins, spacing and font sizes.
//!
//! Source values arrive as bare numbers, unit-tagged maps
//! (`{"value": 720, "unit": "twips"}`) or unit-suffixed strings (`"1in"`).
//! Everything is converted to points; unparsable input yields `None` or a
//! zero default rather than an error.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::geometry::{half_points_to_points, twips_to_points, LengthUnit, Margins};
use crate::model::Spacing;

/// Untagged magnitudes above this are taken to be twips.
pub const TWIPS_THRESHOLD: f32 = 50.0;

/// Integer font sizes above this without a unit are taken to be half-points.
pub const HALF_POINT_THRESHOLD: f32 = 15.0;

fn quantity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*([A-Za-z%-]*)\s*$")
            .expect("valid quantity pattern")
    })
}

/// Split `"12.5pt"` into `(12.5, Some("pt"))`.
fn parse_quantity(text: &str) -> Option<(f32, Option<&str>)> {
    let caps = quantity_regex().captures(text)?;
    let value = caps.get(1)?.as_str().parse::<f32>().ok()?;
    let unit = caps.get(2).map(|m| m.as_str()).filter(|u| !u.is_empty());
    Some((value, unit))
}

fn untagged_length(value: f32) -> f32 {
    if value.abs() > TWIPS_THRESHOLD {
        twips_to_points(value)
    } else {
        value
    }
}

fn tagged_length(value: f32, unit: &str) -> Option<f32> {
    match LengthUnit::parse(unit) {
        Ok(unit) => Some(unit.to_points(value)),
        Err(e) => {
            log::debug!("{}; ignoring length {}", e, value);
            None
        }
    }
}

fn number(value: &Value) -> Option<f32> {
    value.as_f64().map(|v| v as f32)
}

/// Normalize a length to points.
///
/// Untagged magnitudes above [`TWIPS_THRESHOLD`] are read as twips.
pub fn normalize_length(value: &Value) -> Option<f32> {
    match value {
        Value::Number(_) => number(value).map(untagged_length),
        Value::String(text) => {
            let (amount, unit) = parse_quantity(text)?;
            match unit {
                Some(unit) => tagged_length(amount, unit),
                None => Some(untagged_length(amount)),
            }
        }
        Value::Object(map) => {
            let amount = map.get("value").and_then(|v| match v {
                Value::String(s) => s.trim().parse::<f32>().ok(),
                other => number(other),
            })?;
            match map.get("unit").and_then(Value::as_str) {
                Some(unit) => tagged_length(amount, unit),
                None => Some(untagged_length(amount)),
            }
        }
        _ => None,
    }
}

fn length_field(map: &Map<String, Value>, keys: &[&str]) -> f32 {
    keys.iter()
        .find_map(|k| map.get(*k).and_then(normalize_length))
        .unwrap_or(0.0)
}

/// Normalize page margins.
///
/// A single length applies to all four sides; a map supplies each side.
pub fn normalize_margins(value: &Value) -> Margins {
    match value {
        Value::Object(map) if !map.contains_key("value") => Margins::new(
            length_field(map, &["top"]),
            length_field(map, &["bottom"]),
            length_field(map, &["left", "start"]),
            length_field(map, &["right", "end"]),
        ),
        other => normalize_length(other)
            .map(Margins::uniform)
            .unwrap_or_default(),
    }
}

/// Normalize paragraph spacing.
///
/// A single length applies to both sides; a map supplies `before` and
/// `after` (or `space_before` / `space_after`).
pub fn normalize_spacing(value: &Value) -> Spacing {
    match value {
        Value::Object(map) if !map.contains_key("value") => Spacing::new(
            length_field(map, &["before", "space_before"]),
            length_field(map, &["after", "space_after"]),
        ),
        other => normalize_length(other)
            .map(|v| Spacing::new(v, v))
            .unwrap_or_default(),
    }
}

/// Normalize a font size to points.
///
/// Integers above [`HALF_POINT_THRESHOLD`] without a unit suffix are
/// half-points, as stored by word-processing markup.
pub fn normalize_font_size(value: &Value) -> Option<f32> {
    let (amount, unit) = match value {
        Value::Number(n) => (n.as_f64()? as f32, None),
        Value::String(text) => {
            let (amount, unit) = parse_quantity(text)?;
            (amount, unit.map(str::to_string))
        }
        Value::Object(map) => (
            map.get("value").and_then(number)?,
            map.get("unit").and_then(Value::as_str).map(str::to_string),
        ),
        _ => return None,
    };

    match unit {
        Some(unit) => tagged_length(amount, &unit),
        None if amount.fract() == 0.0 && amount > HALF_POINT_THRESHOLD => {
            Some(half_points_to_points(amount))
        }
        None => Some(amount),
    }
}
