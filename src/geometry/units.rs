//! Length units and conversions to points.
//!
//! Word-processing markup mixes three incompatible units: English Metric
//! Units for drawing geometry, twentieths of a point ("twips") for
//! indentation and spacing, and points. Everything in this crate is
//! normalized to points (1/72 inch) at the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Twentieths of a point per point.
pub const TWIPS_PER_POINT: f32 = 20.0;

/// English Metric Units per inch.
pub const EMU_PER_INCH: f32 = 914_400.0;

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default screen resolution used for pixel conversions.
pub const DEFAULT_DPI: f32 = 96.0;

/// Convert twentieths of a point to points.
pub fn twips_to_points(value: f32) -> f32 {
    value / TWIPS_PER_POINT
}

/// Convert points to twentieths of a point.
pub fn points_to_twips(value: f32) -> f32 {
    value * TWIPS_PER_POINT
}

/// Convert English Metric Units to points.
pub fn emu_to_points(value: f32) -> f32 {
    value * POINTS_PER_INCH / EMU_PER_INCH
}

/// Convert points to English Metric Units.
pub fn points_to_emu(value: f32) -> f32 {
    value * EMU_PER_INCH / POINTS_PER_INCH
}

/// Convert pixels to points at the given resolution.
///
/// A non-positive `dpi` falls back to [`DEFAULT_DPI`].
pub fn pixels_to_points(value: f32, dpi: f32) -> f32 {
    let dpi = if dpi > 0.0 { dpi } else { DEFAULT_DPI };
    value * POINTS_PER_INCH / dpi
}

/// Convert half-points (the font size storage unit) to points.
pub fn half_points_to_points(value: f32) -> f32 {
    value / 2.0
}

/// Convert inches to points.
pub fn inches_to_points(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// A unit of length understood by the normalizers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Points (1/72 inch)
    #[default]
    Points,
    /// Twentieths of a point
    Twips,
    /// English Metric Units (914400 per inch)
    Emu,
    /// Pixels at 96 dpi
    Pixels,
    /// Half-points (font sizes)
    HalfPoints,
    /// Inches
    Inches,
    /// Centimeters
    Centimeters,
    /// Millimeters
    Millimeters,
}

impl LengthUnit {
    /// Parse a unit suffix or tag such as `"pt"`, `"twips"`, `"dxa"` or `"emu"`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pt" | "pts" | "point" | "points" => Ok(LengthUnit::Points),
            "twip" | "twips" | "dxa" | "tw" => Ok(LengthUnit::Twips),
            "emu" | "emus" => Ok(LengthUnit::Emu),
            "px" | "pixel" | "pixels" => Ok(LengthUnit::Pixels),
            "hp" | "half-point" | "half-points" | "halfpoints" => Ok(LengthUnit::HalfPoints),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            "cm" => Ok(LengthUnit::Centimeters),
            "mm" => Ok(LengthUnit::Millimeters),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }

    /// Convert a value expressed in this unit to points.
    pub fn to_points(self, value: f32) -> f32 {
        match self {
            LengthUnit::Points => value,
            LengthUnit::Twips => twips_to_points(value),
            LengthUnit::Emu => emu_to_points(value),
            LengthUnit::Pixels => pixels_to_points(value, DEFAULT_DPI),
            LengthUnit::HalfPoints => half_points_to_points(value),
            LengthUnit::Inches => inches_to_points(value),
            LengthUnit::Centimeters => value * POINTS_PER_INCH / 2.54,
            LengthUnit::Millimeters => value * POINTS_PER_INCH / 25.4,
        }
    }
}
