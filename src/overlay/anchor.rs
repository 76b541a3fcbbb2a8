//! Anchor information extraction.
//!
//! Floating objects reach the placement resolver in several shapes: a plain
//! JSON map with the anchor fields at the top level, a map that keeps them
//! in a nested `anchor_info` map, and typed [`AnchoredObject`] records.
//! Each shape implements [`AnchorSource`]; [`extract_anchor_info`] never
//! fails and degrades to an inline anchor with zero size.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::emu_to_points;
use crate::model::Alignment;

/// Values above this magnitude are taken to be EMU rather than points.
pub const EMU_THRESHOLD: f32 = 1000.0;

/// Key of the nested anchor map.
pub const ANCHOR_INFO_KEY: &str = "anchor_info";

/// Convert a raw geometry value, treating large magnitudes as EMU.
pub fn points_or_emu(value: f32) -> f32 {
    if value.abs() > EMU_THRESHOLD {
        emu_to_points(value)
    } else {
        value
    }
}

/// How an object is attached to the text flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    /// Flows with the text like a glyph
    #[default]
    Inline,
    /// Positioned relative to a reference frame
    Floating,
}

impl AnchorKind {
    /// Map a source keyword (`inline`, `anchor`, `floating`).
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "anchor" | "anchored" | "floating" | "float" => AnchorKind::Floating,
            _ => AnchorKind::Inline,
        }
    }
}

/// Horizontal reference frame of an anchor offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HorizontalFrame {
    /// The page edge
    Page,
    /// The left margin
    Margin,
    /// The anchoring block (column, character and anything unknown)
    #[default]
    Column,
}

impl HorizontalFrame {
    /// Map a relative-from keyword. Unknown keywords use the anchoring block.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "page" => HorizontalFrame::Page,
            "margin" | "leftmargin" | "insidemargin" => HorizontalFrame::Margin,
            _ => HorizontalFrame::Column,
        }
    }

    /// Canonical keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            HorizontalFrame::Page => "page",
            HorizontalFrame::Margin => "margin",
            HorizontalFrame::Column => "column",
        }
    }
}

impl From<String> for HorizontalFrame {
    fn from(value: String) -> Self {
        HorizontalFrame::from_keyword(&value)
    }
}

impl From<HorizontalFrame> for String {
    fn from(value: HorizontalFrame) -> Self {
        value.keyword().to_string()
    }
}

/// Vertical reference frame of an anchor offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerticalFrame {
    /// Measured down from the page top (also used for unknown keywords)
    #[default]
    Page,
    /// Measured down from the top margin
    Margin,
    /// Measured from the anchoring paragraph's top
    Paragraph,
    /// Measured from the anchoring line
    Line,
    /// Measured from the anchoring text
    Text,
}

impl VerticalFrame {
    /// Map a relative-from keyword. Unknown keywords are treated as page.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "margin" | "topmargin" => VerticalFrame::Margin,
            "paragraph" => VerticalFrame::Paragraph,
            "line" => VerticalFrame::Line,
            "text" => VerticalFrame::Text,
            _ => VerticalFrame::Page,
        }
    }

    /// Canonical keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            VerticalFrame::Page => "page",
            VerticalFrame::Margin => "margin",
            VerticalFrame::Paragraph => "paragraph",
            VerticalFrame::Line => "line",
            VerticalFrame::Text => "text",
        }
    }

    /// Check if offsets are measured from the anchoring block.
    pub fn is_block_relative(&self) -> bool {
        matches!(
            self,
            VerticalFrame::Paragraph | VerticalFrame::Line | VerticalFrame::Text
        )
    }
}

impl From<String> for VerticalFrame {
    fn from(value: String) -> Self {
        VerticalFrame::from_keyword(&value)
    }
}

impl From<VerticalFrame> for String {
    fn from(value: VerticalFrame) -> Self {
        value.keyword().to_string()
    }
}

/// Offset of a floating object, in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorPosition {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
    /// Horizontal reference frame
    pub relative_from_h: HorizontalFrame,
    /// Vertical reference frame
    pub relative_from_v: VerticalFrame,
    /// Horizontal alignment within the reference frame, replacing `x`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_h: Option<Alignment>,
}

impl AnchorPosition {
    /// Create a position from offsets and reference frames.
    pub fn new(
        x: f32,
        y: f32,
        relative_from_h: HorizontalFrame,
        relative_from_v: VerticalFrame,
    ) -> Self {
        Self {
            x,
            y,
            relative_from_h,
            relative_from_v,
            align_h: None,
        }
    }

    /// Position measured from the page's top-left corner.
    pub fn page(x: f32, y: f32) -> Self {
        Self::new(x, y, HorizontalFrame::Page, VerticalFrame::Page)
    }

    /// Align horizontally instead of using the x offset.
    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.align_h = Some(align);
        self
    }
}

/// Everything the placement resolver needs to know about an anchor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorInfo {
    /// Attachment kind
    pub anchor_type: AnchorKind,
    /// Offset, if the object is positioned
    pub position: Option<AnchorPosition>,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    /// Drawn behind the text
    pub behind_doc: bool,
    /// Text wrapping keyword
    pub wrap: Option<String>,
}

/// Read access to a source of anchor fields.
pub trait AnchorSource {
    /// A top-level field.
    fn field(&self, key: &str) -> Option<Value>;

    /// The nested anchor map, if the source has one.
    fn anchor_map(&self) -> Option<&Map<String, Value>>;

    /// A field, falling back to the nested anchor map.
    fn lookup(&self, key: &str) -> Option<Value> {
        self.field(key)
            .filter(|v| !v.is_null())
            .or_else(|| self.anchor_map().and_then(|m| m.get(key)).cloned())
            .filter(|v| !v.is_null())
    }
}

impl AnchorSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn anchor_map(&self) -> Option<&Map<String, Value>> {
        self.get(ANCHOR_INFO_KEY).and_then(Value::as_object)
    }
}

impl AnchorSource for Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|m| m.field(key))
    }

    fn anchor_map(&self) -> Option<&Map<String, Value>> {
        self.as_object().and_then(|m| m.anchor_map())
    }
}

/// A typed floating object record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchoredObject {
    /// Attachment keyword
    pub anchor_type: Option<String>,
    /// Width, points or EMU
    pub width: Option<f32>,
    /// Height, points or EMU
    pub height: Option<f32>,
    /// Offset
    pub position: Option<AnchorPosition>,
    /// Drawn behind the text
    pub behind_doc: bool,
    /// Text wrapping keyword
    pub wrap: Option<String>,
    /// Nested anchor fields
    pub anchor_info: Option<Map<String, Value>>,
}

impl AnchorSource for AnchoredObject {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "anchor_type" => self.anchor_type.clone().map(Value::from),
            "width" => self.width.map(Value::from),
            "height" => self.height.map(Value::from),
            "position" => self
                .position
                .as_ref()
                .and_then(|p| serde_json::to_value(p).ok()),
            "behind_doc" => Some(Value::Bool(self.behind_doc)),
            "wrap" => self.wrap.clone().map(Value::from),
            _ => None,
        }
    }

    fn anchor_map(&self) -> Option<&Map<String, Value>> {
        self.anchor_info.as_ref()
    }
}

fn as_f32(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn first_of<S: AnchorSource + ?Sized>(source: &S, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|k| source.lookup(k))
}

/// Read a dimension in points.
///
/// A missing or zero direct field falls back to the nested anchor map.
/// Magnitudes above [`EMU_THRESHOLD`] are converted from EMU.
pub fn extract_dimension<S: AnchorSource + ?Sized>(source: &S, key: &str) -> f32 {
    let direct = source
        .field(key)
        .as_ref()
        .and_then(as_f32)
        .filter(|v| *v != 0.0);
    let value = direct.or_else(|| {
        source
            .anchor_map()
            .and_then(|m| m.get(key))
            .and_then(as_f32)
    });
    value.map(points_or_emu).unwrap_or(0.0)
}

fn number_at(map: &Map<String, Value>, keys: &[&str]) -> f32 {
    keys.iter()
        .find_map(|k| map.get(*k).and_then(as_f32))
        .map(points_or_emu)
        .unwrap_or(0.0)
}

fn text_at<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| map.get(*k).and_then(Value::as_str))
}

fn position_from_map(map: &Map<String, Value>) -> AnchorPosition {
    AnchorPosition {
        x: number_at(map, &["x", "offset_x", "h_offset"]),
        y: number_at(map, &["y", "offset_y", "v_offset"]),
        relative_from_h: text_at(map, &["relative_from_h", "relativeFromH", "h_relative"])
            .map(HorizontalFrame::from_keyword)
            .unwrap_or_default(),
        relative_from_v: text_at(map, &["relative_from_v", "relativeFromV", "v_relative"])
            .map(VerticalFrame::from_keyword)
            .unwrap_or_default(),
        align_h: text_at(map, &["align_h", "align"]).map(Alignment::from_keyword),
    }
}

fn extract_position<S: AnchorSource + ?Sized>(source: &S) -> Option<AnchorPosition> {
    if let Some(Value::Object(map)) = source.lookup("position") {
        return Some(position_from_map(&map));
    }

    // Flattened shape: offsets and frames next to the other anchor fields.
    const FLAT_KEYS: [&str; 6] = [
        "offset_x",
        "offset_y",
        "relative_from_h",
        "relative_from_v",
        "h_offset",
        "v_offset",
    ];
    let mut flat = Map::new();
    for key in FLAT_KEYS.iter().chain(["align_h"].iter()) {
        if let Some(value) = source.lookup(key) {
            flat.insert((*key).to_string(), value);
        }
    }
    if FLAT_KEYS.iter().any(|k| flat.contains_key(*k)) {
        Some(position_from_map(&flat))
    } else {
        None
    }
}

/// Extract anchor information from any supported source shape.
pub fn extract_anchor_info<S: AnchorSource + ?Sized>(source: &S) -> AnchorInfo {
    let position = extract_position(source);
    let anchor_type = first_of(source, &["anchor_type", "type"])
        .and_then(|v| v.as_str().map(AnchorKind::from_keyword))
        .unwrap_or(if position.is_some() {
            AnchorKind::Floating
        } else {
            AnchorKind::Inline
        });

    let info = AnchorInfo {
        anchor_type,
        position,
        width: extract_dimension(source, "width"),
        height: extract_dimension(source, "height"),
        behind_doc: first_of(source, &["behind_doc", "behindDoc"])
            .as_ref()
            .and_then(as_bool)
            .unwrap_or(false),
        wrap: first_of(source, &["wrap", "wrap_type"])
            .and_then(|v| v.as_str().map(str::to_string)),
    };
    log::trace!(
        "anchor: {:?} {}x{} positioned={}",
        info.anchor_type,
        info.width,
        info.height,
        info.position.is_some()
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_map() {
        let value = json!({
            "anchor_type": "anchor",
            "width": 100.0,
            "height": 50.0,
            "behind_doc": true,
            "position": {
                "x": 10.0,
                "y": 20.0,
                "relative_from_h": "margin",
                "relative_from_v": "paragraph"
            }
        });
        let info = extract_anchor_info(&value);
        assert_eq!(info.anchor_type, AnchorKind::Floating);
        assert_eq!(info.width, 100.0);
        assert_eq!(info.height, 50.0);
        assert!(info.behind_doc);
        let position = info.position.unwrap();
        assert_eq!(position.relative_from_h, HorizontalFrame::Margin);
        assert_eq!(position.relative_from_v, VerticalFrame::Paragraph);
        assert_eq!(position.y, 20.0);
    }

    #[test]
    fn test_nested_anchor_map() {
        let value = json!({
            "width": 0,
            "anchor_info": {
                "width": 914400,
                "height": 457200,
                "offset_x": 12700,
                "relative_from_h": "page"
            }
        });
        let info = extract_anchor_info(&value);
        assert_eq!(info.width, 72.0);
        assert_eq!(info.height, 36.0);
        let position = info.position.unwrap();
        assert_eq!(position.x, 1.0);
        assert_eq!(position.relative_from_h, HorizontalFrame::Page);
        assert_eq!(position.relative_from_v, VerticalFrame::Page);
    }

    #[test]
    fn test_typed_object() {
        let object = AnchoredObject {
            width: Some(40.0),
            height: Some(0.0),
            position: Some(AnchorPosition::page(5.0, 6.0)),
            anchor_info: json!({"height": 30.0}).as_object().cloned(),
            ..Default::default()
        };
        let info = extract_anchor_info(&object);
        assert_eq!(info.width, 40.0);
        assert_eq!(info.height, 30.0);
        assert_eq!(info.position, Some(AnchorPosition::page(5.0, 6.0)));
        assert_eq!(info.anchor_type, AnchorKind::Floating);
    }

    #[test]
    fn test_malformed_input_degrades() {
        let info = extract_anchor_info(&json!("not an object"));
        assert_eq!(info, AnchorInfo::default());

        let info = extract_anchor_info(&json!({"width": "wide", "position": 3}));
        assert_eq!(info.width, 0.0);
        assert!(info.position.is_none());
    }

    #[test]
    fn test_emu_threshold() {
        assert_eq!(points_or_emu(1000.0), 1000.0);
        assert_eq!(points_or_emu(12_700.0), 1.0);
        assert_eq!(points_or_emu(-12_700.0), -1.0);
    }

    #[test]
    fn test_unknown_frames() {
        assert_eq!(HorizontalFrame::from_keyword("character"), HorizontalFrame::Column);
        assert_eq!(VerticalFrame::from_keyword("bottomMargin"), VerticalFrame::Page);
        let json = serde_json::to_string(&VerticalFrame::Line).unwrap();
        assert_eq!(json, "\"line\"");
    }
}
