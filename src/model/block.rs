//! Block payload variants and floating overlays.

use serde::{Deserialize, Serialize};

use super::{BoxStyle, DataMap, ParagraphLayout, TableLayout};
use crate::geometry::{Rect, Size};

/// Content carried by a positioned block.
///
/// Consumers match on all five variants; [`BlockPayload::Generic`] is the
/// open-ended fallback for content the model does not describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    /// Lines of text
    Paragraph(ParagraphLayout),
    /// A table with nested cell content
    Table(TableLayout),
    /// An image
    Image(ImageLayout),
    /// A textbox with its own block content
    Textbox(TextboxLayout),
    /// Anything else
    Generic(GenericLayout),
}

impl BlockPayload {
    /// Short name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockPayload::Paragraph(_) => "paragraph",
            BlockPayload::Table(_) => "table",
            BlockPayload::Image(_) => "image",
            BlockPayload::Textbox(_) => "textbox",
            BlockPayload::Generic(_) => "generic",
        }
    }

    /// Intrinsic size of the content.
    pub fn content_size(&self) -> Size {
        match self {
            BlockPayload::Paragraph(p) => Size::new(p.width(), p.height()),
            BlockPayload::Table(t) => Size::new(t.width(), t.height()),
            BlockPayload::Image(i) => Size::new(i.width, i.height),
            BlockPayload::Textbox(t) => t.frame.size(),
            BlockPayload::Generic(g) => g.content_size(),
        }
    }

    /// Floating overlays attached to this content.
    pub fn overlays(&self) -> &[OverlayBox] {
        match self {
            BlockPayload::Generic(g) => &g.overlays,
            BlockPayload::Textbox(t) => &t.overlays,
            BlockPayload::Paragraph(_) | BlockPayload::Table(_) | BlockPayload::Image(_) => &[],
        }
    }

    /// Check if the content renders nothing.
    pub fn is_placeholder(&self) -> bool {
        match self {
            BlockPayload::Generic(g) => g.is_placeholder(),
            BlockPayload::Paragraph(_)
            | BlockPayload::Table(_)
            | BlockPayload::Image(_)
            | BlockPayload::Textbox(_) => false,
        }
    }
}

/// An image placed in the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayout {
    /// Resource identifier of the image data
    pub resource_id: String,
    /// Display width in points
    pub width: f32,
    /// Display height in points
    pub height: f32,
    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ImageLayout {
    /// Create an image layout.
    pub fn new(resource_id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            resource_id: resource_id.into(),
            width: width.abs(),
            height: height.abs(),
            alt_text: None,
        }
    }
}

/// A textbox with nested block content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextboxLayout {
    /// Textbox frame
    pub frame: Rect,
    /// Content blocks inside the box
    pub blocks: Vec<BlockPayload>,
    /// Box decoration
    #[serde(default)]
    pub style: BoxStyle,
    /// Floating objects anchored inside the box
    #[serde(default)]
    pub overlays: Vec<OverlayBox>,
}

/// Type markers a generic block can render.
const RENDERABLE_MARKERS: &[&str] = &[
    "rectangle",
    "shape",
    "separator",
    "footnotes",
    "endnotes",
    "watermark",
];

/// Open-ended content: a type marker plus a free-form data map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericLayout {
    /// Type marker (`rectangle`, `footnotes`, `header_marker`, ...)
    pub kind: String,
    /// Free-form data
    #[serde(default)]
    pub data: DataMap,
    /// Floating objects attached to this block
    #[serde(default)]
    pub overlays: Vec<OverlayBox>,
}

impl GenericLayout {
    /// Create a generic layout with an empty data map.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: DataMap::new(),
            overlays: Vec::new(),
        }
    }

    /// Check if the marker is understood by renderers.
    pub fn is_recognized(&self) -> bool {
        RENDERABLE_MARKERS
            .iter()
            .any(|m| self.kind.eq_ignore_ascii_case(m))
    }

    /// Unrecognized markers are zero-size placeholders that render nothing.
    pub fn is_placeholder(&self) -> bool {
        !self.is_recognized() && self.overlays.is_empty()
    }

    /// Size declared in the data map; zero for placeholders.
    pub fn content_size(&self) -> Size {
        if !self.is_recognized() {
            return Size::zero();
        }
        let dim = |key: &str| {
            self.data
                .get(key)
                .and_then(|v| v.as_f64())
                .map(|v| v.abs() as f32)
                .unwrap_or(0.0)
        };
        Size::new(dim("width"), dim("height"))
    }
}

/// Kind of a floating object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    /// Floating picture
    Image,
    /// Floating textbox
    Textbox,
    /// Vector shape
    Shape,
}

/// A floating object with its absolute page-space frame already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayBox {
    /// Object kind
    pub kind: OverlayKind,
    /// Absolute frame on the page
    pub frame: Rect,
    /// Renderer payload (image source, textbox content, shape geometry)
    #[serde(default)]
    pub payload: serde_json::Value,
    /// Drawn behind the text layer
    #[serde(default)]
    pub behind_text: bool,
}

impl OverlayBox {
    /// Create an overlay without payload.
    pub fn new(kind: OverlayKind, frame: Rect) -> Self {
        Self {
            kind,
            frame,
            payload: serde_json::Value::Null,
            behind_text: false,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_placeholder() {
        let marker = GenericLayout::new("header_marker");
        assert!(marker.is_placeholder());
        assert_eq!(marker.content_size(), Size::zero());

        let mut rect = GenericLayout::new("Rectangle");
        rect.data.insert("width".into(), serde_json::json!(40.0));
        rect.data.insert("height".into(), serde_json::json!(-10.0));
        assert!(!rect.is_placeholder());
        assert_eq!(rect.content_size(), Size::new(40.0, 10.0));
    }

    #[test]
    fn test_payload_sizes() {
        let image = BlockPayload::Image(ImageLayout::new("rId5", 100.0, -50.0));
        assert_eq!(image.content_size(), Size::new(100.0, 50.0));
        assert_eq!(image.kind_name(), "image");
        assert!(image.overlays().is_empty());

        let textbox = BlockPayload::Textbox(TextboxLayout {
            frame: Rect::new(0.0, 0.0, 80.0, 30.0),
            ..Default::default()
        });
        assert_eq!(textbox.content_size(), Size::new(80.0, 30.0));
    }

    #[test]
    fn test_generic_overlays() {
        let mut generic = GenericLayout::new("anchor_host");
        generic.overlays.push(OverlayBox::new(
            OverlayKind::Image,
            Rect::new(10.0, 10.0, 20.0, 20.0),
        ));
        let payload = BlockPayload::Generic(generic);
        assert_eq!(payload.overlays().len(), 1);
        assert!(!payload.is_placeholder());
    }
}
