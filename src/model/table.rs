//! Table layout types.

use serde::{Deserialize, Serialize};

use super::{BlockPayload, BoxStyle};
use crate::geometry::Rect;

/// A laid-out table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Rows in the table
    pub rows: Vec<TableRowLayout>,

    /// Column widths in points
    pub column_widths: Vec<f32>,

    /// Table-level decoration
    #[serde(default)]
    pub style: BoxStyle,
}

impl TableLayout {
    /// Create a new empty table.
    pub fn new(column_widths: Vec<f32>) -> Self {
        Self {
            rows: Vec::new(),
            column_widths,
            style: BoxStyle::default(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRowLayout) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Total width of all columns.
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Total height of all rows.
    pub fn height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maximum depth of tables nested inside cells (0 = no nesting).
    pub fn nesting_depth(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .flat_map(|c| &c.blocks)
            .map(|b| match b {
                BlockPayload::Table(t) => 1 + t.nesting_depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRowLayout {
    /// Cells in the row
    pub cells: Vec<TableCellLayout>,

    /// Row height in points
    pub height: f32,

    /// Row repeats as a header on continuation pages
    #[serde(default)]
    pub is_header: bool,
}

impl TableRowLayout {
    /// Create a new row.
    pub fn new(cells: Vec<TableCellLayout>, height: f32) -> Self {
        Self {
            cells,
            height,
            is_header: false,
        }
    }
}

/// A table cell owning its own block content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCellLayout {
    /// Cell frame relative to the table origin
    pub frame: Rect,

    /// Content blocks (paragraphs, images, nested tables)
    pub blocks: Vec<BlockPayload>,

    /// Cell decoration
    #[serde(default)]
    pub style: BoxStyle,

    /// Number of columns this cell spans
    #[serde(default = "one")]
    pub colspan: u16,

    /// Number of rows this cell spans
    #[serde(default = "one")]
    pub rowspan: u16,

    /// Vertical alignment of the content
    #[serde(default)]
    pub vertical_alignment: VerticalAlignment,
}

fn one() -> u16 {
    1
}

impl TableCellLayout {
    /// Create a cell with content.
    pub fn new(frame: Rect, blocks: Vec<BlockPayload>) -> Self {
        Self {
            frame,
            blocks,
            style: BoxStyle::default(),
            colspan: 1,
            rowspan: 1,
            vertical_alignment: VerticalAlignment::Top,
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u16) -> Self {
        self.colspan = span.max(1);
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u16) -> Self {
        self.rowspan = span.max(1);
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.rowspan > 1 || self.colspan > 1
    }
}

/// Vertical alignment for table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top alignment
    #[default]
    Top,
    /// Middle/center alignment
    Middle,
    /// Bottom alignment
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParagraphLayout;

    #[test]
    fn test_table_dimensions() {
        let mut table = TableLayout::new(vec![100.0, 200.0]);
        table.add_row(TableRowLayout::new(
            vec![
                TableCellLayout::new(Rect::new(0.0, 0.0, 100.0, 20.0), vec![]),
                TableCellLayout::new(Rect::new(100.0, 0.0, 200.0, 20.0), vec![]),
            ],
            20.0,
        ));
        assert_eq!(table.width(), 300.0);
        assert_eq!(table.height(), 20.0);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.nesting_depth(), 0);
    }

    #[test]
    fn test_nested_table() {
        let inner = TableLayout::new(vec![50.0]);
        let cell = TableCellLayout::new(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            vec![
                BlockPayload::Paragraph(ParagraphLayout::default()),
                BlockPayload::Table(inner),
            ],
        )
        .colspan(2);
        let mut outer = TableLayout::new(vec![100.0]);
        outer.add_row(TableRowLayout::new(vec![cell], 40.0));

        assert_eq!(outer.nesting_depth(), 1);
        assert!(outer.rows[0].cells[0].is_merged());
    }
}
