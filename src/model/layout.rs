//! The paginated layout container.

use serde::{Deserialize, Serialize};

use super::{LayoutBlock, LayoutPage};
use crate::error::{Error, Result};
use crate::geometry::{Margins, Size};

/// An append-only sequence of pages with their positioned blocks.
///
/// Built incrementally by an assembler: a page must be started before
/// blocks can be appended, and blocks always land on the most recently
/// started page. Once assembly stops, the value is shared read-only with
/// the validator and renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedLayout {
    /// Pages in order
    pub pages: Vec<LayoutPage>,
}

impl PaginatedLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new page and return it.
    ///
    /// The page receives the next sequential 1-based number.
    pub fn start_page(&mut self, size: Size, margins: Margins) -> &mut LayoutPage {
        let number = self.pages.len() as u32 + 1;
        log::trace!(
            "starting page {} ({}x{})",
            number,
            size.width,
            size.height
        );
        self.pages.push(LayoutPage::new(number, size, margins));
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Append a block to the most recently started page.
    ///
    /// Fails with [`Error::NoActivePage`] when no page has been started.
    pub fn add_block(&mut self, mut block: LayoutBlock) -> Result<()> {
        let page = self.pages.last_mut().ok_or(Error::NoActivePage)?;
        block.page_number = page.number;
        page.blocks.push(block);
        Ok(())
    }

    /// The page currently receiving blocks.
    pub fn current_page(&self) -> Option<&LayoutPage> {
        self.pages.last()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Result<&LayoutPage> {
        if number == 0 {
            return Err(Error::PageOutOfRange(number, self.page_count()));
        }
        self.pages
            .get((number - 1) as usize)
            .ok_or(Error::PageOutOfRange(number, self.page_count()))
    }

    /// All blocks, page by page.
    pub fn blocks(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.pages.iter().flat_map(|p| p.blocks.iter())
    }

    /// Total number of overlays carried by block payloads.
    pub fn overlay_count(&self) -> usize {
        self.blocks().map(|b| b.content.overlays().len()).sum()
    }

    /// Check if no page has been started.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
