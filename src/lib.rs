//! # wordlayout
//!
//! Layout and list-numbering resolution engine for word-processing
//! documents.
//!
//! The crate sits between document parsing and rendering. It resolves the
//! final indentation and marker text of list paragraphs, places floating
//! objects on the page, holds the paginated layout handed to renderers and
//! validates that layout before it is drawn.
//!
//! ## Quick Start
//!
//! ```
//! use wordlayout::numbering::{
//!     AbstractNumbering, IndentSpec, NumberingInstance, NumberingLevel, NumberingTable,
//!     ParagraphEntry,
//! };
//!
//! let table = NumberingTable::new()
//!     .with_abstract(AbstractNumbering::new(0).with_level(
//!         NumberingLevel::decimal(0).with_indent(IndentSpec::from_twips(720.0, 0.0, 0.0, 360.0)),
//!     ))
//!     .with_instance(NumberingInstance::new(1, 0));
//!
//! let paragraphs = vec![ParagraphEntry::numbered(1, 0); 3];
//! let resolved = wordlayout::resolve_paragraphs(&table, &paragraphs);
//!
//! let markers: Vec<_> = resolved.iter().filter_map(|r| r.marker.as_deref()).collect();
//! assert_eq!(markers, ["1.", "2.", "3."]);
//! assert_eq!(resolved[0].indent.left, 36.0);
//! ```
//!
//! ## Features
//!
//! - **List resolution**: numbering definitions, marker synthesis, indent
//!   unification across visually identical lists
//! - **Overlay placement**: anchor extraction from several input shapes and
//!   absolute frame computation
//! - **Validation**: bounds, spacing and pagination checks
//! - **Parallel processing**: Uses Rayon for independent documents

pub mod error;
pub mod geometry;
pub mod json;
pub mod model;
pub mod numbering;
pub mod overlay;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{LengthUnit, Margins, Point, Rect, Size};
pub use json::JsonFormat;
pub use model::{
    Alignment, BlockPayload, BlockStyle, BlockType, LayoutBlock, LayoutPage, OverlayBox,
    OverlayKind, PaginatedLayout,
};
pub use numbering::{
    IndentSpec, ListIndentMode, ListIndentResolver, NumberingInput, NumberingTable,
    ParagraphEntry, ResolvedParagraph, ResolverOptions,
};
pub use overlay::{AnchorSource, PageConfig, PlacementOptions};
pub use validate::{LayoutValidator, ValidationReport, ValidatorOptions};

use std::path::Path;

/// Resolve a document's paragraphs with default options.
///
/// A fresh resolver is used, so the result depends only on the inputs.
pub fn resolve_paragraphs(
    table: &NumberingTable,
    paragraphs: &[ParagraphEntry],
) -> Vec<ResolvedParagraph> {
    LayoutEngine::new().resolve(table, paragraphs)
}

/// Resolve independent documents, in parallel when the `parallel` feature is on.
pub fn resolve_documents(inputs: &[NumberingInput]) -> Vec<Vec<ResolvedParagraph>> {
    LayoutEngine::new().resolve_batch(inputs)
}

/// Validate a layout with default options.
pub fn validate(layout: &PaginatedLayout) -> ValidationReport {
    LayoutValidator::new().validate(layout)
}

/// Read a serialized layout and validate it.
///
/// # Example
///
/// ```no_run
/// let report = wordlayout::validate_file("layout.json")?;
/// println!("valid: {}", report.is_valid);
/// # Ok::<(), wordlayout::Error>(())
/// ```
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport> {
    let layout = json::layout_from_file(path)?;
    Ok(validate(&layout))
}

/// Builder bundling resolver, placement and validator configuration.
///
/// # Example
///
/// ```
/// use wordlayout::{LayoutEngine, NumberingInput, ResolverOptions};
///
/// let engine = LayoutEngine::new()
///     .with_resolver_options(ResolverOptions::new().with_unify_tolerance(4.0))
///     .strict();
///
/// let resolved = engine.resolve_input(&NumberingInput::default());
/// assert!(resolved.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    resolver_options: ResolverOptions,
    validator_options: ValidatorOptions,
    placement_options: PlacementOptions,
    sequential: bool,
}

impl LayoutEngine {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list resolver options.
    pub fn with_resolver_options(mut self, options: ResolverOptions) -> Self {
        self.resolver_options = options;
        self
    }

    /// Set the validator options.
    pub fn with_validator_options(mut self, options: ValidatorOptions) -> Self {
        self.validator_options = options;
        self
    }

    /// Set the overlay placement options.
    pub fn with_placement_options(mut self, options: PlacementOptions) -> Self {
        self.placement_options = options;
        self
    }

    /// Disable indent auto-correction.
    pub fn without_auto_correct(mut self) -> Self {
        self.resolver_options = self.resolver_options.with_auto_correct(false);
        self
    }

    /// Treat validation warnings as errors.
    pub fn strict(mut self) -> Self {
        self.validator_options = self.validator_options.with_warnings_as_errors(true);
        self
    }

    /// Disable parallel processing of batches.
    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }

    /// Create a resolver for one document.
    pub fn resolver(&self, table: NumberingTable) -> ListIndentResolver {
        ListIndentResolver::with_options(table, self.resolver_options.clone())
    }

    /// Resolve one document's paragraphs.
    pub fn resolve(
        &self,
        table: &NumberingTable,
        paragraphs: &[ParagraphEntry],
    ) -> Vec<ResolvedParagraph> {
        self.resolver(table.clone()).resolve_all(paragraphs)
    }

    /// Resolve a deserialized resolver input.
    pub fn resolve_input(&self, input: &NumberingInput) -> Vec<ResolvedParagraph> {
        self.resolve(&input.numbering, &input.paragraphs)
    }

    /// Resolve independent documents, one resolver per document.
    pub fn resolve_batch(&self, inputs: &[NumberingInput]) -> Vec<Vec<ResolvedParagraph>> {
        log::debug!("resolving {} documents", inputs.len());

        #[cfg(feature = "parallel")]
        if !self.sequential {
            use rayon::prelude::*;
            return inputs.par_iter().map(|i| self.resolve_input(i)).collect();
        }

        inputs.iter().map(|i| self.resolve_input(i)).collect()
    }

    /// Validate a layout.
    pub fn validate(&self, layout: &PaginatedLayout) -> ValidationReport {
        LayoutValidator::with_options(self.validator_options.clone()).validate(layout)
    }

    /// Place a floating object anchored to a block on `page`.
    pub fn place_overlay<S: AnchorSource + ?Sized>(
        &self,
        source: &S,
        kind: OverlayKind,
        anchor: &Rect,
        page: &LayoutPage,
    ) -> OverlayBox {
        overlay::place_overlay(
            source,
            kind,
            anchor,
            &PageConfig::from_page(page),
            &self.placement_options,
        )
    }
}
