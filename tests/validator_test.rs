//! Integration tests for the layout validator.

use wordlayout::geometry::{Margins, Rect, Size};
use wordlayout::model::{
    BlockPayload, BlockStyle, BlockType, GenericLayout, LayoutBlock, LayoutPage, PaginatedLayout,
    ParagraphLayout,
};
use wordlayout::validate::{Edge, IssueKind, Severity};
use wordlayout::{LayoutValidator, ValidatorOptions};

fn block(frame: Rect, block_type: BlockType) -> LayoutBlock {
    LayoutBlock::new(
        frame,
        block_type,
        BlockPayload::Paragraph(ParagraphLayout::default()),
    )
}

fn single_page(blocks: Vec<LayoutBlock>) -> PaginatedLayout {
    let mut layout = PaginatedLayout::new();
    layout.start_page(Size::letter(), Margins::inch());
    for b in blocks {
        layout.add_block(b).unwrap();
    }
    layout
}

#[test]
fn test_left_edge_violation_is_single_error() {
    let layout = single_page(vec![block(
        Rect::new(-1.0, 600.0, 200.0, 20.0),
        BlockType::Paragraph,
    )]);

    let report = wordlayout::validate(&layout);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].kind, IssueKind::OutOfBounds(Edge::Left));
    assert_eq!(report.errors[0].severity, Severity::Error);
    assert_eq!(report.errors[0].page, Some(1));
    assert!(report.warnings.is_empty());
}

#[test]
fn test_checks_are_independent() {
    let layout = single_page(vec![
        block(Rect::new(500.0, 780.0, 200.0, 20.0), BlockType::Paragraph).without_style(),
        block(Rect::new(72.0, 10.0, 100.0, 0.0), BlockType::Paragraph)
            .with_style(BlockStyle::with_spacing(-2.0, 0.0)),
    ]);

    let report = wordlayout::validate(&layout);
    assert_eq!(report.count(IssueKind::OutOfBounds(Edge::Right)), 1);
    assert_eq!(report.count(IssueKind::OutOfBounds(Edge::Top)), 1);
    assert_eq!(report.count(IssueKind::MissingStyle), 1);
    assert_eq!(report.count(IssueKind::NonPositiveSize), 1);
    assert_eq!(report.count(IssueKind::NegativeSpacing), 1);
    assert_eq!(report.count(IssueKind::BelowBottomMargin), 1);
    assert!(!report.is_valid);
}

#[test]
fn test_overlap_and_tight_spacing() {
    let spaced = |frame| {
        block(frame, BlockType::Paragraph).with_style(BlockStyle::with_spacing(12.0, 12.0))
    };
    let layout = single_page(vec![
        spaced(Rect::new(72.0, 700.0, 468.0, 20.0)),
        spaced(Rect::new(72.0, 690.0, 468.0, 20.0)),
        spaced(Rect::new(72.0, 660.0, 468.0, 20.0)),
        spaced(Rect::new(72.0, 620.0, 468.0, 20.0)),
    ]);

    let report = wordlayout::validate(&layout);
    assert_eq!(report.count(IssueKind::Overlap), 1);
    assert_eq!(report.count(IssueKind::TightSpacing), 1);
    assert_eq!(report.errors[0].block, Some(1));
    assert_eq!(report.warnings[0].block, Some(2));
}

#[test]
fn test_side_by_side_blocks_skip_spacing() {
    let spaced = |frame| {
        block(frame, BlockType::Paragraph).with_style(BlockStyle::with_spacing(20.0, 20.0))
    };
    let layout = single_page(vec![
        spaced(Rect::new(72.0, 600.0, 200.0, 100.0)),
        spaced(Rect::new(300.0, 600.0, 200.0, 100.0)),
    ]);
    assert!(wordlayout::validate(&layout).warnings.is_empty());
}

#[test]
fn test_header_only_page_and_sequence() {
    let mut layout = single_page(vec![block(
        Rect::new(72.0, 700.0, 468.0, 20.0),
        BlockType::Paragraph,
    )]);
    layout.start_page(Size::letter(), Margins::inch());
    layout
        .add_block(block(Rect::new(72.0, 740.0, 468.0, 20.0), BlockType::Header))
        .unwrap();
    let mut stray = LayoutPage::new(7, Size::letter(), Margins::inch());
    stray
        .blocks
        .push(block(Rect::new(72.0, 700.0, 468.0, 20.0), BlockType::Paragraph));
    layout.pages.push(stray);

    let report = wordlayout::validate(&layout);
    assert!(report.is_valid, "{:?}", report.errors);
    assert_eq!(report.count(IssueKind::EmptyPage), 1);
    assert_eq!(report.count(IssueKind::PageSequence), 1);

    let options = ValidatorOptions::new().with_warnings_as_errors(true);
    let strict = LayoutValidator::with_options(options);
    assert!(!strict.validate(&layout).is_valid);
}

#[test]
fn test_footer_below_bottom_margin() {
    let layout = single_page(vec![
        block(Rect::new(72.0, 100.0, 468.0, 500.0), BlockType::Paragraph),
        block(Rect::new(72.0, 20.0, 100.0, 10.0), BlockType::Footer),
    ]);
    let report = wordlayout::validate(&layout);
    assert!(!report.is_valid);
    assert_eq!(report.count(IssueKind::BelowBottomMargin), 1);
    assert_eq!(report.errors[0].block, Some(1));

    let options = ValidatorOptions::new().with_body_flow_only(true);
    let report = LayoutValidator::with_options(options).validate(&layout);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn test_overlay_overlapping_body_block() {
    let layout = single_page(vec![
        block(Rect::new(72.0, 600.0, 468.0, 40.0), BlockType::Paragraph),
        block(Rect::new(100.0, 610.0, 50.0, 50.0), BlockType::Overlay),
    ]);
    let report = wordlayout::validate(&layout);
    assert_eq!(report.count(IssueKind::Overlap), 1);

    let options = ValidatorOptions::new().with_body_flow_only(true);
    let report = LayoutValidator::with_options(options).validate(&layout);
    assert_eq!(report.count(IssueKind::Overlap), 0);
}

#[test]
fn test_placeholder_blocks_pass() {
    let layout = single_page(vec![LayoutBlock::new(
        Rect::new(72.0, 400.0, 0.0, 0.0),
        BlockType::Generic,
        BlockPayload::Generic(GenericLayout::new("section_marker")),
    )]);
    let report = wordlayout::validate(&layout);
    assert!(report.errors.is_empty(), "{:?}", report.errors);
}

#[test]
fn test_report_parts() {
    let (valid, errors, warnings) = wordlayout::validate(&PaginatedLayout::new()).into_parts();
    assert!(!valid);
    assert_eq!(errors.len(), 1);
    assert!(warnings.is_empty());
}
