//! Integration tests for the list indent resolver.

use wordlayout::numbering::{
    format_counter, AbstractNumbering, IndentSpec, ListIndentMode, ListIndentResolver,
    NumberFormat, NumberingInstance, NumberingLevel, NumberingTable, ParagraphEntry,
    ResolverOptions,
};
use wordlayout::{json, LayoutEngine};

/// Level 0 = decimal "%1." at 720/360 twips, level 1 = lower letter "%1.%2." at 1440/360.
fn outline_table() -> NumberingTable {
    NumberingTable::new()
        .with_abstract(
            AbstractNumbering::new(0)
                .with_level(
                    NumberingLevel::decimal(0)
                        .with_indent(IndentSpec::from_twips(720.0, 0.0, 0.0, 360.0)),
                )
                .with_level(
                    NumberingLevel::new(1, NumberFormat::LowerLetter, "%1.%2.")
                        .with_indent(IndentSpec::from_twips(1440.0, 0.0, 0.0, 360.0)),
                )
                .with_level(
                    NumberingLevel::new(2, NumberFormat::LowerRoman, "(%3)")
                        .with_indent(IndentSpec::from_twips(2160.0, 0.0, 0.0, 360.0)),
                ),
        )
        .with_abstract(
            AbstractNumbering::new(1).with_level(
                NumberingLevel::decimal(0)
                    .with_indent(IndentSpec::from_twips(1080.0, 0.0, 0.0, 360.0)),
            ),
        )
        .with_instance(NumberingInstance::new(1, 0))
        .with_instance(NumberingInstance::new(2, 1))
}

fn markers(results: &[wordlayout::ResolvedParagraph]) -> Vec<&str> {
    results.iter().filter_map(|r| r.marker.as_deref()).collect()
}

#[test]
fn test_end_to_end_decimal_list() {
    let table = NumberingTable::new()
        .with_abstract(AbstractNumbering::new(0).with_level(
            NumberingLevel::new(0, NumberFormat::Decimal, "%1.")
                .with_start(1)
                .with_indent(IndentSpec::from_twips(720.0, 0.0, 0.0, 360.0)),
        ))
        .with_instance(NumberingInstance::new(1, 0));

    let paragraphs = vec![ParagraphEntry::numbered(1, 0); 3];
    let results = wordlayout::resolve_paragraphs(&table, &paragraphs);

    assert_eq!(markers(&results), ["1.", "2.", "3."]);
    for result in &results {
        assert_eq!(result.indent.left, 36.0);
        assert_eq!(result.indent.hanging, 18.0);
        assert_eq!(result.indent.first_line, 0.0);
        assert_eq!(result.text_start, 36.0);
        assert_eq!(result.marker_start, 18.0);
        assert_eq!(result.num_id, Some(1));
        assert_eq!(result.level, Some(0));
    }
}

#[test]
fn test_resolve_from_json_input() {
    let input = json::numbering_input_from_str(
        r#"{
            "numbering": {
                "abstracts": {
                    "0": {
                        "id": 0,
                        "levels": [{
                            "level": 0,
                            "format": "upperRoman",
                            "text": "%1)",
                            "indent": {"left": 36.0, "hanging": 18.0}
                        }]
                    }
                },
                "instances": {"4": {"num_id": 4, "abstract_id": 0}}
            },
            "paragraphs": [{"num_id": 4}, {"num_id": 4}, {}, {"num_id": 4}]
        }"#,
    )
    .unwrap();

    let results = LayoutEngine::new().resolve_input(&input);
    assert_eq!(markers(&results), ["I)", "II)", "III)"]);
    assert!(!results[2].is_list_item());
    assert_eq!(results[3].indent.left, 36.0);
}

#[test]
fn test_reset_is_idempotent() {
    let paragraphs = [
        ParagraphEntry::numbered(1, 0),
        ParagraphEntry::numbered(1, 1).with_paragraph_indent(IndentSpec::left(3.0)),
        ParagraphEntry::numbered(1, 2),
        ParagraphEntry::new().with_style("Body", IndentSpec::left(12.0)),
        ParagraphEntry::numbered(2, 0),
        ParagraphEntry::numbered(1, 1),
        ParagraphEntry::numbered(1, 0).with_inline_indent(IndentSpec::new(50.0, 0.0, 10.0, 0.0)),
    ];

    let mut resolver = ListIndentResolver::new(outline_table());
    let first = resolver.resolve_all(&paragraphs);
    resolver.reset();
    let second = resolver.resolve_all(&paragraphs);

    assert_eq!(first, second);
    assert_eq!(resolver.table(), &outline_table());
}

#[test]
fn test_separate_lists_converge() {
    let mut resolver = ListIndentResolver::new(outline_table());
    let first = resolver.resolve(&ParagraphEntry::numbered(1, 0));
    let second = resolver.resolve(&ParagraphEntry::numbered(2, 0));

    assert_eq!(first.indent.left, second.indent.left);
    assert!(second.metadata.matched_previous_chain);
    assert_eq!(second.num_id, Some(2));
}

#[test]
fn test_separate_lists_kept_apart_without_matching_markers() {
    let mut resolver = ListIndentResolver::new(outline_table());
    let first = resolver.resolve(&ParagraphEntry::numbered(1, 0).with_marker_text("1."));
    let second = resolver.resolve(&ParagraphEntry::numbered(2, 0).with_marker_text("A)"));

    assert_eq!(first.indent.left, 36.0);
    assert_eq!(second.indent.left, 54.0);
    assert!(!second.metadata.matched_previous_chain);
}

#[test]
fn test_nested_outline_markers() {
    let paragraphs = [
        ParagraphEntry::numbered(1, 0),
        ParagraphEntry::numbered(1, 1),
        ParagraphEntry::numbered(1, 2),
        ParagraphEntry::numbered(1, 2),
        ParagraphEntry::numbered(1, 1),
        ParagraphEntry::numbered(1, 0),
        ParagraphEntry::numbered(1, 1),
    ];
    let results = wordlayout::resolve_paragraphs(&outline_table(), &paragraphs);

    assert_eq!(
        markers(&results),
        ["1.", "1.a.", "(i)", "(ii)", "1.b.", "2.", "2.a."]
    );
    assert_eq!(results[2].indent.left, 108.0);
}

#[test]
fn test_hanging_and_first_line_exclusive() {
    let indents = [
        IndentSpec::new(10.0, 0.0, 20.0, 0.0),
        IndentSpec::new(0.0, 0.0, 15.0, 30.0),
        IndentSpec::hanging(40.0, 25.0),
        IndentSpec::new(5.0, 5.0, -10.0, 0.0),
    ];

    let mut paragraphs = Vec::new();
    for (i, indent) in indents.iter().enumerate() {
        let level = (i % 3) as u8;
        paragraphs.push(ParagraphEntry::numbered(1, level).with_paragraph_indent(*indent));
        paragraphs.push(ParagraphEntry::numbered(2, 0).with_inline_indent(*indent));
        paragraphs.push(ParagraphEntry::new().with_style("Body", *indent));
        paragraphs.push(
            ParagraphEntry::new()
                .with_style("Quote", *indent)
                .with_inline_indent(IndentSpec::new(0.0, 0.0, 12.0, 0.0)),
        );
        paragraphs.push(ParagraphEntry::numbered(1, level).with_style("List", *indent).bordered());
        paragraphs.push(ParagraphEntry::new().with_marker_text("•").list_style(level));
    }

    let results = wordlayout::resolve_paragraphs(&outline_table(), &paragraphs);
    assert_eq!(results.len(), paragraphs.len());
    for result in results {
        let indent = result.indent;
        if indent.hanging > 0.0 {
            assert_eq!(indent.first_line, 0.0, "{:?}", indent);
        }
        if indent.first_line > 0.0 {
            assert_eq!(indent.hanging, 0.0, "{:?}", indent);
        }
    }
}

#[test]
fn test_active_stack_tracks_depth() {
    let levels = [0u8, 1, 2, 2, 0, 2, 1, 1, 0, 0, 2, 1];
    let mut resolver = ListIndentResolver::new(outline_table());

    for level in levels {
        resolver.resolve(&ParagraphEntry::numbered(1, level));
        let active = resolver.active_levels(1);

        assert_eq!(active.last(), Some(&level));
        assert!(active.windows(2).all(|w| w[0] < w[1]), "{:?}", active);
        assert!(active.iter().all(|l| *l <= level));
    }
}

#[test]
fn test_level_beyond_definition_clamps() {
    let mut resolver = ListIndentResolver::new(outline_table());
    let result = resolver.resolve(&ParagraphEntry::numbered(2, 5));
    assert_eq!(result.indent.left, 54.0);
    assert_eq!(result.marker.as_deref(), Some("1."));
}

#[test]
fn test_start_override() {
    let table =
        outline_table().with_instance(NumberingInstance::new(3, 0).with_start_override(0, 5));
    let results = wordlayout::resolve_paragraphs(&table, &vec![ParagraphEntry::numbered(3, 0); 2]);
    assert_eq!(markers(&results), ["5.", "6."]);
}

#[test]
fn test_auto_correct_disabled() {
    let engine = LayoutEngine::new().without_auto_correct();
    let paragraphs = [
        ParagraphEntry::numbered(1, 0).with_marker_text("1."),
        ParagraphEntry::numbered(1, 0)
            .with_marker_text("2.")
            .with_paragraph_indent(IndentSpec::left(4.0)),
    ];
    let results = engine.resolve(&outline_table(), &paragraphs);
    assert_eq!(results[1].indent.left, 40.0);
    assert!(!results[1].metadata.auto_corrected);
}

#[test]
fn test_tight_tolerance_keeps_jitter() {
    let options = ResolverOptions::new().with_unify_tolerance(2.0);
    let mut resolver = ListIndentResolver::with_options(outline_table(), options);
    resolver.resolve(&ParagraphEntry::numbered(1, 0).with_marker_text("1."));
    let second = resolver.resolve(
        &ParagraphEntry::numbered(1, 0)
            .with_marker_text("2.")
            .with_paragraph_indent(IndentSpec::left(4.0)),
    );
    assert_eq!(second.indent.left, 40.0);
}

#[test]
fn test_bullet_list_has_no_counter() {
    let table = NumberingTable::new()
        .with_abstract(AbstractNumbering::new(0).with_level(
            NumberingLevel::bullet(0, "•").with_indent(IndentSpec::hanging(36.0, 18.0)),
        ))
        .with_instance(NumberingInstance::new(1, 0));
    let results = wordlayout::resolve_paragraphs(&table, &vec![ParagraphEntry::numbered(1, 0); 2]);

    assert_eq!(markers(&results), ["•", "•"]);
    assert!(results.iter().all(|r| r.metadata.marker_override.is_none()));
    assert_eq!(results[0].metadata.list_indent_mode, ListIndentMode::Auto);
}

#[test]
fn test_bullet_template_drops_placeholders() {
    let table = NumberingTable::new()
        .with_abstract(AbstractNumbering::new(0).with_level(
            NumberingLevel::bullet(0, "•%1").with_indent(IndentSpec::hanging(36.0, 18.0)),
        ))
        .with_instance(NumberingInstance::new(1, 0));
    let results = wordlayout::resolve_paragraphs(&table, &vec![ParagraphEntry::numbered(1, 0); 2]);

    assert_eq!(markers(&results), ["•", "•"]);
    assert!(results.iter().all(|r| r.metadata.marker_override.is_none()));
}

#[test]
fn test_roman_table() {
    let expected = [
        "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv",
        "xv", "xvi", "xvii", "xviii", "xix", "xx",
    ];
    for (i, roman) in expected.iter().enumerate() {
        let value = i as u32 + 1;
        assert_eq!(format_counter(value, NumberFormat::LowerRoman), *roman);
        assert_eq!(
            format_counter(value, NumberFormat::UpperRoman),
            roman.to_uppercase()
        );
    }
    assert_eq!(format_counter(4000, NumberFormat::UpperRoman), "4000");
}

#[test]
fn test_letter_table() {
    let expected: Vec<String> = ('a'..='z').map(String::from).chain(["aa".into()]).collect();
    for (i, letters) in expected.iter().enumerate() {
        let value = i as u32 + 1;
        assert_eq!(&format_counter(value, NumberFormat::LowerLetter), letters);
        assert_eq!(
            format_counter(value, NumberFormat::UpperLetter),
            letters.to_uppercase()
        );
    }
}

#[test]
fn test_ordinal_and_cardinal() {
    let ordinals: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
        .iter()
        .map(|v| format_counter(*v, NumberFormat::Ordinal))
        .collect();
    assert_eq!(
        ordinals,
        ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
    );
    assert_eq!(format_counter(7, NumberFormat::CardinalText), "7");
}
