use lektio_export::classify::{LineKind, classify_line};
use lektio_export::{Block, ParagraphStyle, build_blocks};

// ── Line classification ──────────────────────────────────────────────────────

#[test]
fn pipe_line_without_dashes_is_a_table_row() {
    let kind = classify_line("| A | B | C |");
    assert_eq!(
        kind,
        LineKind::TableRow(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
}

#[test]
fn pipe_line_with_dashes_is_a_separator() {
    assert_eq!(classify_line("|---|---|---|"), LineKind::Separator);
}

#[test]
fn bullet_marker_is_stripped() {
    assert_eq!(classify_line("* Buy milk"), LineKind::Bullet("Buy milk".to_string()));
}

#[test]
fn bold_markers_are_all_stripped() {
    assert_eq!(
        classify_line("**Session 1: Intro (60 mins)**"),
        LineKind::Bold("Session 1: Intro (60 mins)".to_string())
    );
}

#[test]
fn anything_else_is_plain_and_verbatim() {
    assert_eq!(
        classify_line("plain text with * and | inside"),
        LineKind::Plain("plain text with * and | inside".to_string())
    );
}

#[test]
fn pipe_beats_the_other_prefixes() {
    // A pipe row whose first cell starts with ** is still a table row.
    assert_eq!(
        classify_line("| **Summary** | Board |"),
        LineKind::TableRow(vec!["**Summary**".to_string(), "Board".to_string()])
    );
}

// ── Block building ───────────────────────────────────────────────────────────

#[test]
fn plain_lines_become_one_plain_block_each_in_order() {
    let blocks = build_blocks("first\nsecond\nthird");
    assert_eq!(blocks.len(), 3);
    for (block, expected) in blocks.iter().zip(["first", "second", "third"]) {
        assert_eq!(
            block,
            &Block::Paragraph {
                style: ParagraphStyle::Plain,
                text: expected.to_string(),
            }
        );
    }
}

#[test]
fn contiguous_table_rows_collapse_into_one_table() {
    let blocks = build_blocks("|A|B|\n|1|2|\n|3|4|");
    assert_eq!(blocks.len(), 1);
    let Block::Table { rows } = &blocks[0] else {
        panic!("expected a table, got {:?}", blocks[0]);
    };
    assert_eq!(rows.len(), 3);
}

#[test]
fn separator_is_discarded_without_closing_the_group() {
    let blocks = build_blocks("|A|B|C|\n|---|---|---|\n|1|2|3|");
    assert_eq!(blocks.len(), 1);
    let Block::Table { rows } = &blocks[0] else {
        panic!("expected a table, got {:?}", blocks[0]);
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["A", "B", "C"]);
    assert_eq!(rows[1], vec!["1", "2", "3"]);
}

#[test]
fn bullet_block_carries_the_glyph() {
    let blocks = build_blocks("* Buy milk");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            style: ParagraphStyle::Bullet,
            text: "\u{2022} Buy milk".to_string(),
        }]
    );
}

#[test]
fn bold_block_has_no_marker_characters_left() {
    let blocks = build_blocks("**Session 1: Intro (60 mins)**");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            style: ParagraphStyle::Bold,
            text: "Session 1: Intro (60 mins)".to_string(),
        }]
    );
}

#[test]
fn mixed_input_produces_bold_table_plain_in_order() {
    let blocks = build_blocks("**Heading**\n| A | B |\n|---|---|\n| 1 | 2 |\nplain text");
    assert_eq!(blocks.len(), 3);
    assert!(matches!(
        &blocks[0],
        Block::Paragraph { style: ParagraphStyle::Bold, text } if text == "Heading"
    ));
    assert!(matches!(&blocks[1], Block::Table { rows } if rows.len() == 2));
    assert!(matches!(
        &blocks[2],
        Block::Paragraph { style: ParagraphStyle::Plain, text } if text == "plain text"
    ));
}

#[test]
fn input_ending_mid_table_still_closes_the_group() {
    let blocks = build_blocks("intro\n|A|B|\n|1|2|");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[1], Block::Table { rows } if rows.len() == 2));
}

#[test]
fn empty_input_yields_zero_blocks() {
    assert!(build_blocks("").is_empty());
}

#[test]
fn inconsistent_column_counts_pass_through_unpatched() {
    // Grouping never enforces rectangularity; that check belongs to table
    // assembly, which reports it as an error instead of guessing a fix.
    let blocks = build_blocks("|A|B|\n|1|2|3|");
    let Block::Table { rows } = &blocks[0] else {
        panic!("expected a table");
    };
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1].len(), 3);
}
