//! Property tests for rendering invariants.

use proptest::prelude::*;

use simdoc::markdown::calculate_fence_length;
use simdoc::{Block, CodeBlock, Doc, TableBlock, Value, render};

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::EMPTY),
        "[a-z|`\\n ]{0,8}".prop_map(|s: String| Value::from(s)),
    ]
}

/// Number of cells in a rendered table line, ignoring escaped pipes.
fn cell_count(line: &str) -> usize {
    let bytes = line.as_bytes();
    let delimiters = (0..bytes.len())
        .filter(|&i| bytes[i] == b'|' && (i == 0 || bytes[i - 1] != b'\\'))
        .count();
    delimiters - 1
}

proptest! {
    #[test]
    fn prop_fence_longer_than_any_backtick_run(
        text in "[a-z`\\n]{0,40}",
        lang in proptest::option::of("[a-z]{1,6}"),
    ) {
        let block = Block::Code(CodeBlock { text: text.clone(), lang: lang.clone() });
        let rendered = render(&[block]).unwrap();

        let fence_len = calculate_fence_length(&text);
        let fence = "`".repeat(fence_len);
        prop_assert!(fence_len >= 3);
        prop_assert!(!text.contains(&fence));

        let opening = format!("{fence}{}\n", lang.as_deref().unwrap_or(""));
        prop_assert!(rendered.starts_with(&opening));
        let closing = format!("{fence}\n");
        prop_assert!(rendered.ends_with(&closing));

        let body = &rendered[opening.len()..rendered.len() - fence.len() - 1];
        prop_assert!(!body.contains(&fence));
    }

    #[test]
    fn prop_table_rows_have_uniform_width(
        headers in prop::collection::vec("[a-z]{0,4}", 0..5),
        rows in prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..5),
    ) {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(headers.len());
        prop_assume!(width > 0);

        let block = Block::Table(TableBlock { headers, rows: rows.clone(), align: None });
        let rendered = render(&[block]).unwrap();
        let lines: Vec<&str> = rendered.trim_end_matches('\n').split('\n').collect();

        prop_assert_eq!(lines.len(), rows.len() + 2);
        for line in lines {
            prop_assert_eq!(cell_count(line), width);
        }
    }

    #[test]
    fn prop_cells_never_contain_raw_newlines_or_pipes(text in "[a-z|\\n\\r]{0,16}") {
        let formatted = simdoc::markdown::format_table_cell(&Value::from(text.as_str()));
        prop_assert!(!formatted.contains('\n'));
        prop_assert!(!formatted.contains('\r'));
        prop_assert_eq!(formatted.matches("\\|").count(), text.matches('|').count());
    }

    #[test]
    fn prop_render_is_idempotent(paragraphs in prop::collection::vec("[a-z \\n]{0,12}", 0..6)) {
        let mut doc = Doc::new();
        for p in &paragraphs {
            doc.p(p.as_str());
            doc.hr();
        }
        prop_assert_eq!(doc.to_markdown().unwrap(), doc.to_markdown().unwrap());
    }
}
