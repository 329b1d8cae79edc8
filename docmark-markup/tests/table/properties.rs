use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use docmark_markup::host::RecordingNotifier;
use docmark_markup::table::{render, validate, Validation};
use proptest::prelude::*;

/// Column count of the first table comrak finds in `markdown`.
fn parsed_columns(markdown: &str) -> Option<usize> {
    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    let root = parse_document(&arena, markdown, &options);

    root.descendants().find_map(|node| match &node.data.borrow().value {
        NodeValue::Table(table) => Some(table.alignments.len()),
        _ => None,
    })
}

/// Body rows of the first table comrak finds in `markdown`.
fn parsed_body_rows(markdown: &str) -> usize {
    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    let root = parse_document(&arena, markdown, &options);

    root.descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::TableRow(false)))
        .count()
}

#[test]
fn rendered_table_is_a_markdown_table() {
    let table = render(3, 4);
    assert_eq!(parsed_columns(&table), Some(3));
    assert_eq!(parsed_body_rows(&table), 4);
}

proptest! {
    #[test]
    fn every_allowed_size_validates_and_renders(columns in 1usize..=4, rows in 1usize..=50) {
        let mut notifier = RecordingNotifier::default();
        let result = validate(2, &columns.to_string(), &rows.to_string(), &mut notifier);
        prop_assert!(result.is_valid());
        prop_assert!(notifier.warnings.is_empty());

        let table = render(columns, rows);
        let lines: Vec<&str> = table.lines().collect();
        prop_assert_eq!(lines.len(), rows + 2);
        prop_assert_eq!(lines[0].matches("Column").count(), columns);
        prop_assert!(lines.iter().all(|line| line.matches('|').count() == columns + 1));
        prop_assert!(table.ends_with('\n'));
    }

    #[test]
    fn sizes_out_of_range_are_refused(columns in -20i64..=20, rows in -100i64..=100) {
        prop_assume!(!(1..=4).contains(&columns) || !(1..=50).contains(&rows));
        let mut notifier = RecordingNotifier::default();
        let result = validate(2, &columns.to_string(), &rows.to_string(), &mut notifier);
        prop_assert!(matches!(result, Validation::Invalid(_)));
        prop_assert_eq!(notifier.warnings.len(), 1);
    }
}
