//! Property tests for the escaping, fencing, taint and validation
//! invariants.

use markdown_builder as md;
use markdown_builder::{Content, Error, escape};
use proptest::prelude::*;

/// No markdown control character may remain unescaped: walk the text and
/// skip whatever a backslash escapes; anything dangerous left over fails.
fn is_fully_escaped(text: &str) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '*' | '_' | '~' | '[' | '`' => return false,
            _ => {}
        }
    }
    true
}

fn longest_backtick_run(text: &str) -> usize {
    let mut max = 0;
    let mut cur = 0;
    for c in text.chars() {
        if c == '`' {
            cur += 1;
            max = max.max(cur);
        } else {
            cur = 0;
        }
    }
    max
}

fn leading_backtick_run(text: &str) -> usize {
    text.chars().take_while(|&c| c == '`').count()
}

proptest! {
    #[test]
    fn escape_leaves_no_unescaped_control_chars(s in ".*") {
        prop_assert!(is_fully_escaped(&escape::escape(&s, escape::Context::Plain)));
    }

    #[test]
    fn bold_inner_text_is_escaped(s in ".*") {
        let node = md::bold(s.as_str(), true).unwrap();
        let text = node.as_str();
        prop_assert!(text.starts_with("**") && text.ends_with("**"));
        let inner = &text[2..text.len() - 2];
        prop_assert!(is_fully_escaped(inner));
        prop_assert!(node.is_escaped());
    }

    #[test]
    fn code_fence_is_strictly_longer_than_any_run(s in ".*") {
        let node = md::code(&s, true).unwrap();
        prop_assert!(leading_backtick_run(node.as_str()) > longest_backtick_run(&s));
        let fence = "`".repeat(longest_backtick_run(&s) + 1);
        prop_assert!(node.as_str().starts_with(&fence));
        prop_assert!(node.as_str().ends_with(&fence));
    }

    #[test]
    fn code_block_fence_is_sufficient(s in ".*", lang in proptest::option::of("[a-z]{0,8}")) {
        let node = md::code_block(&s, lang.as_deref(), true).unwrap();
        let first_line = node.as_str().split('\n').next().unwrap();
        let fence_len = leading_backtick_run(first_line);
        prop_assert!(fence_len >= 3);
        prop_assert!(fence_len > longest_backtick_run(&s));
    }

    #[test]
    fn taint_join_law(items in prop::collection::vec((".{0,20}", any::<bool>()), 1..8)) {
        let children: Vec<md::Node> = items
            .iter()
            .map(|(t, esc)| md::bold(t.as_str(), *esc).unwrap())
            .collect();
        let expected = children.iter().all(md::Node::is_escaped);
        let content: Vec<Content> = children.into_iter().map(Content::from).collect();
        let para = md::paragraph(content, true).unwrap();
        prop_assert_eq!(para.is_escaped(), expected);
    }

    #[test]
    fn taint_is_monotone_up_the_tree(s in ".{0,20}") {
        let leaf = md::bold(s.as_str(), false).unwrap();
        let span = md::italic(Content::from(leaf), true).unwrap();
        let para = md::paragraph(Content::from(span), true).unwrap();
        let doc = md::document(&[para]).unwrap();
        prop_assert!(!doc.is_escaped());
    }

    #[test]
    fn heading_prefix_and_terminator(level in 1u8..=6, s in "[^\r\n]{0,80}") {
        let node = md::heading(level, s.as_str(), true).unwrap();
        let prefix = format!("{} ", "#".repeat(level as usize));
        prop_assert!(node.as_str().starts_with(&prefix));
        prop_assert!(node.as_str().ends_with("\n\n"));
        prop_assert!(node.is_escaped());
    }

    #[test]
    fn heading_rejects_out_of_range_levels(level in proptest::sample::select(vec![0u8, 7, 8, 200])) {
        prop_assert_eq!(md::heading(level, "x", true), Err(Error::HeadingLevel(level)));
    }

    #[test]
    fn bullet_list_one_line_per_item(items in prop::collection::vec("[^\r\n]{0,40}", 1..10)) {
        let node = md::bullet_list(items.clone(), true).unwrap();
        let lines: Vec<&str> = node
            .as_str()
            .trim_end_matches('\n')
            .split('\n')
            .collect();
        prop_assert_eq!(lines.len(), items.len());
        for line in &lines {
            prop_assert!(line.starts_with("- "));
            prop_assert!(is_fully_escaped(&line[2..]));
        }
        prop_assert!(node.is_escaped());
    }

    #[test]
    fn ordered_list_numbers_sequentially(
        items in prop::collection::vec("[^\r\n]{0,40}", 1..10),
        start in 1u64..=5,
    ) {
        let node = md::ordered_list(items.clone(), start, true).unwrap();
        let lines: Vec<&str> = node
            .as_str()
            .trim_end_matches('\n')
            .split('\n')
            .collect();
        prop_assert_eq!(lines.len(), items.len());
        for (i, line) in lines.iter().enumerate() {
            let marker = format!("{}. ", start + i as u64);
            prop_assert!(line.starts_with(&marker));
        }
    }

    #[test]
    fn checklist_markers_follow_pattern(
        pattern in prop::collection::vec(any::<bool>(), 1..10),
    ) {
        let items: Vec<String> = (0..pattern.len()).map(|i| format!("item {i}")).collect();
        let node = md::checklist(items, Some(&pattern), true).unwrap();
        let lines: Vec<&str> = node
            .as_str()
            .trim_end_matches('\n')
            .split('\n')
            .collect();
        prop_assert_eq!(lines.len(), pattern.len());
        for (checked, line) in pattern.iter().zip(&lines) {
            let marker = if *checked { "- [x] " } else { "- [ ] " };
            prop_assert!(line.starts_with(marker));
        }
    }

    #[test]
    fn table_keeps_its_shape(
        cols in 1usize..=4,
        s in prop::collection::vec("[^\r\n]{1,20}", 0..24),
    ) {
        // carve headers and up to five rows out of the pooled cell text
        let mut cells = s.iter().cycle();
        let headers: Vec<&str> = (0..cols).map(|_| cells.next().map(String::as_str).unwrap_or("h")).collect();
        let row_count = s.len() / cols.max(1) % 6;
        let rows: Vec<Vec<&str>> = (0..row_count)
            .map(|_| (0..cols).map(|_| cells.next().map(String::as_str).unwrap_or("c")).collect())
            .collect();

        let node = md::table(headers, rows.clone(), None, true).unwrap();
        let lines: Vec<&str> = node
            .as_str()
            .trim_end_matches('\n')
            .split('\n')
            .collect();
        prop_assert_eq!(lines.len(), 2 + rows.len());

        for line in &lines {
            // an escaped pipe never produces a bare cell separator, so the
            // column count survives a naive split
            prop_assert_eq!(line.split(" | ").count(), cols);
        }
        let separator = vec!["---"; cols].join(" | ");
        prop_assert_eq!(lines[1], separator.as_str());
        prop_assert!(node.is_escaped());
    }

    #[test]
    fn checklist_pattern_length_is_validated(
        items in prop::collection::vec("[^\r\n]{0,10}", 1..6),
        extra in 1usize..4,
    ) {
        let pattern = vec![true; items.len() + extra];
        prop_assert_eq!(
            md::checklist(items.clone(), Some(&pattern), true),
            Err(Error::CheckedPattern { items: items.len(), checked: pattern.len() })
        );
    }
}
