//! Property tests for the escaper and the list wrapper

use proptest::prelude::*;
use quire_core::latex::{
    escape, is_reserved, markdown_to_latex, wrap_lists, HeadingMode, Line, LIST_CLOSE, LIST_OPEN,
};

proptest! {
    #[test]
    fn escape_adds_one_backslash_per_reserved_char(text in "[a-z &%$#_{}~^\\\\]{0,40}") {
        let reserved = text.chars().filter(|c| is_reserved(*c)).count();
        let escaped = escape(&text);
        prop_assert_eq!(escaped.matches('\\').count(), reserved);
    }

    #[test]
    fn escape_is_identity_without_reserved_chars(text in "[a-zA-Z0-9 .,;:!?()<>*-]{0,40}") {
        prop_assert_eq!(escape(&text), text);
    }

    #[test]
    fn escape_twice_differs_when_reserved(text in "[a-z]{0,5}[&%$#_{}~^\\\\][a-z]{0,5}") {
        let once = escape(&text);
        prop_assert_ne!(escape(&once), once);
    }

    #[test]
    fn items_only_get_one_environment(items in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let lines: Vec<Line> = items
            .iter()
            .map(|item| Line::Item(format!("\\item {}", item)))
            .collect();
        let out = wrap_lists(lines);

        prop_assert_eq!(out.len(), items.len() + 2);
        prop_assert_eq!(out.first().map(String::as_str), Some(LIST_OPEN));
        prop_assert_eq!(out.last().map(String::as_str), Some(LIST_CLOSE));
        prop_assert!(out[1..out.len() - 1].iter().all(|l| l.starts_with("\\item ")));
    }

    #[test]
    fn no_items_no_environment(lines in prop::collection::vec("[a-z ]{0,12}", 0..20)) {
        let input: Vec<Line> = lines.iter().cloned().map(Line::Text).collect();
        let out = wrap_lists(input);

        prop_assert_eq!(out, lines);
    }

    #[test]
    fn environments_are_balanced(
        shape in prop::collection::vec(any::<bool>(), 0..30)
    ) {
        let markdown: Vec<&str> = shape
            .iter()
            .map(|&is_item| if is_item { "- item" } else { "text" })
            .collect();
        let latex = markdown_to_latex(&markdown.join("\n"), HeadingMode::Unnumbered);

        let opens = latex.matches(LIST_OPEN).count();
        let closes = latex.matches(LIST_CLOSE).count();
        let runs = shape
            .iter()
            .enumerate()
            .filter(|&(i, &is_item)| is_item && (i == 0 || !shape[i - 1]))
            .count();
        prop_assert_eq!(opens, closes);
        prop_assert_eq!(opens, runs);
    }

    #[test]
    fn level_one_header_follows_mode(title in "[A-Za-z][A-Za-z ]{0,20}") {
        let markdown = format!("# {}", title);
        prop_assert_eq!(
            markdown_to_latex(&markdown, HeadingMode::Numbered),
            format!("\\chapter{{{}}}", title)
        );
        prop_assert_eq!(
            markdown_to_latex(&markdown, HeadingMode::Unnumbered),
            format!("\\chapter*{{{}}}", title)
        );
    }
}
