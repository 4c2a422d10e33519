//! Block-level markdown: comments, fenced code, headers, rules and list items

use super::escaping::escape_code;
use super::inline::transform_inline;
use regex::Regex;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(\w*)\s*$").expect("valid fence pattern"));

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,4}) (.+)$").expect("valid header pattern"));

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---+$").expect("valid rule pattern"));

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*] (.+)$").expect("valid list item pattern"));

/// Language tag used for fences that declare none
pub const DEFAULT_LISTING_LANGUAGE: &str = "text";

/// How level-1 headers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingMode {
    /// Chapter body: `\chapter{}` takes part in book numbering
    Numbered,
    /// Front and back matter: `\chapter*{}`
    Unnumbered,
}

/// One converted output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An `\item` line, indentation included
    Item(String),
    Text(String),
}

impl Line {
    pub fn is_item(&self) -> bool {
        matches!(self, Line::Item(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Line::Item(s) | Line::Text(s) => s,
        }
    }
}

/// Convert a whole fragment to LaTeX lines
///
/// Unrecognised markdown is passed through as escaped literal text.
pub fn transform_block(markdown: &str, mode: HeadingMode) -> Vec<Line> {
    let normalized = markdown.replace("\r\n", "\n");
    let text = COMMENT_RE.replace_all(&normalized, "");
    let source: Vec<&str> = text.split('\n').collect();

    let mut lines = Vec::with_capacity(source.len());
    let mut i = 0;
    while i < source.len() {
        let line = source[i];

        if let Some(caps) = FENCE_OPEN_RE.captures(line) {
            let body = &source[i + 1..];
            // Without a closing fence the opener stays literal text
            if let Some(len) = body.iter().position(|l| l.trim() == "```") {
                let lang = match caps.get(1).map(|m| m.as_str()) {
                    Some(lang) if !lang.is_empty() => lang,
                    _ => DEFAULT_LISTING_LANGUAGE,
                };
                push_listing(&mut lines, lang, &body[..len]);
                i += len + 2;
                continue;
            }
        }

        push_line(&mut lines, line, mode);
        i += 1;
    }

    lines
}

fn push_listing(lines: &mut Vec<Line>, lang: &str, code: &[&str]) {
    lines.push(Line::Text(String::new()));
    lines.push(Line::Text(format!("\\begin{{lstlisting}}[language={}]", lang)));
    for line in code {
        lines.push(Line::Text(escape_code(line)));
    }
    lines.push(Line::Text("\\end{lstlisting}".to_string()));
    lines.push(Line::Text(String::new()));
}

fn push_line(lines: &mut Vec<Line>, line: &str, mode: HeadingMode) {
    if let Some(caps) = HEADER_RE.captures(line) {
        let command = heading_command(caps[1].len(), mode);
        lines.push(Line::Text(format!(
            "\\{}{{{}}}",
            command,
            transform_inline(&caps[2])
        )));
    } else if RULE_RE.is_match(line) {
        lines.push(Line::Text("\\hrulefill".to_string()));
        lines.push(Line::Text(String::new()));
    } else if let Some(caps) = ITEM_RE.captures(line) {
        lines.push(Line::Item(format!(
            "{}\\item {}",
            &caps[1],
            transform_inline(&caps[2])
        )));
    } else {
        lines.push(Line::Text(transform_inline(line)));
    }
}

fn heading_command(level: usize, mode: HeadingMode) -> &'static str {
    match (level, mode) {
        (1, HeadingMode::Numbered) => "chapter",
        (1, HeadingMode::Unnumbered) => "chapter*",
        (2, _) => "section",
        (3, _) => "subsection",
        _ => "subsubsection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str, mode: HeadingMode) -> Vec<String> {
        transform_block(markdown, mode)
            .into_iter()
            .map(Line::into_string)
            .collect()
    }

    #[test]
    fn test_headers_numbered() {
        let lines = render(
            "# One\n## Two\n### Three\n#### Four",
            HeadingMode::Numbered,
        );
        assert_eq!(
            lines,
            vec![
                "\\chapter{One}",
                "\\section{Two}",
                "\\subsection{Three}",
                "\\subsubsection{Four}",
            ]
        );
    }

    #[test]
    fn test_level_one_unnumbered_outside_chapters() {
        let lines = render("# Preface", HeadingMode::Unnumbered);
        assert_eq!(lines, vec!["\\chapter*{Preface}"]);
    }

    #[test]
    fn test_deep_headers_are_literal() {
        let lines = render("##### Deep", HeadingMode::Unnumbered);
        assert_eq!(lines, vec!["\\#\\#\\#\\#\\# Deep"]);
    }

    #[test]
    fn test_header_inline_content() {
        let lines = render("## Using `cargo` & *friends*", HeadingMode::Unnumbered);
        assert_eq!(
            lines,
            vec!["\\section{Using \\texttt{cargo} \\& \\textit{friends}}"]
        );
    }

    #[test]
    fn test_comments_stripped() {
        let lines = render(
            "before<!-- note -->after\n<!--\nmulti\nline\n-->end",
            HeadingMode::Unnumbered,
        );
        assert_eq!(lines, vec!["beforeafter", "end"]);
    }

    #[test]
    fn test_fenced_code_block() {
        let lines = render(
            "Intro\n```rust\nfn main() { let _x = 1; }\n```\nAfter",
            HeadingMode::Unnumbered,
        );
        assert_eq!(
            lines,
            vec![
                "Intro",
                "",
                "\\begin{lstlisting}[language=rust]",
                "fn main() \\{ let _x = 1; \\}",
                "\\end{lstlisting}",
                "",
                "After",
            ]
        );
    }

    #[test]
    fn test_fence_without_language_defaults_to_text() {
        let lines = render("```\n# not a header\n- not an item\n```", HeadingMode::Unnumbered);
        assert_eq!(
            lines,
            vec![
                "",
                "\\begin{lstlisting}[language=text]",
                "# not a header",
                "- not an item",
                "\\end{lstlisting}",
                "",
            ]
        );
    }

    #[test]
    fn test_unclosed_fence_is_literal() {
        let lines = render("```rust\nlet x = 1;", HeadingMode::Unnumbered);
        assert_eq!(lines, vec!["```rust", "let x = 1;"]);
    }

    #[test]
    fn test_fence_indented_under_list_item() {
        let blocks = transform_block(
            "- item\n  ```rust\n  let x = 1;\n  ```\nafter",
            HeadingMode::Unnumbered,
        );
        assert_eq!(
            blocks,
            vec![
                Line::Item("\\item item".to_string()),
                Line::Text(String::new()),
                Line::Text("\\begin{lstlisting}[language=rust]".to_string()),
                Line::Text("  let x = 1;".to_string()),
                Line::Text("\\end{lstlisting}".to_string()),
                Line::Text(String::new()),
                Line::Text("after".to_string()),
            ]
        );
    }

    #[test]
    fn test_horizontal_rule() {
        let lines = render("a\n-----\nb", HeadingMode::Unnumbered);
        assert_eq!(lines, vec!["a", "\\hrulefill", "", "b"]);
    }

    #[test]
    fn test_list_items_keep_indent() {
        let blocks = transform_block("- top\n  * nested **bold**", HeadingMode::Unnumbered);
        assert_eq!(
            blocks,
            vec![
                Line::Item("\\item top".to_string()),
                Line::Item("  \\item nested \\textbf{bold}".to_string()),
            ]
        );
    }

    #[test]
    fn test_crlf_input() {
        let lines = render("# Title\r\n- a\r\n", HeadingMode::Numbered);
        assert_eq!(lines, vec!["\\chapter{Title}", "\\item a", ""]);
    }
}
