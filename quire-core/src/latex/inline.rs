//! Inline markdown spans: code, links and emphasis

use super::escaping::escape;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `` `code` ``
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

/// `[text](url)`
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Emphasis markers from the longest down, with the LaTeX wrapping each one
static EMPHASIS: LazyLock<[(Regex, &str, &str); 4]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"\*\*\*(.+?)\*\*\*").expect("valid bold-italic pattern"),
            "\\textbf{\\textit{",
            "}}",
        ),
        (
            Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"),
            "\\textbf{",
            "}",
        ),
        (
            Regex::new(r"\*(.+?)\*").expect("valid italic pattern"),
            "\\textit{",
            "}",
        ),
        (
            Regex::new(r"_(.+?)_").expect("valid underscore italic pattern"),
            "\\textit{",
            "}",
        ),
    ]
});

const SLOT_OPEN: char = '\u{E000}';
const SLOT_CLOSE: char = '\u{E001}';

/// Emitted LaTeX held out of the working text
///
/// Each entry appears in the text as `SLOT_OPEN index SLOT_CLOSE`. Patterns
/// can match around a placeholder but never inside it, and its content is
/// never escaped again.
#[derive(Debug, Default)]
struct Slots(Vec<String>);

impl Slots {
    /// Store finished markup, returning its placeholder
    fn store(&mut self, markup: String) -> String {
        self.0.push(markup);
        format!("{}{}{}", SLOT_OPEN, self.0.len() - 1, SLOT_CLOSE)
    }

    /// Move any placeholder delimiters already in the input into slots
    fn protect(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c == SLOT_OPEN || c == SLOT_CLOSE {
                let placeholder = self.store(c.to_string());
                out.push_str(&placeholder);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Substitute placeholders, passing the text between them through `literal`
    fn resolve(&self, text: &str, literal: fn(&str) -> String) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(SLOT_OPEN) {
            let after = &rest[start + SLOT_OPEN.len_utf8()..];
            let Some(end) = after.find(SLOT_CLOSE) else {
                break;
            };
            out.push_str(&literal(&rest[..start]));
            if let Some(markup) = after[..end].parse::<usize>().ok().and_then(|i| self.0.get(i)) {
                out.push_str(markup);
            }
            rest = &after[end + SLOT_CLOSE.len_utf8()..];
        }
        out.push_str(&literal(rest));
        out
    }
}

/// Convert the inline markdown in `text` to LaTeX
///
/// Order: inline code, links, then emphasis from the longest marker down.
/// Emphasis may wrap code and links. Literal text is escaped exactly once.
pub fn transform_inline(text: &str) -> String {
    let mut slots = Slots::default();
    let text = slots.protect(text);

    let text = INLINE_CODE_RE
        .replace_all(&text, |caps: &Captures| {
            let code = escape(&slots.resolve(&caps[1], str::to_string));
            slots.store(format!("\\texttt{{{}}}", code))
        })
        .into_owned();

    // The URL is emitted verbatim; the display text takes emphasis
    let text = LINK_RE
        .replace_all(&text, |caps: &Captures| {
            let url = slots.resolve(&caps[2], str::to_string);
            let label = emphasize(&caps[1], 0, &mut slots);
            let label = slots.resolve(&label, escape);
            slots.store(format!("\\href{{{}}}{{{}}}", url, label))
        })
        .into_owned();

    let text = emphasize(&text, 0, &mut slots);
    slots.resolve(&text, escape)
}

/// Apply the emphasis rules from `from` onwards
///
/// Each match becomes a single slot, its content converted with the rules
/// after its own, so wrappers always nest.
fn emphasize(text: &str, from: usize, slots: &mut Slots) -> String {
    let mut text = text.to_string();
    for (level, (re, open, close)) in EMPHASIS.iter().enumerate().skip(from) {
        text = re
            .replace_all(&text, |caps: &Captures| {
                let inner = emphasize(&caps[1], level + 1, slots);
                let inner = slots.resolve(&inner, escape);
                slots.store(format!("{}{}{}", open, inner, close))
            })
            .into_owned();
    }
    text
}
