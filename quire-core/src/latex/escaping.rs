//! Escaping of LaTeX reserved characters

/// Escape the ten LaTeX reserved characters in plain text
///
/// Works in a single pass over the input, so the backslashes introduced by
/// escape sequences are never escaped again.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape code placed in a listing: only backslash and braces
pub fn escape_code(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for c in code.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether `c` is one of the characters [`escape`] rewrites
pub fn is_reserved(c: char) -> bool {
    matches!(c, '\\' | '&' | '%' | '$' | '#' | '_' | '{' | '}' | '~' | '^')
}
