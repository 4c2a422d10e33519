//! Markdown to LaTeX conversion
//!
//! A fragment goes through the block transformer (which applies the inline
//! transformer and escaper to its text) and then the list wrapper.

mod block;
mod escaping;
mod inline;
mod list;
mod preamble;

pub use block::{transform_block, HeadingMode, Line, DEFAULT_LISTING_LANGUAGE};
pub use escaping::{escape, escape_code, is_reserved};
pub use inline::transform_inline;
pub use list::{wrap_lists, LIST_CLOSE, LIST_OPEN};
pub use preamble::{closing, PreambleConfig};

/// Convert one markdown fragment to LaTeX
pub fn markdown_to_latex(markdown: &str, mode: HeadingMode) -> String {
    wrap_lists(transform_block(markdown, mode)).join("\n")
}
