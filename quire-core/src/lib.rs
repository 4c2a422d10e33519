//! Quire Core Library
//!
//! This crate compiles a book manuscript - a `book.json` manifest plus
//! markdown fragments for front matter, chapters and back matter - into a
//! single LaTeX document.

pub mod assembler;
pub mod compile;
pub mod error;
pub mod latex;
pub mod source;
pub mod types;

pub use assembler::{Assembler, Document, Region};
pub use compile::{build, BuildOptions, BuildReport};
pub use error::{ManifestError, QuireError, Result};
pub use latex::{markdown_to_latex, HeadingMode, PreambleConfig};
pub use source::{Fragment, FragmentSource, LocalSource, MemorySource};
pub use types::{BookLayout, Chapter, Manifest, ManifestIssue, MatterItem, Part, Section};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_creation() {
        let manifest = Manifest::new("Test Book");
        assert_eq!(manifest.title, "Test Book");
        assert!(manifest.chapters.is_empty());
    }
}
