//! On-disk layout of a book directory

use std::path::PathBuf;

/// Manifest filename inside the book directory
pub const MANIFEST_FILE: &str = "book.json";

/// Generated document filename inside the output directory
pub const OUTPUT_FILE: &str = "book.tex";

/// A manuscript section backed by its own directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    FrontMatter,
    Chapters,
    BackMatter,
}

impl Section {
    /// Directory name relative to the book root
    pub fn dir_name(self) -> &'static str {
        match self {
            Section::FrontMatter => "front-matter",
            Section::Chapters => "chapters",
            Section::BackMatter => "back-matter",
        }
    }
}

/// Paths of a book directory
///
/// ```text
/// book/
///   book.json
///   front-matter/  chapters/  back-matter/
///   dist/latex/book.tex
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    root: PathBuf,
}

impl BookLayout {
    /// Create a layout rooted at the given book directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn section_dir(&self, section: Section) -> PathBuf {
        self.root.join(section.dir_name())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("dist").join("latex")
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(OUTPUT_FILE)
    }
}

impl Default for BookLayout {
    fn default() -> Self {
        Self::new("book")
    }
}
