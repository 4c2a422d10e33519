//! Fragment sources: where the markdown behind each manifest item comes from

mod local;
mod memory;

pub use local::LocalSource;
pub use memory::MemorySource;

use crate::types::Section;

/// One markdown file's content, read for a single manifest item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub section: Section,
    pub file: String,
    pub text: String,
    /// False when the file could not be read; `text` is then empty
    pub found: bool,
}

impl Fragment {
    fn present(section: Section, file: &str, text: String) -> Self {
        Self {
            section,
            file: file.to_string(),
            text,
            found: true,
        }
    }

    fn absent(section: Section, file: &str) -> Self {
        Self {
            section,
            file: file.to_string(),
            text: String::new(),
            found: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Provides fragment content by section and filename
pub trait FragmentSource {
    /// Fetch raw content, returning `Ok(None)` when the file does not exist
    fn fetch(&self, section: Section, file: &str) -> std::io::Result<Option<String>>;

    /// Whether a fragment file exists
    fn exists(&self, section: Section, file: &str) -> bool {
        matches!(self.fetch(section, file), Ok(Some(_)))
    }

    /// Read a fragment, degrading to empty content with a warning
    ///
    /// Never fails: a missing or unreadable fragment must not abort a build.
    fn read_fragment(&self, section: Section, file: &str) -> Fragment {
        match self.fetch(section, file) {
            Ok(Some(text)) => Fragment::present(section, file, text),
            Ok(None) => {
                tracing::warn!("File not found: {}/{}", section.dir_name(), file);
                Fragment::absent(section, file)
            }
            Err(e) => {
                tracing::warn!("Cannot read {}/{}: {}", section.dir_name(), file, e);
                Fragment::absent(section, file)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fragment_found() {
        let source = MemorySource::new().with(Section::Chapters, "one.md", "# One");
        let fragment = source.read_fragment(Section::Chapters, "one.md");
        assert!(fragment.found);
        assert_eq!(fragment.text, "# One");
    }

    #[test]
    fn test_read_fragment_missing_is_empty() {
        let source = MemorySource::new();
        let fragment = source.read_fragment(Section::BackMatter, "gone.md");
        assert!(!fragment.found);
        assert!(fragment.is_empty());
        assert_eq!(fragment.file, "gone.md");
        assert!(!source.exists(Section::BackMatter, "gone.md"));
    }
}
