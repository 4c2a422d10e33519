//! Fragment source backed by a book directory on disk

use super::FragmentSource;
use crate::types::{BookLayout, Section};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Reads fragments from the section directories of a [`BookLayout`]
pub struct LocalSource {
    layout: BookLayout,
}

impl LocalSource {
    pub fn new(layout: BookLayout) -> Self {
        Self { layout }
    }

    /// Resolve a manifest filename inside its section directory,
    /// rejecting names that would escape it
    fn full_path(&self, section: Section, file: &str) -> io::Result<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in Path::new(file).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("'{}' points outside {}/", file, section.dir_name()),
                    ));
                }
            }
        }

        Ok(self.layout.section_dir(section).join(normalized))
    }
}

impl FragmentSource for LocalSource {
    fn fetch(&self, section: Section, file: &str) -> io::Result<Option<String>> {
        let path = self.full_path(section, file)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
