//! In-memory fragment source

use super::FragmentSource;
use crate::types::Section;
use std::collections::HashMap;

/// Holds fragments in memory, keyed by section and filename
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    fragments: HashMap<(Section, String), String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment
    pub fn with(
        mut self,
        section: Section,
        file: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(section, file, text);
        self
    }

    pub fn insert(&mut self, section: Section, file: impl Into<String>, text: impl Into<String>) {
        self.fragments.insert((section, file.into()), text.into());
    }
}

impl FragmentSource for MemorySource {
    fn fetch(&self, section: Section, file: &str) -> std::io::Result<Option<String>> {
        Ok(self.fragments.get(&(section, file.to_string())).cloned())
    }
}
