//! The output document builder

use crate::latex::escape;
use crate::types::{Part, Section};
use std::collections::BTreeSet;

/// Top-level regions of the document, in the only order they may be entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    Preamble,
    FrontMatter,
    MainMatter,
    BackMatter,
    Closed,
}

impl Region {
    /// Markup opening the region
    fn marker(self) -> &'static str {
        match self {
            Region::Preamble | Region::Closed => "",
            Region::FrontMatter => "\\frontmatter\n",
            Region::MainMatter => "\\mainmatter\n\n",
            Region::BackMatter => "\\backmatter\n\n\\appendix\n\n",
        }
    }
}

/// Accumulates the LaTeX for one build
///
/// Text is only ever appended, and regions are entered strictly forward.
#[derive(Debug)]
pub struct Document {
    buf: String,
    region: Region,
    opened_parts: BTreeSet<u32>,
    fragments: usize,
    missing: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            region: Region::Preamble,
            opened_parts: BTreeSet::new(),
            fragments: 0,
            missing: Vec::new(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Move to a later region and write its marker
    pub(crate) fn enter(&mut self, region: Region) {
        debug_assert!(
            region > self.region,
            "cannot enter {:?} from {:?}",
            region,
            self.region
        );
        self.region = region;
        self.buf.push_str(region.marker());
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Append a converted fragment
    pub(crate) fn push_fragment(&mut self, latex: &str) {
        self.buf.push_str(latex);
        self.buf.push_str("\n\n");
        self.fragments += 1;
    }

    /// Write the part header unless the part is already open
    ///
    /// Returns whether a header was written.
    pub(crate) fn open_part(&mut self, part: &Part) -> bool {
        if !self.opened_parts.insert(part.number) {
            return false;
        }
        self.buf.push_str(&format!("\\part{{{}}}\n\n", escape(&part.title)));
        true
    }

    pub(crate) fn record_missing(&mut self, section: Section, file: &str) {
        self.missing.push(format!("{}/{}", section.dir_name(), file));
    }

    /// Number of fragments appended so far
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    /// Fragments that could not be read, as `section/file`
    pub fn missing_fragments(&self) -> &[String] {
        &self.missing
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
