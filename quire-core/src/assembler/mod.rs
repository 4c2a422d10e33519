//! Document assembly
//!
//! Walks the manifest once, region by region, converting each fragment and
//! appending it to a [`Document`]:
//!
//! 1. preamble
//! 2. front matter (`\frontmatter`, title page, contents, fragments)
//! 3. main matter (`\mainmatter`, chapters grouped under parts)
//! 4. back matter (`\backmatter`, `\appendix`, fragments)
//! 5. closing

mod document;

pub use document::{Document, Region};

use crate::latex::{closing, escape, markdown_to_latex, HeadingMode, PreambleConfig};
use crate::source::FragmentSource;
use crate::types::{Chapter, Manifest, Section};

/// Assembles one manifest into one LaTeX document
pub struct Assembler<'a, S: FragmentSource + ?Sized> {
    manifest: &'a Manifest,
    source: &'a S,
    preamble: PreambleConfig,
}

impl<'a, S: FragmentSource + ?Sized> Assembler<'a, S> {
    pub fn new(manifest: &'a Manifest, source: &'a S) -> Self {
        Self {
            manifest,
            source,
            preamble: PreambleConfig::default(),
        }
    }

    /// Set preamble configuration
    pub fn with_preamble(mut self, preamble: PreambleConfig) -> Self {
        self.preamble = preamble;
        self
    }

    /// Build the complete document
    pub fn assemble(&self) -> Document {
        for issue in self.manifest.validate() {
            tracing::warn!("Manifest: {}", issue);
        }

        let mut doc = Document::new();
        doc.push_str(&self.preamble.render(self.manifest));

        self.front_matter(&mut doc);
        self.main_matter(&mut doc);
        self.back_matter(&mut doc);

        doc.enter(Region::Closed);
        doc.push_str(closing());
        doc
    }

    fn front_matter(&self, doc: &mut Document) {
        tracing::info!("Processing front matter...");
        doc.enter(Region::FrontMatter);
        doc.push_str("\\maketitle\n");
        doc.push_str("\\tableofcontents\n\n");

        for item in self.manifest.emitted_front_matter() {
            self.matter_fragment(doc, Section::FrontMatter, &item.file);
        }
    }

    fn main_matter(&self, doc: &mut Document) {
        tracing::info!("Processing chapters...");
        doc.enter(Region::MainMatter);

        let parts = self.manifest.part_map();
        for chapter in &self.manifest.chapters {
            if let Some(part) = parts.get(&chapter.number) {
                doc.open_part(part);
            }
            self.chapter_fragment(doc, chapter);
        }
    }

    fn back_matter(&self, doc: &mut Document) {
        tracing::info!("Processing back matter...");
        doc.enter(Region::BackMatter);

        for item in &self.manifest.back_matter {
            self.matter_fragment(doc, Section::BackMatter, &item.file);
        }
    }

    fn matter_fragment(&self, doc: &mut Document, section: Section, file: &str) {
        let fragment = self.source.read_fragment(section, file);
        if !fragment.found {
            doc.record_missing(section, file);
        }
        if !fragment.is_empty() {
            tracing::debug!("Converting {}/{}", section.dir_name(), file);
            doc.push_fragment(&markdown_to_latex(&fragment.text, HeadingMode::Unnumbered));
        }
    }

    fn chapter_fragment(&self, doc: &mut Document, chapter: &Chapter) {
        let fragment = self.source.read_fragment(Section::Chapters, &chapter.file);
        if !fragment.found {
            doc.record_missing(Section::Chapters, &chapter.file);
        }

        if !fragment.is_empty() {
            tracing::debug!("Converting chapter {} ({})", chapter.number, chapter.file);
            doc.push_fragment(&markdown_to_latex(&fragment.text, HeadingMode::Numbered));
        } else if let Some(title) = &chapter.title {
            // Keep the chapter in the numbering even without a body
            doc.push_fragment(&format!("\\chapter{{{}}}", escape(title)));
        }
    }
}
