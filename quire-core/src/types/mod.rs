//! Core types: the book manifest and the book directory layout

mod layout;
mod manifest;

pub use layout::{BookLayout, Section, MANIFEST_FILE, OUTPUT_FILE};
pub use manifest::{Chapter, Manifest, ManifestIssue, MatterItem, Part, TITLE_PAGE_FILE};
