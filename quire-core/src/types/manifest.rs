//! The book manifest - the declared structure of a manuscript

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

/// Front-matter file whose content is produced by `\maketitle` instead
pub const TITLE_PAGE_FILE: &str = "title.md";

/// The parsed `book.json` manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Book title
    pub title: String,

    /// Author line, as printed on the title page
    #[serde(default)]
    pub author: String,

    /// Manuscript version
    #[serde(default)]
    pub version: String,

    /// Front-matter files, in order
    #[serde(default)]
    pub front_matter: Vec<MatterItem>,

    /// Part groupings over chapter numbers
    #[serde(default)]
    pub parts: Vec<Part>,

    /// Chapters, in emission order
    #[serde(default)]
    pub chapters: Vec<Chapter>,

    /// Back-matter files, in order
    #[serde(default)]
    pub back_matter: Vec<MatterItem>,
}

/// A front- or back-matter entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatterItem {
    /// Filename relative to the section directory
    pub file: String,
}

impl MatterItem {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Whether this item is the title page, which is never emitted as a fragment
    pub fn is_title_page(&self) -> bool {
        self.file == TITLE_PAGE_FILE
    }
}

/// A numbered chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub number: u32,

    /// Filename relative to the chapters directory
    pub file: String,

    /// Fallback heading used when the chapter file is missing or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Chapter {
    pub fn new(number: u32, file: impl Into<String>) -> Self {
        Self {
            number,
            file: file.into(),
            title: None,
        }
    }

    /// Set the fallback title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A group of chapters under a shared division header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub number: u32,
    pub title: String,

    /// Numbers of the chapters this part contains
    #[serde(default)]
    pub chapters: Vec<u32>,
}

impl Part {
    pub fn new(number: u32, title: impl Into<String>, chapters: Vec<u32>) -> Self {
        Self {
            number,
            title: title.into(),
            chapters,
        }
    }
}

/// A structural problem found in a manifest
///
/// None of these stop a build; they are reported so the author can fix the
/// manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    /// A chapter is listed by more than one part; `assigned` is the part it ends up in
    ChapterInMultipleParts {
        chapter: u32,
        assigned: u32,
        ignored: u32,
    },
    /// A part lists a chapter number no chapter declares
    UnknownChapter { part: u32, chapter: u32 },
    /// Two chapters share a number
    DuplicateChapter(u32),
    /// Two parts share a number
    DuplicatePart(u32),
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestIssue::ChapterInMultipleParts {
                chapter,
                assigned,
                ignored,
            } => write!(
                f,
                "chapter {} is listed in parts {} and {}; using part {}",
                chapter, assigned, ignored, assigned
            ),
            ManifestIssue::UnknownChapter { part, chapter } => {
                write!(f, "part {} lists undeclared chapter {}", part, chapter)
            }
            ManifestIssue::DuplicateChapter(number) => {
                write!(f, "chapter number {} is declared more than once", number)
            }
            ManifestIssue::DuplicatePart(number) => {
                write!(f, "part number {} is declared more than once", number)
            }
        }
    }
}

impl Manifest {
    /// Create an empty manifest with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            version: String::new(),
            front_matter: Vec::new(),
            parts: Vec::new(),
            chapters: Vec::new(),
            back_matter: Vec::new(),
        }
    }

    /// Load and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound(path.to_path_buf())
            } else {
                ManifestError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        serde_json::from_str(&contents).map_err(|e| ManifestError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Map each chapter number to the part that contains it
    ///
    /// When a chapter is listed by several parts, the first part in
    /// declaration order wins.
    pub fn part_map(&self) -> BTreeMap<u32, &Part> {
        let mut map = BTreeMap::new();
        for part in &self.parts {
            for &chapter in &part.chapters {
                map.entry(chapter).or_insert(part);
            }
        }
        map
    }

    /// Front-matter items that are emitted as fragments
    pub fn emitted_front_matter(&self) -> impl Iterator<Item = &MatterItem> {
        self.front_matter.iter().filter(|item| !item.is_title_page())
    }

    /// Check the manifest for structural problems
    pub fn validate(&self) -> Vec<ManifestIssue> {
        let mut issues = Vec::new();

        let mut seen_chapters = BTreeSet::new();
        for chapter in &self.chapters {
            if !seen_chapters.insert(chapter.number) {
                issues.push(ManifestIssue::DuplicateChapter(chapter.number));
            }
        }

        let mut seen_parts = BTreeSet::new();
        let mut owner: BTreeMap<u32, u32> = BTreeMap::new();
        for part in &self.parts {
            if !seen_parts.insert(part.number) {
                issues.push(ManifestIssue::DuplicatePart(part.number));
            }

            for &chapter in &part.chapters {
                if !seen_chapters.contains(&chapter) {
                    issues.push(ManifestIssue::UnknownChapter {
                        part: part.number,
                        chapter,
                    });
                }

                match owner.get(&chapter) {
                    Some(&assigned) if assigned != part.number => {
                        issues.push(ManifestIssue::ChapterInMultipleParts {
                            chapter,
                            assigned,
                            ignored: part.number,
                        });
                    }
                    Some(_) => {}
                    None => {
                        owner.insert(chapter, part.number);
                    }
                }
            }
        }

        issues
    }
}
