//! One complete build: manifest in, `book.tex` out

use crate::assembler::Assembler;
use crate::error::{QuireError, Result};
use crate::latex::PreambleConfig;
use crate::source::LocalSource;
use crate::types::{BookLayout, Manifest, ManifestIssue};
use std::path::PathBuf;

/// Build configuration
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub layout: BookLayout,
    pub preamble: PreambleConfig,
}

impl BuildOptions {
    pub fn new(layout: BookLayout) -> Self {
        Self {
            layout,
            preamble: PreambleConfig::default(),
        }
    }

    /// Set preamble configuration
    pub fn with_preamble(mut self, preamble: PreambleConfig) -> Self {
        self.preamble = preamble;
        self
    }
}

/// Summary of a finished build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub title: String,
    pub output_path: PathBuf,
    /// Fragments converted into the document
    pub fragments: usize,
    /// Fragments that could not be read, as `section/file`
    pub missing: Vec<String>,
    pub issues: Vec<ManifestIssue>,
}

/// Compile the book described by `options.layout` into a LaTeX file
///
/// A missing or malformed manifest aborts the build before anything is
/// written. Missing fragments only produce warnings.
pub fn build(options: &BuildOptions) -> Result<BuildReport> {
    let layout = &options.layout;

    tracing::info!("Reading book manifest...");
    let manifest = Manifest::load(layout.manifest_path())?;
    tracing::info!("Compiling: {} v{}", manifest.title, manifest.version);

    let source = LocalSource::new(layout.clone());
    let document = Assembler::new(&manifest, &source)
        .with_preamble(options.preamble.clone())
        .assemble();

    let output_dir = layout.output_dir();
    std::fs::create_dir_all(&output_dir).map_err(|e| QuireError::Output {
        path: output_dir.clone(),
        source: e,
    })?;

    let output_path = layout.output_path();
    std::fs::write(&output_path, document.as_str()).map_err(|e| QuireError::Output {
        path: output_path.clone(),
        source: e,
    })?;

    tracing::info!("LaTeX output written to: {}", output_path.display());

    Ok(BuildReport {
        title: manifest.title.clone(),
        output_path,
        fragments: document.fragment_count(),
        missing: document.missing_fragments().to_vec(),
        issues: manifest.validate(),
    })
}
