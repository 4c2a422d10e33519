//! Validate command implementation

use anyhow::{bail, Context, Result};
use quire_core::{BookLayout, FragmentSource, LocalSource, Manifest, Section};

/// Validate a book manifest
pub fn validate(book_dir: &str, strict: bool) -> Result<()> {
    let layout = BookLayout::new(book_dir);
    let manifest = Manifest::load(layout.manifest_path())
        .with_context(|| format!("Invalid manifest in {}", book_dir))?;

    let mut problems: Vec<String> = manifest
        .validate()
        .into_iter()
        .map(|issue| issue.to_string())
        .collect();

    if strict {
        let source = LocalSource::new(layout.clone());
        let files = manifest
            .emitted_front_matter()
            .map(|item| (Section::FrontMatter, item.file.as_str()))
            .chain(
                manifest
                    .chapters
                    .iter()
                    .map(|chapter| (Section::Chapters, chapter.file.as_str())),
            )
            .chain(
                manifest
                    .back_matter
                    .iter()
                    .map(|item| (Section::BackMatter, item.file.as_str())),
            );

        for (section, file) in files {
            if !source.exists(section, file) {
                problems.push(format!("missing file {}/{}", section.dir_name(), file));
            }
        }
    }

    println!("Manifest: {}", layout.manifest_path().display());
    println!("  Title: {}", manifest.title);
    println!("  Chapters: {}", manifest.chapters.len());

    if problems.is_empty() {
        println!("No problems found");
        return Ok(());
    }

    println!("Problems ({}):", problems.len());
    for problem in &problems {
        println!("  {}", problem);
    }

    if strict {
        bail!("Validation failed for {}", book_dir);
    }

    Ok(())
}
