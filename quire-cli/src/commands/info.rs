//! Info command implementation

use anyhow::{Context, Result};
use quire_core::{BookLayout, Manifest};
use serde::Serialize;

/// Manifest summary output
#[derive(Serialize)]
struct BookInfo {
    title: String,
    author: String,
    version: String,
    front_matter: Vec<String>,
    parts: Vec<PartInfo>,
    chapters: usize,
    back_matter: Vec<String>,
}

#[derive(Serialize)]
struct PartInfo {
    number: u32,
    title: String,
    chapters: Vec<u32>,
}

/// Display the structure declared by a book manifest
pub fn info(book_dir: &str, json: bool) -> Result<()> {
    let layout = BookLayout::new(book_dir);
    let manifest = Manifest::load(layout.manifest_path())
        .with_context(|| format!("Failed to load manifest from {}", book_dir))?;

    let info = BookInfo {
        title: manifest.title.clone(),
        author: manifest.author.clone(),
        version: manifest.version.clone(),
        front_matter: manifest.front_matter.iter().map(|i| i.file.clone()).collect(),
        parts: manifest
            .parts
            .iter()
            .map(|p| PartInfo {
                number: p.number,
                title: p.title.clone(),
                chapters: p.chapters.clone(),
            })
            .collect(),
        chapters: manifest.chapters.len(),
        back_matter: manifest.back_matter.iter().map(|i| i.file.clone()).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:        {}", info.title);
        if !info.author.is_empty() {
            println!("Author:       {}", info.author);
        }
        if !info.version.is_empty() {
            println!("Version:      {}", info.version);
        }
        println!("Front matter: {}", info.front_matter.len());
        for part in &info.parts {
            println!("Part {}:       {} {:?}", part.number, part.title, part.chapters);
        }
        println!("Chapters:     {}", info.chapters);
        println!("Back matter:  {}", info.back_matter.len());
    }

    Ok(())
}
