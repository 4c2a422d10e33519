//! Build command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use quire_core::{BookLayout, BuildOptions, PreambleConfig};
use std::time::Duration;

/// Compile the book in `book_dir` to LaTeX
pub fn build(book_dir: &str, font_size: &str, paper: &str, margin: &str) -> Result<()> {
    let options = BuildOptions::new(BookLayout::new(book_dir)).with_preamble(
        PreambleConfig::new()
            .with_font_size(font_size)
            .with_paper(paper)
            .with_margin(margin),
    );
    tracing::debug!("Build options: {:?}", options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Compiling {}...", book_dir));

    let report = match quire_core::build(&options) {
        Ok(report) => report,
        Err(e) => {
            pb.abandon();
            return Err(e).with_context(|| format!("Failed to build book in {}", book_dir));
        }
    };

    pb.finish_with_message(format!(
        "Compiled '{}' ({} fragments) -> {}",
        report.title,
        report.fragments,
        report.output_path.display()
    ));

    println!("LaTeX output written to: {}", report.output_path.display());
    if !report.missing.is_empty() {
        println!("Missing fragments ({}):", report.missing.len());
        for file in &report.missing {
            println!("  {}", file);
        }
    }

    Ok(())
}
