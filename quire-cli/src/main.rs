//! Quire CLI - Command-line interface for compiling book manuscripts

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the manuscript into dist/latex/book.tex
    Build {
        /// Book directory containing book.json
        #[arg(short, long, default_value = "book")]
        book_dir: String,

        /// Base font size
        #[arg(long, default_value = "11pt")]
        font_size: String,

        /// Paper size (e.g. letterpaper, a4paper)
        #[arg(long, default_value = "letterpaper")]
        paper: String,

        /// Page margin
        #[arg(long, default_value = "1in")]
        margin: String,
    },

    /// Display the structure declared by the manifest
    Info {
        /// Book directory containing book.json
        #[arg(short, long, default_value = "book")]
        book_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the manifest for structural problems
    Validate {
        /// Book directory containing book.json
        #[arg(short, long, default_value = "book")]
        book_dir: String,

        /// Also require every fragment file to exist, and fail on any issue
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quire_cli=debug,quire_core=debug"
    } else {
        "quire_cli=info,quire_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Build {
            book_dir,
            font_size,
            paper,
            margin,
        } => commands::build(&book_dir, &font_size, &paper, &margin),

        Commands::Info { book_dir, json } => commands::info(&book_dir, json),

        Commands::Validate { book_dir, strict } => commands::validate(&book_dir, strict),
    }
}
