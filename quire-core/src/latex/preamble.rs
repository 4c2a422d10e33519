//! Document preamble and closing

use super::escaping::escape;
use crate::types::Manifest;

/// Page and class configuration for the generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreambleConfig {
    /// Base font size (e.g., "11pt")
    pub font_size: String,
    /// Paper name understood by the class and `geometry` (e.g., "letterpaper")
    pub paper: String,
    /// Uniform page margin
    pub margin: String,
    /// Colour for internal links and URLs
    pub link_color: String,
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self {
            font_size: "11pt".to_string(),
            paper: "letterpaper".to_string(),
            margin: "1in".to_string(),
            link_color: "blue".to_string(),
        }
    }
}

impl PreambleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base font size
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Set the paper size
    pub fn with_paper(mut self, paper: impl Into<String>) -> Self {
        self.paper = paper.into();
        self
    }

    /// Set the page margin
    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the link colour
    pub fn with_link_color(mut self, color: impl Into<String>) -> Self {
        self.link_color = color.into();
        self
    }

    /// Render everything up to and including `\begin{document}`
    pub fn render(&self, manifest: &Manifest) -> String {
        let title = escape(&manifest.title);
        let author = escape(&manifest.author);
        let version = escape(&manifest.version);

        format!(
            r#"\documentclass[{font_size},{paper}]{{book}}

% Packages
\usepackage[utf8]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage{{lmodern}}
\usepackage{{hyperref}}
\usepackage{{listings}}
\usepackage{{xcolor}}
\usepackage{{geometry}}

% Page geometry
\geometry{{
  {paper},
  margin={margin}
}}

% Hyperref setup
\hypersetup{{
  colorlinks=true,
  linkcolor={link},
  urlcolor={link},
  pdftitle={{{title}}},
  pdfauthor={{{author}}}
}}

% Listings setup for code blocks
\lstset{{
  basicstyle=\ttfamily\small,
  breaklines=true,
  frame=single,
  backgroundcolor=\color{{gray!10}},
  numbers=left,
  numberstyle=\tiny\color{{gray}},
  tabsize=2
}}

% Title info
\title{{{title}}}
\author{{{author}}}
\date{{Version {version}}}

\begin{{document}}

"#,
            font_size = self.font_size,
            paper = self.paper,
            margin = self.margin,
            link = self.link_color,
            title = title,
            author = author,
            version = version,
        )
    }
}

/// Closing of the document
pub fn closing() -> &'static str {
    "\n\\end{document}\n"
}
