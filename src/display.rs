//! Completion rendering.
//!
//! Formats the completions for one prefix as a header line followed by one
//! line per word. With color on, the typed prefix is green and the rest of
//! the word red.

use std::fmt::Write as _;

use colored::Colorize;

/// How completions are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Highlight prefix and remainder
    pub color: bool,

    /// Cap on listed words; the rest are summarized in one line
    pub max_results: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            max_results: None,
        }
    }
}

/// Renders `words`, all of which start with `prefix`.
pub fn render_completions(words: &[String], prefix: &str, options: RenderOptions) -> String {
    let mut out = String::new();
    let shown_prefix = highlight(prefix, options.color, true);

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "found {} words beginning with {}",
        words.len(),
        shown_prefix
    );

    let limit = options.max_results.unwrap_or(words.len()).min(words.len());
    for word in &words[..limit] {
        let rest = word.get(prefix.len()..).unwrap_or_default();
        let _ = writeln!(
            out,
            "{}{}",
            highlight(prefix, options.color, true),
            highlight(rest, options.color, false)
        );
    }

    if limit < words.len() {
        let _ = writeln!(out, "... and {} more", words.len() - limit);
    }
    out
}

fn highlight(text: &str, color: bool, is_prefix: bool) -> String {
    match (color, is_prefix) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}
