//! Interactive prefix lookup.
//!
//! Reads one prefix per line, looks up its completions, and writes them
//! back. Generic over the input and output streams so it runs the same
//! against a terminal or an in-memory buffer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::prompt::PromptConfig;
use crate::data_structures::lau_trie::LauTrie;
use crate::display::{render_completions, RenderOptions};
use crate::error::{report_error, ErrorContext, LauError, LauResult};

/// Runs the prompt loop until `input` is exhausted.
///
/// Lines shorter than `min_prefix_len` are ignored. A prefix the trie
/// rejects, or a line that is not UTF-8, is reported and the loop
/// continues; IO failures end it.
///
/// # Returns
///
/// The number of prefixes that were looked up.
pub fn run<T, R, W>(trie: &LauTrie<T>, mut input: R, mut output: W, config: &PromptConfig) -> LauResult<usize>
where
    R: BufRead,
    W: Write,
{
    let options = RenderOptions {
        color: config.color,
        max_results: config.max_results,
    };
    let mut lookups = 0;
    let mut line = Vec::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let prefix = match std::str::from_utf8(&line) {
            Ok(text) => text.trim(),
            Err(e) => {
                let shown = String::from_utf8_lossy(&line);
                let shown = shown.trim();
                let error = LauError::InvalidUtf8(e);
                writeln!(output, "cannot look up {shown:?}: {error}")?;
                report_error(ErrorContext::new(error, "repl").with_details(shown));
                continue;
            }
        };

        if prefix.chars().count() < config.min_prefix_len {
            debug!(prefix, "Prefix too short, ignoring");
            continue;
        }

        match trie.completions(prefix) {
            Ok(words) => {
                lookups += 1;
                output.write_all(render_completions(&words, prefix, options).as_bytes())?;
            }
            Err(e) => {
                writeln!(output, "cannot look up {prefix:?}: {e}")?;
                report_error(ErrorContext::new(LauError::Trie(e), "repl").with_details(prefix));
            }
        }
    }

    writeln!(output)?;
    Ok(lookups)
}
