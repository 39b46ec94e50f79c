//! Lau Library
//!
//! Word completion over a fixed-alphabet prefix tree. The core is
//! [`data_structures::lau_trie`]; the remaining modules load a dictionary,
//! configure the program, and serve prefix lookups interactively.
//!
//! # Architecture
//!
//! - `data_structures`: the trie, independent of any IO
//! - `dictionary`: word list loading and trie construction
//! - `display` and `repl`: rendering and the prompt loop
//! - `config` and `error`: layered configuration and error types

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod display;
pub mod error;
pub mod repl;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
