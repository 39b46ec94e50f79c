//! Lau - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the dictionary into a
//! trie, and serves prefix lookups from standard input or the command line.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lau_lib::config::{ConfigLoader, LauConfig, LogConfig, ENV_PREFIX};
use lau_lib::data_structures::LauTrie;
use lau_lib::display::{render_completions, RenderOptions};
use lau_lib::error::{LauError, LauResult};
use lau_lib::{dictionary, repl};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lau.
#[derive(Parser, Debug)]
#[clap(name = "lau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Disable colored output
    #[clap(long)]
    no_color: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read prefixes from standard input and list their completions
    Repl,

    /// List completions for the given prefixes and exit
    Query {
        /// Prefixes to complete
        #[clap(required = true)]
        prefixes: Vec<String>,

        /// Print a JSON object mapping each prefix to its completions
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr.
fn init_logging(log: &LogConfig) -> LauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads configuration and applies command-line overrides.
fn load_config(args: &Args, loader: &ConfigLoader) -> LauConfig {
    let mut config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Some(path) = &args.dictionary {
        config.dictionary.path = path.clone();
    }
    if args.no_color {
        config.prompt.color = false;
        colored::control::set_override(false);
    }
    config
}

/// Reads the dictionary and builds the trie.
fn load_trie(config: &LauConfig) -> LauResult<LauTrie<()>> {
    let words = dictionary::load_dictionary(&config.dictionary, &config.trie)?;
    dictionary::build_trie(&words, &config.trie)
}

/// Main entry point for the application.
fn main() -> LauResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.as_ref().unwrap_or(&Command::Repl) {
        Command::Repl => {
            let config = load_config(&args, &loader);
            init_logging(&config.log)?;
            lau_lib::init();

            let trie = load_trie(&config)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let lookups = repl::run(&trie, stdin.lock(), stdout.lock(), &config.prompt)?;

            info!(lookups, "Input finished");
            Ok(())
        }
        Command::Query { prefixes, json } => {
            let config = load_config(&args, &loader);
            init_logging(&config.log)?;
            lau_lib::init();

            let trie = load_trie(&config)?;
            let mut stdout = io::stdout().lock();

            if *json {
                let mut results = BTreeMap::new();
                for prefix in prefixes {
                    results.insert(prefix.as_str(), trie.completions(prefix)?);
                }
                serde_json::to_writer_pretty(&mut stdout, &results)?;
                writeln!(stdout)?;
            } else {
                let options = RenderOptions {
                    color: config.prompt.color,
                    max_results: config.prompt.max_results,
                };
                for prefix in prefixes {
                    let words = trie.completions(prefix)?;
                    stdout.write_all(render_completions(&words, prefix, options).as_bytes())?;
                }
            }
            Ok(())
        }
        Command::Validate => match loader.load() {
            Ok(_) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Configuration validation error: {e}");
                process::exit(1);
            }
        },
        Command::GenConfig { output } => {
            let default_config = LauConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LauError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
