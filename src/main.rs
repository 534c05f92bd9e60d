//! lexi CLI - Command line interface for lexitrie
//!
//! Builds a trie snapshot from a word list and serves prefix searches,
//! membership tests, and definition lookups against it. Designed to be
//! wrapped by interactive frontends that want JSON on stdout.

use clap::{Parser, Subcommand};
use lexitrie::{Definitions, SearchHistory, Trie};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexi")]
#[command(about = "A trie-backed word index with bounded prefix search")]
#[command(version)]
struct Cli {
    /// Path to the index snapshot file
    #[arg(short, long, default_value = "words.lexitrie")]
    snapshot: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Path to the recently-searched log (defaults to the user data dir)
    #[arg(long)]
    history: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a snapshot from a word list (one word per line)
    Build {
        /// Path to the word list file
        wordlist: PathBuf,
        /// Also keep a fast-membership set for O(1) exact lookups
        #[arg(long)]
        fast_membership: bool,
    },

    /// Search for words under a prefix
    Search {
        /// The prefix to search under (omit to search the whole index)
        prefix: Option<String>,
        /// Maximum number of results for the bounded search (even)
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Return every match instead of a bounded head-and-tail sample
        #[arg(long)]
        deep: bool,
        /// Don't record this search in the recently-searched log
        #[arg(long)]
        no_history: bool,
    },

    /// Test whether an exact word is in the index
    Contains {
        /// The word to test
        word: String,
    },

    /// Look up the definitions of a word
    Define {
        /// The word to define
        word: String,
        /// Path to the definitions dataset (JSON, word → definitions)
        #[arg(short = 'D', long, default_value = "definitions.json")]
        definitions: PathBuf,
    },

    /// Show the recently-searched log
    Recent {
        /// Clear the log instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Show index statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            wordlist,
            fast_membership,
        } => {
            let content = std::fs::read_to_string(&wordlist)?;

            let mut trie = if fast_membership {
                Trie::with_fast_membership()
            } else {
                Trie::new()
            };
            trie.insert_many(content.lines().map(str::trim).filter(|w| !w.is_empty()));
            trie.save(&cli.snapshot)?;

            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "words": trie.len(),
                    "snapshot": cli.snapshot.display().to_string()
                }),
            );
        }

        Commands::Search {
            prefix,
            limit,
            deep,
            no_history,
        } => {
            let trie = Trie::load(&cli.snapshot)?;

            let words = if deep {
                trie.deep_prefix_search(prefix.as_deref())
            } else {
                trie.shallow_prefix_search(prefix.as_deref(), limit)
            };

            if !no_history {
                if let Some(ref prefix) = prefix {
                    let mut history = open_history(&cli.history)?;
                    history.record(prefix);
                    history.save()?;
                }
            }

            output(
                &cli.format,
                &serde_json::json!({
                    "prefix": prefix,
                    "count": words.len(),
                    "words": words
                }),
            );
        }

        Commands::Contains { word } => {
            let trie = Trie::load(&cli.snapshot)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "word": word,
                    "found": trie.contains(&word)
                }),
            );
        }

        Commands::Define { word, definitions } => {
            let defs = Definitions::load(&definitions)?;
            match defs.lookup(&word) {
                Some(meanings) => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "word": word,
                            "definitions": meanings
                        }),
                    );
                }
                None => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "status": "error",
                            "message": format!("No definitions for: {}", word)
                        }),
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::Recent { clear } => {
            let mut history = open_history(&cli.history)?;
            if clear {
                history.clear();
                history.save()?;
                output(&cli.format, &serde_json::json!({ "status": "ok" }));
            } else {
                let terms: Vec<&str> = history.entries().collect();
                output(
                    &cli.format,
                    &serde_json::json!({
                        "count": terms.len(),
                        "recent": terms
                    }),
                );
            }
        }

        Commands::Stats => {
            let trie = Trie::load(&cli.snapshot)?;
            let size = std::fs::metadata(&cli.snapshot)?.len();
            output(
                &cli.format,
                &serde_json::json!({
                    "snapshot": cli.snapshot.display().to_string(),
                    "size_bytes": size,
                    "words": trie.len(),
                    "fast_membership": trie.fast_membership()
                }),
            );
        }
    }

    Ok(())
}

fn open_history(path: &Option<PathBuf>) -> anyhow::Result<SearchHistory> {
    let path = match path {
        Some(path) => path.clone(),
        None => SearchHistory::default_path()?,
    };
    Ok(SearchHistory::open(path, lexitrie::history::DEFAULT_CAPACITY)?)
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
