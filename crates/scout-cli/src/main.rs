//! Scout suggestion-query CLI
//!
//! Runs suggestion queries through a `SuggestProvider` over a demo
//! in-memory backend. Exercises the full parse/normalize/dispatch path
//! from the command line:
//! - `scout query <keyword> [--limit N] [--action N]`
//! - `scout uri <uri>` for raw suggest URIs (including invalid ones)
//! - `scout type <uri>` to print the reported MIME type

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scout_core::backend::InMemoryBackend;
use scout_core::config::{Config, Directories};
use scout_core::provider::SuggestProvider;
use scout_core::query::build_suggest_uri;
use scout_types::SuggestionResult;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Scout suggestion-query CLI
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout - suggestion query front door")]
#[command(version)]
#[command(after_help = "\
Examples:
  scout query news                        Query suggestions for 'news'
  scout query news --limit 3 --action 1   Bounded query with an action type
  scout uri 'content://scout.search/search_suggest_query/news?limit=3'
  scout type 'content://scout.search/search_suggest_query/news'
")]
struct Cli {
    /// Custom config file path (defaults to the XDG config location)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a suggestion query for a keyword
    Query {
        /// Search keyword
        keyword: String,

        /// Maximum number of rows (non-positive values fall back to the default)
        #[arg(long)]
        limit: Option<i64>,

        /// Action type code (out-of-range values fall back to the default)
        #[arg(long)]
        action: Option<i64>,
    },

    /// Run a raw suggest URI through the provider
    Uri {
        /// Full content-style suggest URI
        uri: String,
    },

    /// Print the MIME type the provider reports for a URI
    Type {
        /// Full content-style suggest URI
        uri: String,
    },
}

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scout_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Directories::new().config_file,
    };
    Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Fixed rows the demo backend serves. Real deployments plug in their
/// own `SearchBackend` implementation.
fn demo_rows() -> Vec<SuggestionResult> {
    vec![
        SuggestionResult {
            description: Some("Channel 1".to_string()),
            intent_action: Some("view".to_string()),
            intent_data: Some("content://channels/1".to_string()),
            is_playable: true,
            ..SuggestionResult::new("ch1", "News Channel")
        },
        SuggestionResult {
            description: Some("Channel 7".to_string()),
            intent_action: Some("view".to_string()),
            intent_data: Some("content://channels/7".to_string()),
            is_playable: true,
            ..SuggestionResult::new("ch7", "World News Tonight")
        },
        SuggestionResult {
            description: Some("Channel 12".to_string()),
            duration_millis: Some(3_600_000),
            ..SuggestionResult::new("prog-42", "Nature Documentary")
        },
        SuggestionResult {
            description: Some("Channel 3".to_string()),
            ..SuggestionResult::new("prog-9", "Cooking Show")
        },
    ]
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let authority = config.authority.clone();
    let provider = SuggestProvider::new(config, Arc::new(InMemoryBackend::new(demo_rows())));

    match cli.command {
        Commands::Query {
            keyword,
            limit,
            action,
        } => {
            let uri = build_suggest_uri(&authority, &keyword, limit, action);
            run_uri(&provider, &uri)
        }
        Commands::Uri { uri } => run_uri(&provider, &uri),
        Commands::Type { uri } => {
            let mime = provider.result_type(&uri)?;
            println!("{mime}");
            Ok(())
        }
    }
}

fn run_uri(provider: &SuggestProvider, uri: &str) -> Result<()> {
    let rows = provider.query(uri)?;
    let json = serde_json::to_string_pretty(&rows).context("Failed to serialize results")?;
    println!("{json}");
    Ok(())
}
