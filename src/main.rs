//! Search adapter - local entry point
//!
//! Reads one invocation event as JSON (from a file or stdin), runs the
//! adapter once, and prints the wire-shape result: a bare JSON string on
//! success, a `{"statusCode": 500, "body": ...}` object on failure.

use clap::Parser;
use search_adapter::config::AdapterConfig;
use search_adapter::handler::SearchQueryAdapter;
use search_adapter::logging::init_default_logging;
use search_adapter::search::TavilyClient;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Forward an invocation event to the Tavily search API
#[derive(Parser)]
#[command(name = "search-adapter")]
#[command(about = "Forward an invocation event to the Tavily search API")]
#[command(version)]
struct Cli {
    /// Event JSON file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    info!("Starting search-adapter v{}", env!("CARGO_PKG_VERSION"));

    let event = match read_event(&cli.event) {
        Ok(event) => event,
        Err(e) => {
            error!("Failed to read event: {}", e);
            process::exit(1);
        }
    };

    let adapter = match build_adapter() {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("Failed to configure adapter: {}", e);
            process::exit(1);
        }
    };

    // The adapter absorbs all invocation failures, so both outcome shapes
    // print to stdout and exit 0.
    let outcome = adapter.handle(&event).await;
    println!("{}", outcome.into_value());
}

fn read_event(path: &Option<PathBuf>) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = match path {
        Some(path) => {
            info!("Reading event from: {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn build_adapter() -> Result<SearchQueryAdapter, Box<dyn std::error::Error>> {
    let config = AdapterConfig::from_env()?;
    let client = TavilyClient::new(config.tavily)?;
    Ok(SearchQueryAdapter::new(client, config.default_query))
}
