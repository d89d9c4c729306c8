// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use contextstack_nlp::utils::logging::{format_info, format_success, format_warning};
use contextstack_nlp::{Config, CorpusLoader, NlpService};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "contextstack_nlp")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Action item extraction and TF-IDF document search", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract action items from text
    Extract {
        /// Text to analyze (reads --file when omitted)
        text: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Rank corpus documents by similarity to a query
    Search {
        /// Search query text
        query: String,

        #[arg(long, value_name = "DIR", env = "CONTEXTSTACK_CORPUS_DIR")]
        corpus: Option<PathBuf>,

        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Print the fixed-length TF-IDF vector of a text
    Embed {
        text: String,

        #[arg(long, value_name = "DIR", env = "CONTEXTSTACK_CORPUS_DIR")]
        corpus: Option<PathBuf>,
    },

    /// Show document store statistics
    Stats {
        #[arg(long, value_name = "DIR", env = "CONTEXTSTACK_CORPUS_DIR")]
        corpus: Option<PathBuf>,
    },

    /// Serve JSON-lines requests over stdin/stdout
    Serve {
        #[arg(long, value_name = "DIR", env = "CONTEXTSTACK_CORPUS_DIR")]
        corpus: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    contextstack_nlp::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let service = NlpService::new(config);

    match cli.command {
        Commands::Extract { text, file } => {
            cmd_extract(&service, text, file).await?;
        }
        Commands::Search {
            query,
            corpus,
            top_k,
        } => {
            preload(&service, corpus.as_deref(), cli.color).await?;
            cmd_search(&service, &query, top_k)?;
        }
        Commands::Embed { text, corpus } => {
            preload(&service, corpus.as_deref(), cli.color).await?;
            println!("{}", serde_json::to_string(&service.embed(&text))?);
        }
        Commands::Stats { corpus } => {
            preload(&service, corpus.as_deref(), cli.color).await?;
            println!("{}", serde_json::to_string_pretty(&service.stats()?)?);
        }
        Commands::Serve { corpus } => {
            preload(&service, corpus.as_deref(), false).await?;
            contextstack_nlp::server::run_stdio(&service)
                .await
                .context("stdio transport failed")?;
        }
    }

    Ok(())
}

async fn preload(service: &NlpService, corpus: Option<&Path>, colored: bool) -> Result<()> {
    let Some(root) = corpus else {
        return Ok(());
    };

    let loader = CorpusLoader::new(service.config().corpus.clone()).with_progress(colored);

    let stats = loader
        .load_directory(service, root)
        .await
        .with_context(|| format!("Failed to load corpus from {}", root.display()))?;

    if stats.files_failed > 0 {
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} of {} corpus files could not be indexed",
                stats.files_failed,
                stats.files_indexed + stats.files_failed
            ))
        );
    } else {
        eprintln!(
            "{}",
            format_success(&format!("Indexed {} corpus files", stats.files_indexed))
        );
    }

    Ok(())
}

async fn cmd_extract(
    service: &NlpService,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => return Err(anyhow::anyhow!("Provide TEXT or --file")),
    };

    let actions = service.extract_actions(&text);
    info!("Found {} action item(s)", actions.len());
    println!("{}", serde_json::to_string_pretty(&actions)?);

    Ok(())
}

fn cmd_search(service: &NlpService, query: &str, top_k: Option<usize>) -> Result<()> {
    info!("Searching for: {}", query);

    let results = service.search_documents(query, top_k);

    if results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        println!(
            "{}",
            format_info("Pass --corpus DIR to load documents before searching")
        );
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", results.len());
    println!("{}", "=".repeat(80));

    for (idx, result) in results.iter().enumerate() {
        println!("\n{}. {}", idx + 1, result.format_summary(300));
    }

    println!("{}", "=".repeat(80));

    Ok(())
}
