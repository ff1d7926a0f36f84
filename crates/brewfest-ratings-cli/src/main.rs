//! BrewFest Ratings — entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use brewfest_ratings::config::DEFAULT_CATALOG_URL;
use brewfest_ratings_cli::commands::{catalog_cmd, run_cmd};
use brewfest_ratings_cli::RunOptions;

#[derive(Parser)]
#[command(
    name = "brewfest-ratings",
    about = "Rate every beer at the festival and save the sheet as CSV",
    version,
    after_help = "Run 'brewfest-ratings run' to build the sheet. Without a command nothing is fetched or written."
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog, look up every rating, and write output-<hex>.csv
    Run {
        /// Festival catalog JSON endpoint
        #[arg(long)]
        catalog_url: Option<String>,
        /// Rating-site search page (q, type and sort are appended)
        #[arg(long)]
        search_url: Option<String>,
        /// Pause after every rating lookup, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Per-request timeout, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Directory to write the CSV into (defaults to the current directory)
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },
    /// List the festival catalog without looking up ratings
    Catalog {
        /// Festival catalog JSON endpoint
        #[arg(long, default_value = DEFAULT_CATALOG_URL)]
        catalog_url: String,
        /// Per-request timeout, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        // No subcommand → help only, no network or file activity
        None => Cli::command().print_help().map_err(Into::into),

        Some(Commands::Run {
            catalog_url,
            search_url,
            delay_ms,
            timeout_ms,
            output_dir,
        }) => run_cmd::run(RunOptions {
            catalog_url,
            search_url,
            delay_ms,
            timeout_ms,
            output_dir,
        })
        .await
        .map(|_| ()),

        Some(Commands::Catalog {
            catalog_url,
            timeout_ms,
            json,
        }) => catalog_cmd::run(&catalog_url, timeout_ms, json).await,

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "brewfest-ratings", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
