//! vowelgap CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "vowelgap", version, about = "Vowel-gap spelling quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz in the terminal
    Play {
        /// Word list URL or file path (overrides the config)
        #[arg(long)]
        source: Option<String>,

        /// RNG seed for reproducible gaps and order
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many answered words
        #[arg(long)]
        rounds: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load a word list and report usable and skipped words
    Check {
        /// Word list URL or file path (overrides the config)
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and word list
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vowelgap=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            source,
            seed,
            rounds,
            config,
        } => commands::play::execute(source, seed, rounds, config).await,
        Commands::Check {
            source,
            config,
            format,
        } => commands::check::execute(source, config, format).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
