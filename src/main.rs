// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pixelguess::config::{self, Config, DEFAULT_STAGGER_MS};

mod cli;

#[derive(Parser)]
#[command(
    name = "pixelguess",
    about = "Pixelguess — watch a vision model guess a picture as the resolution increases",
    version,
    after_help = "Run 'pixelguess' with no command to enter interactive mode."
)]
struct Cli {
    /// Guessing server base URL (falls back to $PIXELGUESS_SERVER)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Delay between resolution steps, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_STAGGER_MS)]
    stagger_ms: u64,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random selection of the server's sample pictures
    Samples {
        /// How many samples to show
        #[arg(long, default_value_t = 8)]
        count: usize,
    },
    /// Run one guessing session over a sample picture
    Guess {
        /// Sample index (1-based)
        sample: u32,
        /// Save each pixelated preview into this directory
        #[arg(long)]
        save_previews: Option<PathBuf>,
    },
    /// Upload a picture, then run one guessing session over it
    Upload {
        /// Path to the image file
        file: PathBuf,
        /// Save each pixelated preview into this directory
        #[arg(long)]
        save_previews: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let server = config::resolve_server(cli.server.as_deref());
    let config =
        Config::new(&server)?.with_stagger(Duration::from_millis(cli.stagger_ms));

    let result = match cli.command {
        // No subcommand → interactive gallery, like the demo page.
        None => cli::interactive::run(config).await,

        Some(Commands::Samples { count }) => cli::samples_cmd::run(config, count).await,
        Some(Commands::Guess {
            sample,
            save_previews,
        }) => cli::guess_cmd::run(config, sample, save_previews).await,
        Some(Commands::Upload {
            file,
            save_previews,
        }) => cli::upload_cmd::run(config, file, save_previews).await,
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
