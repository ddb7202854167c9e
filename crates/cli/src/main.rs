//! Calculate average property prices on streets with short and tall trees.

use std::path::PathBuf;
use std::process::ExitCode;

use beamer_cli::{exit_code, load_config, run, EXIT_OK};
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(name = "beamer")]
#[command(about = "Calculate average prices for short and tall trees")]
struct Args {
    /// Path to properties file (default: dublin-property.csv beside the executable)
    #[arg(short, long)]
    properties: Option<PathBuf>,

    /// Path to trees file (default: dublin-trees.json beside the executable)
    #[arg(short, long)]
    trees: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match load_config(args.config.as_deref(), args.properties, args.trees)
        .and_then(|config| run(&config))
    {
        Ok(report) => {
            println!("{report}");
            ExitCode::from(EXIT_OK)
        }
        Err(err) => {
            debug!(category = ?err.category(), "report failed");
            eprintln!("{err}");
            ExitCode::from(exit_code(&err))
        }
    }
}
