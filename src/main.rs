use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use drogon_patch::{PatchConfig, Patcher};

/// Fix the Jsoncpp/jsoncpp naming mismatch in the vendored Drogon CMakeLists.txt
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the vendor path is resolved against (defaults to the working directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// TOML file overriding the vendor layout or replacement table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<PatchConfig> {
    let mut config = match &cli.config {
        Some(path) => PatchConfig::load(path).context("Failed to load patch configuration")?,
        None => PatchConfig::default(),
    };

    if let Some(root) = &cli.root {
        config = config.with_root(root);
    }
    if cli.dry_run {
        config = config.with_dry_run(true);
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<bool> {
    drogon_patch::init_with_logger(cli.verbose)?;
    debug!(
        "Starting drogon-patch v{} on {}",
        drogon_patch::version(),
        std::env::consts::OS
    );

    let config = load_config(&cli)?;
    debug!("Target file: {}", config.target_file_path().display());

    match Patcher::new(config).apply_patch_current_os() {
        Ok(outcome) => {
            println!("{}", outcome);
            if outcome.is_applied() {
                println!("Patch applied successfully.");
            }
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Failed to apply patch.");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
