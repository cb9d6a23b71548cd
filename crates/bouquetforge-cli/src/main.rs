//! `bouquetforge` - assembles bouquets from a design/flower stream.
//!
//! Reads design lines, a blank line and flower lines from `INPUT` (or stdin)
//! and prints one line per bouquet to stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bouquetforge::prelude::*;
use bouquetforge::{console, ConfigError};
use clap::Parser;
use tracing::error;

const DEFAULT_CONFIG: &str = "bouquet.toml";

#[derive(Debug, Parser)]
#[command(name = "bouquetforge", version, about = "Streaming bouquet assembly")]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Configuration file (TOML, or YAML with a .yaml/.yml extension).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for filler selection; implies reproducible mode.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Check every design cache against its pool after each flower.
    #[arg(long)]
    full_assert: bool,
}

fn main() -> ExitCode {
    console::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BouquetForgeError> {
    let config = resolve_config(cli)?;
    let mut assembler = Assembler::new(&config);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match &cli.input {
        Some(path) => run_stream(BufReader::new(File::open(path)?), &mut output, &mut assembler),
        None => run_stream(io::stdin().lock(), &mut output, &mut assembler),
    }
}

fn resolve_config(cli: &Cli) -> Result<AssemblyConfig, BouquetForgeError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_optional_config(Path::new(DEFAULT_CONFIG))?,
    };
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
        if config.environment_mode == EnvironmentMode::NonReproducible {
            config = config.with_environment_mode(EnvironmentMode::Reproducible);
        }
    }
    if cli.full_assert {
        config = config.with_environment_mode(EnvironmentMode::FullAssert);
    }
    Ok(config)
}

/// Loads `path` if it exists; only a missing file falls back to defaults.
fn load_optional_config(path: &Path) -> Result<AssemblyConfig, ConfigError> {
    match AssemblyConfig::load(path) {
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            Ok(AssemblyConfig::default())
        }
        result => result,
    }
}

fn load_config(path: &Path) -> Result<AssemblyConfig, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => AssemblyConfig::from_yaml_file(path),
        _ => AssemblyConfig::from_toml_file(path),
    }
}
