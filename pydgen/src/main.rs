//! # pydgen
//!
//! Command-line generator of pydantic models from GraphQL schemas.
//!
//! ```bash
//! # Print models for a schema
//! pydgen schema.graphql
//!
//! # Map custom scalars and write to a file
//! pydgen schema.graphql --scalar DateTime=datetime --scalar JSON=any -o models.py
//!
//! # Fail if models.py is out of date
//! pydgen schema.graphql -o models.py --check
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use pydgen::codegen::parse_override;
use pydgen::{EnumStyle, FileConfig, Generator, parse_document};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pydgen")]
#[command(
    author,
    version,
    about = "Generate pydantic models from a GraphQL schema",
    long_about = None
)]
struct Cli {
    /// GraphQL schema file
    schema: PathBuf,

    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Map a GraphQL scalar to a Python type, e.g. DateTime=datetime or JSON=any
    #[arg(short, long = "scalar", value_name = "NAME=TARGET")]
    scalars: Vec<String>,

    /// Enum declaration style: str-enum or str-mixin
    #[arg(long, value_name = "STYLE")]
    enum_style: Option<String>,

    /// Configuration file (defaults to pydgen.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compare with the output file instead of writing it
    #[arg(long, requires = "output")]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when `--check` finds stale output.
fn run(cli: &Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = FileConfig::discover(cli.config.as_deref(), &cwd)
        .context("failed to load configuration")?
        .into_codegen_config()?;

    for entry in &cli.scalars {
        let (name, target) = parse_override(entry)?;
        config = config.scalar(name, target);
    }
    if let Some(style) = &cli.enum_style {
        config = config.enum_style(style.parse::<EnumStyle>()?);
    }
    debug!(?config, "resolved configuration");

    let sdl = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("failed to read {}", cli.schema.display()))?;
    let document = parse_document(&sdl)
        .with_context(|| format!("failed to parse {}", cli.schema.display()))?;

    let python = Generator::new(config).generate(&document);

    let Some(output) = &cli.output else {
        print!("{python}");
        return Ok(true);
    };

    if cli.check {
        let existing = std::fs::read_to_string(output)
            .with_context(|| format!("failed to read {}", output.display()))?;
        if existing != python {
            eprintln!("{} is out of date", output.display());
            return Ok(false);
        }
        info!(path = %output.display(), "output is up to date");
        return Ok(true);
    }

    if output.is_dir() {
        bail!("{} is a directory", output.display());
    }
    std::fs::write(output, &python)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), bytes = python.len(), "wrote models");
    Ok(true)
}
