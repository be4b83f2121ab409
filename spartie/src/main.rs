//! Spartie CLI - scans a Spartie source file and prints its tokens.
//!
//! This is the main entry point for the spartie CLI application. It parses
//! arguments with clap, loads configuration, reads and decodes the source
//! file, runs the scanner, and maps failures to process exit codes.

mod config;
mod error;
mod render;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use spartiec_util::Handler;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{Result, SpartieError};
use render::{Encoding, OutputFormat};

/// Spartie - print the tokens of a Spartie source file
#[derive(Parser, Debug)]
#[command(name = "spartie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of a Spartie source file", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "SPARTIE_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "SPARTIE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "SPARTIE_NO_COLOR")]
    no_color: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Source encoding (default: from config, else utf-8)
    #[arg(long, value_enum)]
    encoding: Option<Encoding>,
}

/// Settings after merging the command line over the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    verbose: bool,
    color: bool,
    format: OutputFormat,
    encoding: Encoding,
}

impl Settings {
    fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            verbose: cli.verbose || config.verbose,
            color: !cli.no_color && config.color,
            format: cli.format.unwrap_or(config.output.format),
            encoding: cli.encoding.unwrap_or(config.output.encoding),
        }
    }
}

/// Main entry point for the spartie CLI.
fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        },
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::try_parse()?;
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, &config);

    init_logging(settings.verbose, !settings.color)?;
    debug!(?settings, "starting");

    run(&cli.file, &settings)
}

/// Prints an error to stderr the way its kind expects.
fn report(err: &SpartieError) {
    match err {
        // clap formats its own output and picks stdout for help and version.
        SpartieError::Usage(clap_err) => {
            let _ = clap_err.print();
        },
        SpartieError::Lex { .. } => eprintln!("{}", err),
        _ => eprintln!("error: {}", err),
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SpartieError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Reads, decodes and scans `path`, then prints its tokens to stdout.
fn run(path: &Path, settings: &Settings) -> Result<()> {
    let source = read_source(path, settings.encoding)?;

    let tokens = spartiec_lex::scan(&source).map_err(|error| {
        let handler = Handler::new();
        handler.emit_diagnostic(error.to_diagnostic(&source));
        SpartieError::Lex {
            rendered: handler.render_all(Some(&path.display().to_string())),
            error,
        }
    })?;
    debug!(count = tokens.len(), "scanned");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::write_tokens(&mut out, &tokens, settings.format)
}

fn read_source(path: &Path, encoding: Encoding) -> Result<String> {
    if !path.exists() {
        return Err(SpartieError::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| SpartieError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    render::decode(bytes, encoding, path)
}
