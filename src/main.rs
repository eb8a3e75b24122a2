use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use payslip_engine::api::{AppState, create_router};
use payslip_engine::batch::BatchRunner;
use payslip_engine::config::ConfigLoader;
use payslip_engine::error::EngineError;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly payslip generator.
///
/// Reads an employee roster, calculates each employee's monthly gross
/// income, income tax, net income and superannuation, and writes the
/// payslips out as CSV or serves them over HTTP.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Tax bracket table to use instead of the built-in one.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a payslip CSV from an employee CSV.
    Generate {
        /// Employee CSV to read. Prompted for when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Payslip CSV to write. Prompted for when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve the payslip HTTP API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info`.
/// * Writes to stderr so stdout only carries the user-facing messages.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            debug!("loading tax table from {}", path.display());
            ConfigLoader::load(path)?
        }
        None => ConfigLoader::builtin()?,
    };
    info!(table = %config.tax_table().name(), "Tax table loaded");

    match cli.command {
        Command::Generate { input, output } => generate(&config, input, output),
        Command::Serve { addr } => serve(config, addr).await,
    }
}

fn generate(
    config: &ConfigLoader,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = match input {
        Some(path) => path,
        None => prompt_path("Provide input file path including file name")?,
    };
    let output = match output {
        Some(path) => path,
        None => prompt_path("Provide output file path including file name")?,
    };

    match BatchRunner::new(config).run_files(&input, &output) {
        Ok(_) => {
            println!(
                "Output csv file is saved successfully at {}",
                output.display()
            );
            Ok(())
        }
        Err(EngineError::InvalidPath { message, .. }) => {
            println!("Please provide a valid file path ({message})");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn serve(config: ConfigLoader, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Payslip API listening");
    axum::serve(listener, router).await?;
    Ok(())
}

/// Asks for a path on stdin until a non-empty line is entered.
fn prompt_path(message: &str) -> anyhow::Result<PathBuf> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{message}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no file path provided");
        }
        let line = line.trim();
        if line.is_empty() {
            println!("Please enter a valid path");
            continue;
        }
        return Ok(PathBuf::from(line));
    }
}
