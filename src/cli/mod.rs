use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Sensible Token Output Decoder
#[derive(Parser)]
#[command(name = "sensible-decoder")]
#[command(about = "Decode Sensible FT, Unique and NFT token outputs from BSV locking scripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single hex-encoded locking script
    Decode(commands::decode::DecodeCommand),
    /// Decode every Sensible output in a UTXO dump CSV
    Scan(commands::scan::ScanCommand),
    /// Build a synthetic Sensible locking script
    Encode(commands::encode::EncodeCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Scan(command) => command.run(),
        Commands::Encode(command) => command.run(),
    }
}
