//! Innkeep CLI - Interactive hotel reservation manager
//!
//! Wires the flat-file store and the stub payment gateway into the hotel
//! service, then hands control to the menu loop.

mod adapters;
mod application;
mod config;
mod shell;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use adapters::{JsonReservationRepository, StubPaymentGateway};
use application::HotelService;
use config::Config;

const DATA_DIR: &str = "innkeep";
const DATA_FILE: &str = "reservations.json";

#[derive(Parser)]
#[command(name = "innkeep")]
#[command(about = "Innkeep - hotel reservation manager", long_about = None)]
#[command(version)]
struct Cli {
    /// Reservation snapshot file (defaults to the platform data dir)
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let data_file = match cli.data_file.or(config.data_file) {
        Some(path) => path,
        None => default_data_file()?,
    };
    tracing::debug!("Using reservation snapshot at {:?}", data_file);

    let repository = JsonReservationRepository::new(data_file.clone());
    let mut hotel = HotelService::new(repository, StubPaymentGateway);

    hotel.load().with_context(|| {
        format!(
            "Could not load reservations from {:?}; fix or remove the file to start fresh",
            data_file
        )
    })?;

    shell::run(&mut hotel)
}

fn default_data_file() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join(DATA_DIR);

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {:?}", dir))?;

    Ok(dir.join(DATA_FILE))
}
