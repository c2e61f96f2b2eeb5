mod app;
mod cli;
mod error;
mod metadata;
mod models;
mod navigator;
mod operations;
mod selection;
mod settings;
mod ui;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use settings::AppSettings;

fn main() {
    let cli = Cli::parse();
    let settings = AppSettings::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli.execute(settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
