use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;

use rentdesk::cli::ui;
use rentdesk::{AppConfig, InputReader, MenuController, PropertyStore, RecordDraft, RentdeskCli};

fn main() -> Result<()> {
    let cli = RentdeskCli::parse();
    setup_logging(&cli.log_level);

    let config = AppConfig {
        capacity: cli.capacity,
        ..AppConfig::default()
    };

    let mut store = PropertyStore::new(config.capacity);
    // one record on file from the start, so the first listing is not empty
    if let Err(err) = store.insert(RecordDraft {
        owner: "jack".to_string(),
        phone: "020554588".to_string(),
        address: "Sumida".to_string(),
        rent: 72000,
        state: "vacant".to_string(),
    }) {
        ui::print_warning(&format!("starter record skipped: {err}"));
    }

    println!("Rentdesk - rental property record manager");

    let input = InputReader::new(io::stdin().lock());
    let mut controller = MenuController::new(store, input, config.limits);
    controller.run()?;

    println!("You have left the rental property system");
    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("logger initialized with level: {}", log_level);
}
