use clap::Parser;

pub mod input;
pub mod menu;
pub mod ui;

use crate::config::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(
    name = "rentdesk",
    about = "A console manager for rental property records",
    version,
    author,
    long_about = None
)]
pub struct RentdeskCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Maximum number of records the session can hold
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,
}
