pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
#[cfg(test)]
mod tests;

// Re-export core components
pub use cli::input::InputReader;
pub use cli::menu::{MenuChoice, MenuController};
pub use cli::RentdeskCli;
pub use config::{AppConfig, FieldLimits, DEFAULT_CAPACITY};
pub use errors::{RentdeskError, RentdeskResult};
pub use models::record::{PropertyRecord, RecordDraft, RecordPatch};
pub use store::PropertyStore;
