pub mod record;

// Re-export common model types
pub use record::{PropertyRecord, RecordDraft, RecordPatch};
