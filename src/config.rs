/// Default number of record slots when the binary is started without
/// an explicit `--capacity`
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for a rentdesk session
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum number of live records, fixed for the whole session
    pub capacity: usize,
    pub limits: FieldLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            limits: FieldLimits::default(),
        }
    }
}

/// Per-field input length caps, measured in characters
#[derive(Debug, Clone)]
pub struct FieldLimits {
    pub owner: usize,
    pub phone: usize,
    pub address: usize,
    pub state: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            owner: 8,
            phone: 12,
            address: 16,
            state: 3,
        }
    }
}
