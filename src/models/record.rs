use std::fmt;

/// A rental property on the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Store-assigned identifier, unique among live records
    pub id: u32,
    pub owner: String,
    pub phone: String,
    pub address: String,
    /// Monthly rent; no upper bound is enforced
    pub rent: i64,
    /// Occupancy state, conventionally "occ" or "vac"
    pub state: String,
}

/// Field values for a record that has not been inserted yet; the
/// store assigns the identifier on insert
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub owner: String,
    pub phone: String,
    pub address: String,
    pub rent: i64,
    pub state: String,
}

/// A field-wise update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub owner: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rent: Option<i64>,
    pub state: Option<String>,
}

impl RecordPatch {
    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.rent.is_none()
            && self.state.is_none()
    }
}

// Two-digit zero-padded id, then tab-separated fields. Listing and
// search output both rely on this exact shape.
impl fmt::Display for PropertyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}\t{}\t{}\t{}\t{}\t{}",
            self.id, self.owner, self.phone, self.address, self.rent, self.state
        )
    }
}
