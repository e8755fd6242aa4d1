use log::debug;

use crate::errors::{RentdeskError, RentdeskResult};
use crate::models::record::{PropertyRecord, RecordDraft, RecordPatch};

/// Fixed-capacity, insertion-ordered store for property records
///
/// Identifiers are assigned here and only here, by a counter that
/// never moves backwards, so an id is never reused even after its
/// record has been deleted.
#[derive(Debug)]
pub struct PropertyStore {
    records: Vec<PropertyRecord>,
    capacity: usize,
    last_id: u32,
}

impl PropertyStore {
    /// Create an empty store holding at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            last_id: 0,
        }
    }

    /// Sequential search by id over the live records
    pub fn find(&self, id: u32) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Insert a new record, assigning it the next identifier
    ///
    /// Fails with `CapacityExceeded` when the store is full; the id
    /// counter is not advanced in that case.
    pub fn insert(&mut self, draft: RecordDraft) -> RentdeskResult<u32> {
        if self.records.len() == self.capacity {
            return Err(RentdeskError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.last_id += 1;
        self.records.push(PropertyRecord {
            id: self.last_id,
            owner: draft.owner,
            phone: draft.phone,
            address: draft.address,
            rent: draft.rent,
            state: draft.state,
        });
        debug!("inserted record {} ({} live)", self.last_id, self.records.len());
        Ok(self.last_id)
    }

    /// Remove the record with the given id, closing the gap
    ///
    /// Later records shift one slot toward the front, so insertion
    /// order is preserved. The store is untouched when the id is
    /// absent.
    pub fn delete(&mut self, id: u32) -> RentdeskResult<PropertyRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RentdeskError::RecordNotFound(id))?;
        let removed = self.records.remove(index);
        debug!("deleted record {} ({} live)", id, self.records.len());
        Ok(removed)
    }

    /// Apply a field-wise patch to the record with the given id
    ///
    /// `None` fields keep their current value; fields are
    /// independently updatable in one call.
    pub fn update(&mut self, id: u32, patch: RecordPatch) -> RentdeskResult<&PropertyRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RentdeskError::RecordNotFound(id))?;
        if let Some(owner) = patch.owner {
            record.owner = owner;
        }
        if let Some(phone) = patch.phone {
            record.phone = phone;
        }
        if let Some(address) = patch.address {
            record.address = address;
        }
        if let Some(rent) = patch.rent {
            record.rent = rent;
        }
        if let Some(state) = patch.state {
            record.state = state;
        }
        debug!("updated record {}", id);
        Ok(&*record)
    }

    /// Live records in insertion order, oldest surviving first
    pub fn list(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when no further insert can succeed
    pub fn is_full(&self) -> bool {
        self.records.len() == self.capacity
    }

    /// Maximum number of live records, fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
