use thiserror::Error;
use tracing::{debug, warn};

use super::data::{Field, Record, RecordForm, RecordId};

/// Reasons a submission can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// At least one form field was empty. The display text is the notice shown to the user.
    #[error("Fill in all fields")]
    IncompleteSubmission { missing: Vec<Field> },
}

/// The RecordStore owns the ordered list of products.
///
/// It is held by the top-level application state, which is the only writer.
/// Views only ever see `&[Record]`.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Bumped every time the list is replaced, including no-op removals
    revision: u64,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record built from `form`.
    ///
    /// Every field must be non-empty. On rejection the list and revision are left untouched.
    pub fn submit(&mut self, form: &RecordForm) -> Result<RecordId, StoreError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Rejected incomplete submission");
            return Err(StoreError::IncompleteSubmission { missing });
        }

        let record = Record::from_form(form);
        let id = record.id();
        debug!(%id, name = record.name(), "Appending record");

        self.records.push(record);
        self.revision += 1;
        Ok(id)
    }

    /// Remove every record whose name equals `name`.
    ///
    /// Duplicate names are all removed in one call. Survivors keep their order.
    /// Returns how many records were dropped.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.name() != name);
        let removed = before - self.records.len();

        self.revision += 1;
        debug!(name, removed, remaining = self.records.len(), "Removed records by name");
        removed
    }

    /// Current list in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Look up a record by its identifier
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }
}
