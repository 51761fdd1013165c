use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operation::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("operation index {index} is out of range, the ledger has {len} entries")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// The ordered collection of operations plus last-save metadata.
///
/// Operations are always sorted ascending by date; entries with the same
/// date keep their insertion order. Exactly one instance is live at a
/// time, owned by the shell; loading replaces it wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    #[serde(rename = "Operations")]
    operations: Vec<Operation>,
    #[serde(rename = "LastSaveDate")]
    last_save_date: String,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            operations: vec![],
            last_save_date: String::new(),
        }
    }

    /// Appends the operation and re-sorts by date. No deduplication, two
    /// operations with identical fields are both retained.
    pub fn insert(&mut self, operation: Operation) {
        self.operations.push(operation);
        self.ensure_sorted();
    }

    /// Removes and returns the entry at `index`, preserving the relative
    /// order of the rest. The ledger is unchanged on failure.
    pub fn delete_at(&mut self, index: usize) -> Result<Operation, OutOfRange> {
        if index >= self.operations.len() {
            return Err(OutOfRange {
                index,
                len: self.operations.len(),
            });
        }
        Ok(self.operations.remove(index))
    }

    /// Read-only view of the operations in sorted order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn last_save_date(&self) -> &str {
        &self.last_save_date
    }

    /// Set only at save time; free-form text in DD/MM/YY shape, not
    /// cross-checked against the system clock.
    pub fn set_last_save_date(&mut self, date: String) {
        self.last_save_date = date;
    }

    /// Re-establishes the sort invariant. Called after deserializing a
    /// file whose entries may be in any order.
    pub(crate) fn ensure_sorted(&mut self) {
        // Vec::sort_by_key is stable, same-dated entries keep their order
        self.operations.sort_by_key(|op| op.date);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
