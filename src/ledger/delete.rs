use thiserror::Error;

use super::operation::Operation;
use super::store::{Ledger, OutOfRange};

/// What the user picked in the displayed operations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    /// No row picked (dismissed the prompt).
    None,
    /// The header pseudo-row.
    Header,
    /// A data row, as a zero-based index into the sorted operations.
    Data(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("the header row cannot be deleted")]
    HeaderRow,
    #[error("select a valid operation row to delete")]
    NoRow,
}

/// A delete intent waiting for the user's confirmation.
///
/// Captures the target index and a snapshot of the operation so the
/// confirmation prompt can show what is about to be removed. The store
/// is not touched until [`PendingDelete::resolve`] is called with a
/// confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    index: usize,
    snapshot: Operation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Applied {
        removed: Operation,
        /// Row to select afterwards: the entry now occupying the deleted
        /// position, or the new last entry, or `None` if the ledger is
        /// now empty.
        next_selection: Option<usize>,
    },
    Cancelled,
}

impl PendingDelete {
    pub fn begin(ledger: &Ledger, selection: RowSelection) -> Result<Self, InvalidSelection> {
        match selection {
            RowSelection::Header => Err(InvalidSelection::HeaderRow),
            RowSelection::None => Err(InvalidSelection::NoRow),
            RowSelection::Data(index) => {
                let snapshot = ledger
                    .operations()
                    .get(index)
                    .cloned()
                    .ok_or(InvalidSelection::NoRow)?;
                Ok(Self { index, snapshot })
            }
        }
    }

    /// The captured operation, for display in the confirmation prompt.
    pub fn snapshot(&self) -> &Operation {
        &self.snapshot
    }

    /// Applies or cancels the capture. `OutOfRange` can only happen if
    /// the ledger was mutated between capture and resolution, which the
    /// single-threaded shell never does; it is a contract violation, not
    /// a user error.
    pub fn resolve(self, ledger: &mut Ledger, confirmed: bool) -> Result<DeleteOutcome, OutOfRange> {
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        let removed = ledger.delete_at(self.index)?;
        let next_selection = if ledger.is_empty() {
            None
        } else {
            Some(self.index.min(ledger.len() - 1))
        };
        Ok(DeleteOutcome::Applied {
            removed,
            next_selection,
        })
    }
}
