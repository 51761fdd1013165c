mod balance;
mod delete;
mod operation;
mod store;
mod validate;

pub use balance::{current_balance, running_balances};
pub use delete::{DeleteOutcome, InvalidSelection, PendingDelete, RowSelection};
pub use operation::{Operation, DATE_FORMAT};
pub use store::{Ledger, OutOfRange};
pub use validate::{parse_operation, ValidationError};
