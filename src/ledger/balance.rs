use rust_decimal::Decimal;

use super::operation::Operation;

/// One running total per operation, accumulating credit minus debit from
/// zero. Re-derived in full on every render; operation counts are small
/// enough that caching would not pay for itself.
pub fn running_balances(operations: &[Operation]) -> Vec<Decimal> {
    let mut balance = Decimal::ZERO;
    operations
        .iter()
        .map(|operation| {
            balance += operation.signed_amount();
            balance
        })
        .collect()
}

/// The balance after the last operation, or zero for an empty ledger.
pub fn current_balance(operations: &[Operation]) -> Decimal {
    running_balances(operations)
        .last()
        .copied()
        .unwrap_or(Decimal::ZERO)
}
