use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::operation::{Operation, DATE_FORMAT};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the description cannot be empty")]
    EmptyDescription,
    #[error("invalid date format, use DD/MM/YY")]
    InvalidDate,
    #[error("the debit value is invalid or negative")]
    InvalidDebit,
    #[error("the credit value is invalid or negative")]
    InvalidCredit,
    #[error("enter a debit OR a credit, not both")]
    BothDebitAndCredit,
    #[error("enter a debit or a credit")]
    NeitherDebitNorCredit,
}

/// Turns raw form text into a validated [`Operation`].
///
/// The rules run in a fixed order and the first failure wins, so the
/// reported error matches what the user sees while filling the form:
/// description, then date, then each amount, then mutual exclusivity.
pub fn parse_operation(
    date_text: &str,
    description_text: &str,
    debit_text: &str,
    credit_text: &str,
) -> Result<Operation, ValidationError> {
    let description = description_text.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let date = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)?;

    let debit_text = debit_text.trim();
    let credit_text = credit_text.trim();

    let debit = if debit_text.is_empty() {
        Decimal::ZERO
    } else {
        parse_amount(debit_text).ok_or(ValidationError::InvalidDebit)?
    };
    let credit = if credit_text.is_empty() {
        Decimal::ZERO
    } else {
        parse_amount(credit_text).ok_or(ValidationError::InvalidCredit)?
    };

    if !debit_text.is_empty() && !credit_text.is_empty() {
        return Err(ValidationError::BothDebitAndCredit);
    }
    if debit_text.is_empty() && credit_text.is_empty() {
        return Err(ValidationError::NeitherDebitNorCredit);
    }

    Ok(Operation {
        date,
        description: description.to_string(),
        debit,
        credit,
    })
}

fn parse_amount(text: &str) -> Option<Decimal> {
    let amount = Decimal::from_str_exact(text).ok()?;
    (amount >= Decimal::ZERO).then_some(amount)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn valid_credit_operation() {
        let operation = parse_operation("15/03/24", "Rent", "", "1200.50").unwrap();
        assert_eq!(operation.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(operation.description, "Rent");
        assert_eq!(operation.debit, Decimal::ZERO);
        assert_eq!(operation.credit, Decimal::new(120050, 2));
    }

    #[test]
    fn valid_debit_operation_fills_credit_with_zero() {
        let operation = parse_operation("01/01/24", "Groceries", "42.99", "").unwrap();
        assert_eq!(operation.debit, Decimal::new(4299, 2));
        assert_eq!(operation.credit, Decimal::ZERO);
    }

    #[test]
    fn description_is_trimmed() {
        let operation = parse_operation("01/01/24", "  Rent  ", "", "10").unwrap();
        assert_eq!(operation.description, "Rent");
    }

    #[rstest]
    #[case("", ValidationError::EmptyDescription)]
    #[case("   ", ValidationError::EmptyDescription)]
    fn empty_description(#[case] description: &str, #[case] expected: ValidationError) {
        assert_eq!(
            parse_operation("15/03/24", description, "", "10"),
            Err(expected)
        );
    }

    #[rstest]
    #[case("2024-03-15")]
    #[case("15/03/2024")]
    #[case("32/01/24")]
    #[case("15/13/24")]
    #[case("")]
    #[case("yesterday")]
    fn invalid_date(#[case] date: &str) {
        assert_eq!(
            parse_operation(date, "Rent", "", "10"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[rstest]
    #[case("abc", "", ValidationError::InvalidDebit)]
    #[case("-5", "", ValidationError::InvalidDebit)]
    #[case("1.2.3", "", ValidationError::InvalidDebit)]
    #[case("", "abc", ValidationError::InvalidCredit)]
    #[case("", "-0.01", ValidationError::InvalidCredit)]
    fn invalid_amounts(
        #[case] debit: &str,
        #[case] credit: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(
            parse_operation("15/03/24", "Rent", debit, credit),
            Err(expected)
        );
    }

    #[test]
    fn both_debit_and_credit() {
        assert_eq!(
            parse_operation("15/03/24", "Rent", "10", "5"),
            Err(ValidationError::BothDebitAndCredit)
        );
    }

    #[test]
    fn neither_debit_nor_credit() {
        assert_eq!(
            parse_operation("15/03/24", "Rent", "", ""),
            Err(ValidationError::NeitherDebitNorCredit)
        );
        assert_eq!(
            parse_operation("15/03/24", "Rent", "  ", "  "),
            Err(ValidationError::NeitherDebitNorCredit)
        );
    }

    #[test]
    fn rule_order_description_before_date() {
        assert_eq!(
            parse_operation("not-a-date", "   ", "10", "5"),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn rule_order_date_before_amounts() {
        assert_eq!(
            parse_operation("not-a-date", "Rent", "abc", "def"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn rule_order_bad_amount_before_mutual_exclusivity() {
        // both fields filled, but the debit is unparseable
        assert_eq!(
            parse_operation("15/03/24", "Rent", "abc", "5"),
            Err(ValidationError::InvalidDebit)
        );
    }

    #[test]
    fn zero_amount_on_one_side_is_accepted() {
        // "0" is a present, valid value; exclusivity is about filled fields
        let operation = parse_operation("15/03/24", "Rent", "0", "").unwrap();
        assert_eq!(operation.debit, Decimal::ZERO);
        assert_eq!(operation.credit, Decimal::ZERO);
    }
}
