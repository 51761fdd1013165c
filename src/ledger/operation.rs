use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used everywhere the user sees or types a date.
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// One dated debit-or-credit entry. Exactly one of `debit`/`credit` is
/// nonzero; the other is exactly zero. Immutable once stored, there is
/// no update-in-place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    #[serde(rename = "Date", with = "timestamp_date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Debit", with = "rust_decimal::serde::float")]
    pub debit: Decimal,
    #[serde(rename = "Credit", with = "rust_decimal::serde::float")]
    pub credit: Decimal,
}

impl Operation {
    /// Credit minus debit, i.e. the amount this entry moves the balance by.
    pub fn signed_amount(&self) -> Decimal {
        self.credit - self.debit
    }
}

/// The file format stores dates as full RFC 3339 timestamps. Only the
/// date component is meaningful; we write midnight UTC and ignore the
/// time component on read.
mod timestamp_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let timestamp = DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)?;
        Ok(timestamp.date_naive())
    }
}
