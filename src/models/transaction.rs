use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{LineNumber, Nature, NatureCode};

/// A single statement row exactly as exported, every cell still text.
///
/// Empty cells and cells absent from a short row are `None`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RawTransaction {
    /// Source line, used when reporting row defects.
    pub line: LineNumber,
    pub branch: Option<String>,
    pub date: Option<String>,
    /// `Credito` for money coming in.
    pub debit_credit_flag: Option<String>,
    /// Free-text description written by the bank.
    pub history: Option<String>,
    /// Free-text reference, often the payer's tax id.
    pub document: Option<String>,
    pub occurrence: Option<String>,
    pub bank: Option<String>,
    pub agency: Option<String>,
    pub account: Option<String>,
    pub amount: Option<String>
}

/// A credit row after every field has been cleaned and cast.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTransaction {
    pub line: LineNumber,
    /// First four characters of the exported branch.
    pub branch: Option<String>,
    pub date: Option<NaiveDate>,
    pub history: Option<String>,
    pub document: Option<String>,
    /// `N/A` when the export left it empty.
    pub occurrence: String,
    pub bank: Option<String>,
    /// Last four characters of the exported agency.
    pub agency: Option<String>,
    pub account: Option<i64>,
    /// Rounded to cents; zero when the export value was unusable.
    pub amount: Decimal
}

impl NormalizedTransaction {
    pub fn history(&self) -> &str {
        self.history.as_deref().unwrap_or("")
    }

    pub fn document(&self) -> &str {
        self.document.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedTransaction {
    pub transaction: NormalizedTransaction,
    pub nature: Option<Nature>,
    pub nature_code: Option<NatureCode>
}

impl ClassifiedTransaction {
    /// Returns the grouping key, or `None` when any component is missing.
    pub fn aggregate_key(&self) -> Option<AggregateKey> {
        Some(AggregateKey {
            branch: self.transaction.branch.clone()?,
            date: self.transaction.date?,
            nature: self.nature?,
            nature_code: self.nature_code.clone()?,
            bank: self.transaction.bank.clone()?,
            agency: self.transaction.agency.clone()?,
            account: self.transaction.account?
        })
    }
}

/// Identity of one consolidated output row. Field order is the output sort order.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AggregateKey {
    pub branch: String,
    pub date: NaiveDate,
    pub nature: Nature,
    pub nature_code: NatureCode,
    pub bank: String,
    pub agency: String,
    pub account: i64
}
