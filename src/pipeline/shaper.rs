use crate::models::{OutputRecord, PAYMENT_MEDIUM, TRANSACTION_TYPE};
use crate::pipeline::AggregateEntry;

impl From<AggregateEntry> for OutputRecord {
    fn from(entry: AggregateEntry) -> Self {
        let AggregateEntry { key, amount } = entry;

        OutputRecord {
            branch: key.branch,
            date: key.date,
            payment_medium: PAYMENT_MEDIUM,
            transaction_type: TRANSACTION_TYPE,
            amount,
            nature_code: key.nature_code,
            bank: key.bank,
            agency: key.agency,
            account: key.account,
            check_number: String::new(),
            nature: key.nature,
            debit_cost_center: String::new(),
            credit_cost_center: String::new(),
            debit_item: String::new(),
            credit_item: String::new(),
            debit_value_class: String::new(),
            credit_value_class: String::new()
        }
    }
}

/// Turns aggregates into output rows, keeping their order.
pub fn shape(entries: Vec<AggregateEntry>) -> Vec<OutputRecord> {
    entries.into_iter().map(OutputRecord::from).collect()
}
