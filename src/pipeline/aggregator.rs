use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::error;

use crate::models::AggregateKey;
use crate::types::round_amount;

/// A consolidated amount and the key it was summed under.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AggregateEntry {
    pub key: AggregateKey,
    pub amount: Decimal
}

/// Sums amounts of entries sharing an [`AggregateKey`].
///
/// Buckets are kept sorted so output order does not depend on input order.
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: BTreeMap<AggregateKey, Decimal>
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `key`. Returns false, leaving the bucket unchanged,
    /// when the sum would overflow.
    pub fn add(&mut self, key: AggregateKey, amount: Decimal) -> bool {
        let amount = round_amount(amount);
        let bucket = self.buckets.entry(key).or_insert(Decimal::ZERO);

        match bucket.checked_add(amount) {
            Some(total) => {
                *bucket = total;
                true
            },
            None => {
                error!("Aggregate overflow adding [{amount}] to bucket holding [{bucket}]");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn finish(self) -> Vec<AggregateEntry> {
        self.buckets
            .into_iter()
            .map(|(key, amount)| AggregateEntry { key, amount: round_amount(amount) })
            .collect()
    }
}

/// Groups entries by key and sums their amounts. Applying it to its own output is a no-op.
pub fn aggregate(entries: impl IntoIterator<Item = AggregateEntry>) -> Vec<AggregateEntry> {
    let mut aggregator = Aggregator::new();

    for entry in entries {
        aggregator.add(entry.key, entry.amount);
    }

    aggregator.finish()
}
