mod errors;
mod output;
mod transaction;

pub use errors::{DefectField, FieldDefect};
pub use output::{OutputRecord, OUTPUT_COLUMNS, PAYMENT_MEDIUM, TRANSACTION_TYPE};
pub use transaction::{AggregateKey, ClassifiedTransaction, NormalizedTransaction, RawTransaction};
