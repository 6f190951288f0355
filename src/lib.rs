//! Consolidates bank statement exports into accounting-ready receipt records.
//!
//! Credit rows from known card and payment-processor channels are classified into a
//! [`types::Nature`], grouped by branch, date, nature and account, and summed.

pub mod engine;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod types;
