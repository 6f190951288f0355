//! Fixed rule tables that decide which statement rows matter and how they are booked.
//!
//! A [`RuleSet`] is built once at startup and shared read-only between runs.

mod classifier;
mod filter;
mod nature_codes;
#[cfg(test)]
mod tests;

pub use classifier::{ClassificationRule, Classifier, RuleField};
pub use filter::{ChannelFilter, FilterDecision};
pub use nature_codes::NatureCodeTable;

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub filter: ChannelFilter,
    pub classifier: Classifier,
    pub nature_codes: NatureCodeTable
}
