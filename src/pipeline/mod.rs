//! Turns in-scope statement rows into consolidated accounting records.
//!
//! Rows flow through filter, normalization, classification, code resolution and
//! aggregation before being shaped into [`OutputRecord`]s.

mod aggregator;
mod normalizer;
mod report;
mod shaper;

pub use aggregator::{aggregate, AggregateEntry, Aggregator};
pub use normalizer::{normalize, normalize_account, normalize_agency, normalize_amount, normalize_branch, normalize_date, normalize_occurrence, FieldOutcome};
pub use report::PipelineReport;
pub use shaper::shape;

use tracing::{debug, warn};

use crate::models::{ClassifiedTransaction, FieldDefect, OutputRecord, RawTransaction};
use crate::rules::{FilterDecision, RuleSet};

/// Result of one complete run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consolidation {
    pub records: Vec<OutputRecord>,
    pub report: PipelineReport
}

/// Normalizes an in-scope row and attaches its nature and accounting code.
pub fn classify(rules: &RuleSet, transaction: RawTransaction) -> (ClassifiedTransaction, Vec<FieldDefect>) {
    let (transaction, defects) = normalize(transaction);
    let nature = rules.classifier.classify(transaction.history(), &transaction.occurrence, transaction.document());
    let nature_code = rules.nature_codes.resolve(nature);

    (ClassifiedTransaction { transaction, nature, nature_code }, defects)
}

/// State of a single run. Each run owns its own aggregator and report, so concurrent runs
/// over different statements never share anything mutable.
pub struct Pipeline<'a> {
    rules: &'a RuleSet,
    aggregator: Aggregator,
    report: PipelineReport
}

impl<'a> Pipeline<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            aggregator: Aggregator::new(),
            report: PipelineReport::default()
        }
    }

    pub fn push(&mut self, transaction: RawTransaction) {
        self.report.rows_read += 1;

        let decision = self.rules.filter.evaluate(&transaction);

        if decision != FilterDecision::Accepted {
            debug!("Line [{}] skipped: {decision:?}", transaction.line);
            self.report.record_rejection(decision);
            return;
        }

        let (classified, defects) = classify(self.rules, transaction);

        for defect in defects {
            warn!(line = defect.line(), field = %defect.field(), "{defect}");
            self.report.defects.push(defect);
        }

        let line = classified.transaction.line;

        if classified.nature.is_none() {
            warn!("Line [{line}] dropped: history [{}] matches no nature rule", classified.transaction.history());
            self.report.unclassified += 1;
            return;
        }

        let Some(key) = classified.aggregate_key() else {
            warn!("Line [{line}] dropped: grouping key is incomplete");
            self.report.incomplete_key += 1;
            return;
        };

        if self.aggregator.add(key, classified.transaction.amount) {
            self.report.aggregated += 1;
        } else {
            self.report.overflowed += 1;
        }
    }

    pub fn finish(self) -> Consolidation {
        Consolidation {
            records: shape(self.aggregator.finish()),
            report: self.report
        }
    }
}

/// Runs the whole pipeline over an in-memory batch.
pub fn consolidate(rules: &RuleSet, transactions: impl IntoIterator<Item = RawTransaction>) -> Consolidation {
    let mut pipeline = Pipeline::new(rules);

    for transaction in transactions {
        pipeline.push(transaction);
    }

    pipeline.finish()
}
