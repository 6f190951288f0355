use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::FieldDefect;
use crate::rules::FilterDecision;

/// What happened to every row of a single run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PipelineReport {
    pub rows_read: usize,
    pub not_credit: usize,
    pub no_channel_match: usize,
    pub excluded: usize,
    pub unclassified: usize,
    pub incomplete_key: usize,
    /// Rows whose amount could not be added without overflowing their bucket.
    pub overflowed: usize,
    pub aggregated: usize,
    pub defects: Vec<FieldDefect>
}

impl PipelineReport {
    pub fn record_rejection(&mut self, decision: FilterDecision) {
        match decision {
            FilterDecision::Accepted => {},
            FilterDecision::NotCredit => self.not_credit += 1,
            FilterDecision::NoChannelMatch => self.no_channel_match += 1,
            FilterDecision::Excluded => self.excluded += 1
        }
    }

    pub fn dropped(&self) -> usize {
        self.unclassified + self.incomplete_key + self.overflowed
    }
}

impl Display for PipelineReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "read: {}, not credit: {}, no channel: {}, excluded: {}, unclassified: {}, incomplete key: {}, overflowed: {}, aggregated: {}, defects: {}",
            self.rows_read,
            self.not_credit,
            self.no_channel_match,
            self.excluded,
            self.unclassified,
            self.incomplete_key,
            self.overflowed,
            self.aggregated,
            self.defects.len()
        )
    }
}
