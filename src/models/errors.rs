use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::types::LineNumber;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DefectField {
    Date,
    Account,
    Amount
}

impl DefectField {
    /// The value a defective field degrades to.
    pub fn default_value(&self) -> &'static str {
        match self {
            DefectField::Date | DefectField::Account => "null",
            DefectField::Amount => "0.00"
        }
    }
}

impl Display for DefectField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            DefectField::Date => "date",
            DefectField::Account => "account",
            DefectField::Amount => "amount"
        };

        formatter.write_str(name)
    }
}

/// A row-level defect that was recovered by substituting a default value.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FieldDefect {
    #[error("Line [{line}]: {field} is missing, defaulted to [{default}]")]
    Missing {
        line: LineNumber,
        field: DefectField,
        default: &'static str
    },
    #[error("Line [{line}]: {field} [{raw}] could not be parsed, defaulted to [{default}]")]
    Malformed {
        line: LineNumber,
        field: DefectField,
        raw: String,
        default: &'static str
    }
}

impl FieldDefect {
    pub fn missing(line: LineNumber, field: DefectField) -> Self {
        Self::Missing { line, field, default: field.default_value() }
    }

    pub fn malformed(line: LineNumber, field: DefectField, raw: &str) -> Self {
        Self::Malformed {
            line,
            field,
            raw: raw.to_string(),
            default: field.default_value()
        }
    }

    pub fn line(&self) -> LineNumber {
        match self {
            Self::Missing { line, .. } | Self::Malformed { line, .. } => *line
        }
    }

    pub fn field(&self) -> DefectField {
        match self {
            Self::Missing { field, .. } | Self::Malformed { field, .. } => *field
        }
    }
}
