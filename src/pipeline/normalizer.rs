use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

use crate::models::{DefectField, FieldDefect, NormalizedTransaction, RawTransaction};
use crate::types::{parse_amount, round_amount, LineNumber};

const AGENCY_LENGTH: usize = 4;
const BRANCH_LENGTH: usize = 4;
const MISSING_OCCURRENCE: &str = "N/A";

//NOTE: Two digit years must be tried before `%Y`, which would otherwise read `24` as the year 24
const DATE_FORMATS: [&str; 5] = ["%d/%m/%y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y"];
const DATE_TIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

/// Result of casting one text cell, always carrying a usable value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome<T> {
    Parsed(T),
    /// The cell was empty; the default was used.
    Absent(T),
    /// The cell could not be cast; the default was used.
    Malformed {
        value: T,
        raw: String
    }
}

impl<T> FieldOutcome<T> {
    pub fn value(&self) -> &T {
        match self {
            FieldOutcome::Parsed(value) | FieldOutcome::Absent(value) => value,
            FieldOutcome::Malformed { value, .. } => value
        }
    }

    pub fn into_value(self) -> T {
        match self {
            FieldOutcome::Parsed(value) | FieldOutcome::Absent(value) => value,
            FieldOutcome::Malformed { value, .. } => value
        }
    }

    pub fn defect(&self, line: LineNumber, field: DefectField) -> Option<FieldDefect> {
        match self {
            FieldOutcome::Parsed(_) => None,
            FieldOutcome::Absent(_) => Some(FieldDefect::missing(line, field)),
            FieldOutcome::Malformed { raw, .. } => Some(FieldDefect::malformed(line, field, raw))
        }
    }
}

/// Cleans and casts every field of an in-scope row.
///
/// Never fails: unusable dates, accounts and amounts degrade to their defaults and are
/// returned as defects alongside the row.
pub fn normalize(transaction: RawTransaction) -> (NormalizedTransaction, Vec<FieldDefect>) {
    let line = transaction.line;
    let date = normalize_date(transaction.date.as_deref());
    let account = normalize_account(transaction.account.as_deref());
    let amount = normalize_amount(transaction.amount.as_deref());

    let defects = [
        date.defect(line, DefectField::Date),
        account.defect(line, DefectField::Account),
        amount.defect(line, DefectField::Amount)
    ]
    .into_iter()
    .flatten()
    .collect();

    let normalized = NormalizedTransaction {
        line,
        branch: normalize_branch(transaction.branch.as_deref()),
        date: date.into_value(),
        occurrence: normalize_occurrence(transaction.occurrence.as_deref()),
        agency: normalize_agency(transaction.agency.as_deref()),
        account: account.into_value(),
        amount: amount.into_value(),
        history: transaction.history,
        document: transaction.document,
        bank: transaction.bank
    };

    (normalized, defects)
}

/// Keeps the last four characters.
pub fn normalize_agency(agency: Option<&str>) -> Option<String> {
    present(agency).map(|agency| {
        let length = agency.chars().count();
        agency.chars().skip(length.saturating_sub(AGENCY_LENGTH)).collect()
    })
}

/// Keeps the first four characters.
pub fn normalize_branch(branch: Option<&str>) -> Option<String> {
    present(branch).map(|branch| branch.chars().take(BRANCH_LENGTH).collect())
}

pub fn normalize_occurrence(occurrence: Option<&str>) -> String {
    present(occurrence).unwrap_or(MISSING_OCCURRENCE).to_string()
}

/// Accounts are nullable integers; leading zeros are not preserved.
pub fn normalize_account(account: Option<&str>) -> FieldOutcome<Option<i64>> {
    let Some(raw) = present(account) else {
        return FieldOutcome::Absent(None);
    };

    match parse_account(raw) {
        Some(number) => FieldOutcome::Parsed(Some(number)),
        None => FieldOutcome::Malformed { value: None, raw: raw.to_string() }
    }
}

pub fn normalize_date(date: Option<&str>) -> FieldOutcome<Option<NaiveDate>> {
    let Some(raw) = present(date) else {
        return FieldOutcome::Absent(None);
    };

    match parse_date(raw) {
        Some(date) => FieldOutcome::Parsed(Some(date)),
        None => FieldOutcome::Malformed { value: None, raw: raw.to_string() }
    }
}

pub fn normalize_amount(amount: Option<&str>) -> FieldOutcome<Decimal> {
    let Some(raw) = present(amount) else {
        return FieldOutcome::Absent(round_amount(Decimal::ZERO));
    };

    match parse_amount(raw) {
        Some(amount) => FieldOutcome::Parsed(round_amount(amount)),
        None => FieldOutcome::Malformed { value: round_amount(Decimal::ZERO), raw: raw.to_string() }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_account(value: &str) -> Option<i64> {
    if let Ok(number) = value.parse::<i64>() {
        return Some(number);
    }

    let number = Decimal::from_str(value).ok()?;

    if number.fract().is_zero() {
        number.to_i64()
    } else {
        None
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
}
