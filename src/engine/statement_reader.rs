use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, error};

use crate::models::RawTransaction;
use crate::types::{LineNumber, StatementError};

const COLUMN_COUNT: usize = 10;

/// Columns of the bank statement export, by header label.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Column {
    Branch,
    Date,
    DebitCreditFlag,
    History,
    Document,
    Occurrence,
    Bank,
    Agency,
    Account,
    Amount
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Branch,
        Column::Date,
        Column::DebitCreditFlag,
        Column::History,
        Column::Document,
        Column::Occurrence,
        Column::Bank,
        Column::Agency,
        Column::Account,
        Column::Amount
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Branch => "Filial",
            Column::Date => "Data",
            Column::DebitCreditFlag => "Deb/Credit",
            Column::History => "Historico",
            Column::Document => "Documento",
            Column::Occurrence => "Ocorrencia",
            Column::Bank => "Banco",
            Column::Agency => "Agencia",
            Column::Account => "Conta",
            Column::Amount => "Valor"
        }
    }

    pub fn is_required(&self) -> bool {
        *self != Column::Occurrence
    }

    fn labels() -> Vec<&'static str> {
        Column::ALL.iter().map(Column::label).collect()
    }
}

/// Position of each known column inside the header row.
#[derive(Debug, Clone)]
struct ColumnIndex {
    positions: [Option<usize>; COLUMN_COUNT]
}

impl ColumnIndex {
    fn from_header(record: &StringRecord) -> Self {
        let mut positions = [None; COLUMN_COUNT];

        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            *slot = record.iter().position(|cell| cell == column.label());
        }

        Self { positions }
    }

    /// A row counts as the header only when it names more than half of the required columns,
    /// so a title row that happens to contain one label is skipped.
    fn looks_like_header(&self) -> bool {
        let (named, required) = Column::ALL
            .iter()
            .zip(self.positions)
            .filter(|(column, _)| column.is_required())
            .fold((0, 0), |(named, required), (_, position)| (named + usize::from(position.is_some()), required + 1));

        named * 2 > required
    }

    fn missing_required(&self) -> Vec<&'static str> {
        Column::ALL
            .iter()
            .zip(self.positions)
            .filter(|(column, position)| column.is_required() && position.is_none())
            .map(|(column, _)| column.label())
            .collect()
    }

    fn cell(&self, record: &StringRecord, column: Column) -> Option<String> {
        self.positions[column as usize]
            .and_then(|position| record.get(position))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
    }

    fn transaction(&self, record: &StringRecord, line: LineNumber) -> RawTransaction {
        RawTransaction {
            line,
            branch: self.cell(record, Column::Branch),
            date: self.cell(record, Column::Date),
            debit_credit_flag: self.cell(record, Column::DebitCreditFlag),
            history: self.cell(record, Column::History),
            document: self.cell(record, Column::Document),
            occurrence: self.cell(record, Column::Occurrence),
            bank: self.cell(record, Column::Bank),
            agency: self.cell(record, Column::Agency),
            account: self.cell(record, Column::Account),
            amount: self.cell(record, Column::Amount)
        }
    }
}

/// Reads statement rows from a CSV export.
///
/// Exports usually start with title rows, so the header is the first row naming most of the
/// required columns. Once located, the header must name every one of them. Cells are trimmed and
/// blank rows are skipped.
pub struct StatementReader<R: Read> {
    reader: Reader<R>,
    columns: ColumnIndex
}

impl StatementReader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StatementError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> StatementReader<R> {
    pub fn from_reader(source: R) -> Result<Self, StatementError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut record = StringRecord::new();

        while read_next(&mut reader, &mut record)? {
            let columns = ColumnIndex::from_header(&record);

            if !columns.looks_like_header() {
                continue;
            }

            let line = record_line(&record);
            let missing = columns.missing_required();

            if !missing.is_empty() {
                return Err(StatementError::MissingColumns { line, columns: missing });
            }

            debug!("Statement header located on line [{line}]");

            return Ok(Self { reader, columns });
        }

        Err(StatementError::HeaderNotFound { expected: Column::labels() })
    }
}

impl<R: Read> Iterator for StatementReader<R> {
    type Item = Result<RawTransaction, StatementError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match read_next(&mut self.reader, &mut record) {
            Ok(true) => Some(Ok(self.columns.transaction(&record, record_line(&record)))),
            Ok(false) => None,
            Err(error) => Some(Err(error))
        }
    }
}

/// Advances to the next non-blank record. Records that cannot be decoded are logged and
/// skipped; I/O failures are returned.
fn read_next<R: Read>(reader: &mut Reader<R>, record: &mut StringRecord) -> Result<bool, StatementError> {
    loop {
        match reader.read_record(record) {
            Ok(false) => return Ok(false),
            Ok(true) if record.iter().all(str::is_empty) => continue,
            Ok(true) => return Ok(true),
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => error!("CSV decoding error, skipping record: {error}")
        }
    }
}

fn record_line(record: &StringRecord) -> LineNumber {
    record.position().map(|position| position.line()).unwrap_or_default()
}
