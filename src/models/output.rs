use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Nature, NatureCode};

/// Marks every consolidated row as a receipt.
pub const TRANSACTION_TYPE: &str = "R";
/// Marks every consolidated row as settled by card.
pub const PAYMENT_MEDIUM: &str = "CD";

pub const OUTPUT_COLUMNS: [&str; 17] = [
    "Filial",
    "Data",
    "NUMERARIO",
    "TIPO",
    "Valor",
    "Natureza",
    "Banco",
    "Agencia",
    "Conta",
    "NUM CHEQUE",
    "Historico",
    "C. Custo debito",
    "C. Custo credito",
    "Item debito",
    "Item credito",
    "Cl Valor deb",
    "Cl Valor crd"
];

/// One row of the consolidated table handed to the accounting import.
///
/// Field order is the column order of [`OUTPUT_COLUMNS`]. The blank columns are left for
/// manual entry downstream.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "Filial")]
    pub branch: String,
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    #[serde(rename = "NUMERARIO")]
    pub payment_medium: &'static str,
    #[serde(rename = "TIPO")]
    pub transaction_type: &'static str,
    #[serde(rename = "Valor")]
    pub amount: Decimal,
    /// The accounting code lands in `Natureza`.
    #[serde(rename = "Natureza")]
    pub nature_code: NatureCode,
    #[serde(rename = "Banco")]
    pub bank: String,
    #[serde(rename = "Agencia")]
    pub agency: String,
    #[serde(rename = "Conta")]
    pub account: i64,
    #[serde(rename = "NUM CHEQUE")]
    pub check_number: String,
    /// The nature label lands in `Historico`.
    #[serde(rename = "Historico")]
    pub nature: Nature,
    #[serde(rename = "C. Custo debito")]
    pub debit_cost_center: String,
    #[serde(rename = "C. Custo credito")]
    pub credit_cost_center: String,
    #[serde(rename = "Item debito")]
    pub debit_item: String,
    #[serde(rename = "Item credito")]
    pub credit_item: String,
    #[serde(rename = "Cl Valor deb")]
    pub debit_value_class: String,
    #[serde(rename = "Cl Valor crd")]
    pub credit_value_class: String
}
