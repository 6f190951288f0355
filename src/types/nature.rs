use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Payment channel a credit transaction is attributed to.
///
/// Variants are declared in label order so sorting by `Nature` sorts by label.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Nature {
    Banrisul,
    Bin,
    Cielo,
    Credz,
    Getnet,
    Global,
    Pagseguro,
    Rede,
    Sfpay,
    SispagPagseg,
    TedPagseg
}

impl Nature {
    pub const ALL: [Nature; 11] = [
        Nature::Banrisul,
        Nature::Bin,
        Nature::Cielo,
        Nature::Credz,
        Nature::Getnet,
        Nature::Global,
        Nature::Pagseguro,
        Nature::Rede,
        Nature::Sfpay,
        Nature::SispagPagseg,
        Nature::TedPagseg
    ];

    /// The label written to the `Historico` output column.
    pub fn label(&self) -> &'static str {
        match self {
            Nature::Banrisul => "BANRISUL",
            Nature::Bin => "BIN",
            Nature::Cielo => "CIELO",
            Nature::Credz => "CREDZ",
            Nature::Getnet => "GETNET",
            Nature::Global => "GLOBAL",
            Nature::Pagseguro => "PAGSEGURO",
            Nature::Rede => "REDE",
            Nature::Sfpay => "SFPAY",
            Nature::SispagPagseg => "SISPAG PAGSEG",
            Nature::TedPagseg => "TEDPAGSEG"
        }
    }
}

impl Display for Nature {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl Serialize for Nature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Accounting code bound to a [`Nature`].
///
/// Codes mix letters and digits (`A10801`, `101113`) so they are kept as text.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NatureCode(String);

impl NatureCode {
    pub fn new(code: impl Into<String>) -> Self {
        NatureCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NatureCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
