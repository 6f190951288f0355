use std::collections::HashMap;

use crate::types::{Nature, NatureCode};

const NATURE_CODES: [(Nature, &str); 11] = [
    (Nature::Banrisul, "A10801"),
    (Nature::Bin, "101113"),
    (Nature::Credz, "101115"),
    (Nature::Getnet, "101112"),
    (Nature::Global, "A10806"),
    (Nature::Cielo, "101118"),
    (Nature::Rede, "101111"),
    (Nature::TedPagseg, "101117"),
    (Nature::Sfpay, "101119"),
    (Nature::Pagseguro, "101117"),
    (Nature::SispagPagseg, "101117")
];

/// Lookup from [`Nature`] to the accounting code it is booked under.
#[derive(Debug, Clone)]
pub struct NatureCodeTable {
    codes: HashMap<Nature, NatureCode>
}

impl Default for NatureCodeTable {
    fn default() -> Self {
        Self::new(NATURE_CODES.iter().map(|(nature, code)| (*nature, NatureCode::new(*code))))
    }
}

impl NatureCodeTable {
    pub fn new(entries: impl IntoIterator<Item = (Nature, NatureCode)>) -> Self {
        Self {
            codes: entries.into_iter().collect()
        }
    }

    pub fn resolve(&self, nature: Option<Nature>) -> Option<NatureCode> {
        nature.and_then(|nature| self.codes.get(&nature).cloned())
    }
}
