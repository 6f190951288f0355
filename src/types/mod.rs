mod errors;
mod monetary;
mod nature;

pub use errors::StatementError;
pub use monetary::{parse_amount, round_amount};
pub use nature::{Nature, NatureCode};

/// 1-based line of the statement file a row was read from.
pub type LineNumber = u64;
