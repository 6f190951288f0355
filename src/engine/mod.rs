mod statement_engine;
mod statement_reader;

pub use statement_engine::StatementEngine;
pub use statement_reader::{Column, StatementReader};
