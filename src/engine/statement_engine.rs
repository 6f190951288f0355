use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::error;

use crate::engine::StatementReader;
use crate::models::RawTransaction;
use crate::pipeline::{Consolidation, Pipeline};
use crate::rules::RuleSet;
use crate::types::StatementError;

/// Consolidates statement files: a blocking task reads rows while the pipeline consumes them.
pub struct StatementEngine {
    rules: Arc<RuleSet>,
    backpressure: usize
}

impl StatementEngine {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            backpressure: 256
        }
    }

    /// Bounds how many rows the reader may run ahead of the pipeline.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads and consolidates one statement. Every call runs its own pipeline.
    ///
    /// # Errors
    /// Returns `StatementError` when the file cannot be read or its header is malformed.
    /// Defective rows never fail the run; they are listed in the report instead.
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<Consolidation, StatementError> {
        let (sender, receiver) = mpsc::channel::<RawTransaction>(self.backpressure);
        let reader_handle = self.spawn_statement_reader(path.as_ref().to_path_buf(), sender);
        let consolidation = self.process_transactions(receiver).await;

        reader_handle.await??;

        Ok(consolidation)
    }

    fn spawn_statement_reader(&self, path: PathBuf, sender: mpsc::Sender<RawTransaction>) -> JoinHandle<Result<(), StatementError>> {
        spawn_blocking(move || {
            let reader = StatementReader::from_path(&path).inspect_err(|error| {
                error!("Error opening statement at path: {} | {error}", path.display());
            })?;

            for result in reader {
                let transaction = result?;

                if sender.blocking_send(transaction).is_err() {
                    break;
                }
            }

            Ok(())
        })
    }

    async fn process_transactions(&self, mut receiver: mpsc::Receiver<RawTransaction>) -> Consolidation {
        let mut pipeline = Pipeline::new(&self.rules);

        while let Some(transaction) = receiver.recv().await {
            pipeline.push(transaction);
        }

        pipeline.finish()
    }
}
