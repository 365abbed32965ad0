use std::rc::Rc;

use crate::core::{read_json, write_json, AppError, Clock, KeyValueStore, DATASET_KEY};
use crate::models::dataset::Dataset;

/// Owner of the canonical dataset. Every mutation goes through [`StateStore::replace`].
pub struct StateStore {
    provider: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    dataset: Dataset,
    degraded: bool,
}

impl StateStore {
    /// Reads the last snapshot. Missing or unreadable snapshots fall back to the seed.
    #[tracing::instrument(name = "Loading dataset", skip(provider, clock))]
    pub fn load(provider: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let dataset = match read_json::<Dataset>(provider.as_ref(), DATASET_KEY) {
            Ok(Some(dataset)) => dataset,
            Ok(None) => {
                tracing::info!("no saved dataset found, starting from seed data");
                Dataset::seed()
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e.message(),
                    "saved dataset could not be read, starting from seed data"
                );
                Dataset::seed()
            }
        };

        Self {
            provider,
            clock,
            dataset,
            degraded: false,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// True when the latest write did not reach storage; the in-memory state is still current.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Swaps in `next` and writes it out. A failed write is logged, never returned.
    pub fn replace(&mut self, next: Dataset) {
        self.dataset = next;
        match self.persist() {
            Ok(()) => self.degraded = false,
            Err(e) => {
                self.degraded = true;
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e.message(),
                    key = DATASET_KEY,
                    "failed to persist dataset; change kept in memory only"
                );
            }
        }
    }

    /// Full overwrite of the stored snapshot.
    pub fn persist(&self) -> Result<(), AppError> {
        write_json(self.provider.as_ref(), DATASET_KEY, &self.dataset)
    }
}
