use std::sync::Arc;

use tokio::task;

use crate::error::{StoreError, StoreResult};
use crate::store::{RecordStore, WriteReport};
use crate::Record;

/// Awaitable wrapper around a [`RecordStore`].
///
/// Each call runs the blocking operation on tokio's blocking pool. There is
/// no locking: concurrent calls against the same directory race exactly as
/// they would with the synchronous store.
#[derive(Clone, Debug)]
pub struct AsyncRecordStore {
    inner: Arc<RecordStore>,
}

impl AsyncRecordStore {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// The wrapped synchronous store.
    pub fn store(&self) -> &RecordStore {
        &self.inner
    }

    /// See [`RecordStore::read`].
    pub async fn read(&self) -> StoreResult<Record> {
        let store = Arc::clone(&self.inner);
        task::spawn_blocking(move || store.read())
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }

    /// See [`RecordStore::write`].
    pub async fn write(&self, data: Option<Record>) -> StoreResult<WriteReport> {
        let store = Arc::clone(&self.inner);
        task::spawn_blocking(move || store.write(data.as_ref()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

impl From<RecordStore> for AsyncRecordStore {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}
