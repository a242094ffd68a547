//! Records data-source adapter.

use std::sync::Arc;

use usgdns_client::RecordStore;

use crate::diagnostics::Diagnostic;
use crate::resource::RecordState;

/// Listing produced by the records data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsState {
    /// Every remote record, in the order given by the server.
    pub records: Vec<RecordState>,
}

/// Adapter exposing the full remote record list to the host tool.
pub struct RecordsDataSource {
    store: Arc<dyn RecordStore>,
}

impl RecordsDataSource {
    /// Creates the adapter over the session's shared store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetches every record. No filtering, pagination, or sorting is
    /// applied; the server's order is preserved.
    pub async fn read(&self) -> Result<RecordsState, Diagnostic> {
        log::debug!("Listing records");

        let records = self.store.list_records().await.map_err(|e| {
            Diagnostic::new("Unable to Read usg-dns Records", e.to_string())
        })?;

        Ok(RecordsState {
            records: records.into_iter().map(Into::into).collect(),
        })
    }
}
