//! Record resource adapter.

use std::sync::Arc;

use usgdns_client::{Record, RecordStore};

use crate::diagnostics::Diagnostic;

/// Desired record values decoded from the host tool's plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPlan {
    /// Name of the record.
    pub name: String,
    /// Target of the record.
    pub target: String,
}

/// Persisted record values as tracked by the host tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordState {
    /// Server-assigned identifier.
    pub id: String,
    /// Name of the record.
    pub name: String,
    /// Target of the record.
    pub target: String,
}

impl From<Record> for RecordState {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            target: record.target,
        }
    }
}

/// Adapter driving a single record's lifecycle against a [`RecordStore`].
///
/// Each method maps one host-tool lifecycle call onto one store operation and
/// translates the outcome into either new state or a [`Diagnostic`]. No
/// partial state is produced on failure.
pub struct RecordResource {
    store: Arc<dyn RecordStore>,
}

impl RecordResource {
    /// Creates the adapter over the session's shared store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates the planned record.
    ///
    /// On success the returned state carries the server-assigned id. On
    /// failure no state is produced; the host treats the creation as never
    /// having happened.
    pub async fn create(&self, plan: &RecordPlan) -> Result<RecordState, Diagnostic> {
        log::debug!("Creating record '{}' -> '{}'", plan.name, plan.target);

        let record = self
            .store
            .create_record(&plan.name, &plan.target)
            .await
            .map_err(|e| {
                Diagnostic::new(
                    "Error creating record",
                    format!("Could not create record, unexpected error: {e}"),
                )
            })?;

        Ok(record.into())
    }

    /// Refreshes state from the remote API.
    ///
    /// `Ok(None)` means the record no longer exists remotely (HTTP 404) and
    /// should be dropped from state. Any other failure leaves the tracked
    /// state intact and surfaces a read diagnostic.
    pub async fn read(&self, state: &RecordState) -> Result<Option<RecordState>, Diagnostic> {
        log::debug!("Reading record {}", state.id);

        match self.store.get_record(&state.id).await {
            Ok(record) => Ok(Some(record.into())),
            Err(e) if e.is_not_found() => {
                log::warn!("Record {} is gone, dropping it from state", state.id);
                Ok(None)
            }
            Err(e) => Err(Diagnostic::new(
                "Error reading record",
                format!(
                    "Could not read record ID {}, unexpected error: {e}",
                    state.id
                ),
            )),
        }
    }

    /// Applies the planned values to the existing record.
    ///
    /// The returned state is rebuilt from the server's response, preserving
    /// the original id.
    pub async fn update(
        &self,
        state: &RecordState,
        plan: &RecordPlan,
    ) -> Result<RecordState, Diagnostic> {
        log::debug!("Updating record {}", state.id);

        let record = self
            .store
            .update_record(&state.id, &plan.name, &plan.target)
            .await
            .map_err(|e| {
                Diagnostic::new(
                    "Error updating record",
                    format!(
                        "Could not update record ID {}, unexpected error: {e}",
                        state.id
                    ),
                )
            })?;

        Ok(record.into())
    }

    /// Deletes the tracked record. On success the host clears the state by
    /// convention; nothing further is required here.
    pub async fn delete(&self, state: &RecordState) -> Result<(), Diagnostic> {
        log::debug!("Deleting record {}", state.id);

        self.store.delete_record(&state.id).await.map_err(|e| {
            Diagnostic::new(
                "Error deleting record",
                format!(
                    "Could not delete record ID {}, unexpected error: {e}",
                    state.id
                ),
            )
        })
    }

    /// Imports an externally created record by id.
    ///
    /// The id is passed through as-is; the host's subsequent read fills in
    /// the remaining attributes.
    #[must_use]
    pub fn import(id: &str) -> RecordState {
        RecordState {
            id: id.to_string(),
            name: String::new(),
            target: String::new(),
        }
    }
}
