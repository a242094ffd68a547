//! Record store capability trait.

use async_trait::async_trait;

use crate::client::Client;
use crate::error::Result;
use crate::types::Record;

/// Capability contract over a remote record store.
///
/// Adapter layers depend on this trait rather than on [`Client`] directly, so
/// the adapter side can be swapped per host tool (or replaced by a fake in
/// tests) without touching the HTTP client.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Lists all records, in the order given by the server.
    async fn list_records(&self) -> Result<Vec<Record>>;

    /// Fetches a single record by id.
    async fn get_record(&self, id: &str) -> Result<Record>;

    /// Creates a record; the returned record carries the server-assigned id.
    async fn create_record(&self, name: &str, target: &str) -> Result<Record>;

    /// Replaces a record's name and target.
    async fn update_record(&self, id: &str, name: &str, target: &str) -> Result<Record>;

    /// Deletes a record by id.
    async fn delete_record(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl RecordStore for Client {
    async fn list_records(&self) -> Result<Vec<Record>> {
        Client::list_records(self).await
    }

    async fn get_record(&self, id: &str) -> Result<Record> {
        Client::get_record(self, id).await
    }

    async fn create_record(&self, name: &str, target: &str) -> Result<Record> {
        Client::create_record(self, name, target).await
    }

    async fn update_record(&self, id: &str, name: &str, target: &str) -> Result<Record> {
        Client::update_record(self, id, name, target).await
    }

    async fn delete_record(&self, id: &str) -> Result<()> {
        Client::delete_record(self, id).await
    }
}
