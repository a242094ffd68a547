//! Wire types for the record API.

use serde::{Deserialize, Serialize};

/// A DNS record as stored by the usg-dns-api server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier. Empty only before creation.
    #[serde(default)]
    pub id: String,
    /// Name of the record.
    pub name: String,
    /// Target of the record.
    pub target: String,
}

/// Request body for create and update calls.
#[derive(Debug, Serialize)]
pub(crate) struct RecordContent<'a> {
    pub name: &'a str,
    pub target: &'a str,
}

/// Error body the server may attach to a failed call.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_wire_shape() {
        let record: Record =
            serde_json::from_str(r#"{"id":"42","name":"www","target":"1.2.3.4"}"#)
                .expect("valid record body");
        assert_eq!(record.id, "42");
        assert_eq!(record.name, "www");
        assert_eq!(record.target, "1.2.3.4");
    }

    #[test]
    fn record_id_defaults_to_empty() {
        let record: Record = serde_json::from_str(r#"{"name":"www","target":"1.2.3.4"}"#)
            .expect("valid record body");
        assert_eq!(record.id, "");
    }

    #[test]
    fn record_content_serializes_name_and_target_only() {
        let body = RecordContent {
            name: "www",
            target: "1.2.3.4",
        };
        let json = serde_json::to_string(&body).expect("serializable body");
        assert_eq!(json, r#"{"name":"www","target":"1.2.3.4"}"#);
    }

    #[test]
    fn error_body_message_defaults_to_empty() {
        let body: ApiErrorBody = serde_json::from_str("{}").expect("valid error body");
        assert_eq!(body.message, "");
    }
}
