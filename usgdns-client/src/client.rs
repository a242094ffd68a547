//! HTTP request methods for the record API.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::types::{ApiErrorBody, Record, RecordContent};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the usg-dns-api record service.
///
/// Holds the base URL and the authentication token; both are immutable after
/// construction, so a single instance can be shared freely across tasks.
/// Every call is a single HTTP round trip with no retries and no caching.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Creates the HTTP client with timeout configuration.
fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

impl Client {
    /// Creates a client for the given base URL and token.
    ///
    /// A trailing slash on `url` is stripped. The token is sent verbatim as
    /// the `Authorization` header value on every request; no scheme prefix
    /// such as `Bearer` is added.
    #[must_use]
    pub fn new(url: &str, token: &str) -> Self {
        Self {
            http: create_http_client(),
            base_url: url.strip_suffix('/').unwrap_or(url).to_string(),
            token: token.to_string(),
        }
    }

    /// Normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists all records, in the order given by the server.
    ///
    /// `GET /records`, expects HTTP 200.
    pub async fn list_records(&self) -> Result<Vec<Record>> {
        let url = format!("{}/records", self.base_url);
        log::debug!("GET {url}");

        let response = self.send(self.http.get(&url)).await?;
        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                message: None,
            });
        }

        decode(response).await
    }

    /// Fetches a single record by id.
    ///
    /// `GET /records/{id}`, expects HTTP 200.
    pub async fn get_record(&self, id: &str) -> Result<Record> {
        let url = format!("{}/records/{id}", self.base_url);
        log::debug!("GET {url}");

        let response = self.send(self.http.get(&url)).await?;
        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        decode(response).await
    }

    /// Creates a record; the returned record carries the server-assigned id.
    ///
    /// `POST /records`, expects HTTP 201.
    pub async fn create_record(&self, name: &str, target: &str) -> Result<Record> {
        let url = format!("{}/records", self.base_url);
        log::debug!("POST {url}");

        let body = RecordContent { name, target };
        let response = self.send(self.http.post(&url).json(&body)).await?;
        if response.status() != StatusCode::CREATED {
            return Err(status_error(response).await);
        }

        decode(response).await
    }

    /// Replaces a record's name and target.
    ///
    /// `PUT /records/{id}`, expects HTTP 200.
    pub async fn update_record(&self, id: &str, name: &str, target: &str) -> Result<Record> {
        let url = format!("{}/records/{id}", self.base_url);
        log::debug!("PUT {url}");

        let body = RecordContent { name, target };
        let response = self.send(self.http.put(&url).json(&body)).await?;
        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        decode(response).await
    }

    /// Deletes a record by id.
    ///
    /// `DELETE /records/{id}`, expects HTTP 204.
    pub async fn delete_record(&self, id: &str) -> Result<()> {
        let url = format!("{}/records/{id}", self.base_url);
        log::debug!("DELETE {url}");

        let response = self.send(self.http.delete(&url)).await?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                message: None,
            });
        }

        Ok(())
    }

    /// Attaches the `Authorization` header and executes the request.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .header("Authorization", &self.token)
            .send()
            .await
            .map_err(|e| ClientError::Request {
                detail: e.to_string(),
            })?;

        log::debug!("Response Status: {}", response.status());
        Ok(response)
    }
}

/// Reads and decodes a success response body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response_text = response.text().await.map_err(|e| ClientError::Request {
        detail: format!("failed to read the response body: {e}"),
    })?;

    log::debug!("Response Body: {response_text}");

    serde_json::from_str(&response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {response_text}");
        ClientError::Decode {
            detail: e.to_string(),
        }
    })
}

/// Builds the error for a non-success status, enriched with the server's
/// `message` field when the body carries one. A body that fails to decode is
/// ignored: the status error stands alone.
async fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|e| e.message)
            .filter(|m| !m.is_empty()),
        Err(_) => None,
    };

    if let Some(msg) = &message {
        log::error!("API error ({status}): {msg}");
    }

    ClientError::UnexpectedStatus { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = Client::new("https://dns.example.com/", "secret");
        assert_eq!(client.base_url(), "https://dns.example.com");
    }

    #[test]
    fn base_url_without_trailing_slash_unchanged() {
        let client = Client::new("https://dns.example.com", "secret");
        assert_eq!(client.base_url(), "https://dns.example.com");
    }
}
