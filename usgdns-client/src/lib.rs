//! # usgdns-client
//!
//! Async client for the [usg-dns-api](https://github.com/rclsilver-org/usg-dns-api)
//! record service: a small REST backend exposing DNS records as
//! `{id, name, target}` objects under `/records`.
//!
//! The crate has two layers:
//!
//! - [`Client`] — the concrete HTTP client. Owns the base URL and the
//!   authentication token, speaks JSON over HTTP(S).
//! - [`RecordStore`] — the capability trait abstracting the five record
//!   operations, implemented by [`Client`]. Adapter layers for host tools
//!   should depend on this trait so the HTTP client stays untouched when the
//!   host side changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use usgdns_client::{Client, RecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("https://dns.example.com", "secret-token");
//!
//!     let record = client.create_record("www", "1.2.3.4").await?;
//!     println!("created record {}", record.id);
//!
//!     for record in client.list_records().await? {
//!         println!("{} -> {}", record.name, record.target);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Request`] — transport failure (connect, DNS, TLS)
//! - [`ClientError::UnexpectedStatus`] — the server answered with a status
//!   other than the operation's success code, optionally carrying the
//!   server-supplied error message
//! - [`ClientError::Decode`] — malformed JSON in a success response
//!
//! Nothing is retried: every error is surfaced synchronously to the caller.

mod client;
mod error;
mod store;
mod types;

pub use client::Client;
pub use error::{ClientError, Result};
pub use store::RecordStore;
pub use types::Record;
