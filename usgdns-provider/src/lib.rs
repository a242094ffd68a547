//! # usgdns-provider
//!
//! Host-tool adapter layer for the usg-dns-api record service: the mapping
//! code an infrastructure-as-code orchestrator calls to reconcile declared
//! DNS records with remote state.
//!
//! Three pieces compose the crate:
//!
//! - [`Provider`] — the bootstrap. Resolves connection configuration (`url`,
//!   `token`; explicit value wins over the `USG_DNS_URL` / `USG_DNS_TOKEN`
//!   environment variables), validates it, and constructs the shared
//!   [`Client`](usgdns_client::Client) once per session.
//! - [`RecordResource`] — the record resource adapter, driving the
//!   create/read/update/delete/import lifecycle of a single record.
//! - [`RecordsDataSource`] — the data-source adapter, listing every remote
//!   record.
//!
//! Both adapters depend on the [`RecordStore`](usgdns_client::RecordStore)
//! capability trait only, so the HTTP client can be replaced by a fake in
//! tests or by another backing store entirely.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use usgdns_provider::{ConfigValue, Provider, ProviderConfig, RecordPlan, RecordResource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::new("dev");
//!     let client = provider.configure(&ProviderConfig {
//!         url: ConfigValue::Known("https://dns.example.com".to_string()),
//!         token: ConfigValue::Known("secret-token".to_string()),
//!     })?;
//!
//!     let resource = RecordResource::new(client);
//!     let state = resource
//!         .create(&RecordPlan {
//!             name: "www".to_string(),
//!             target: "1.2.3.4".to_string(),
//!         })
//!         .await?;
//!     println!("created record {}", state.id);
//!     Ok(())
//! }
//! ```
//!
//! Failures surface as [`Diagnostic`] values: a labeled summary plus a
//! human-readable detail string, the shape host tools render to users.
//! Configuration validation collects every problem into [`Diagnostics`]
//! before reporting, rather than stopping at the first.

mod config;
mod data_source;
mod diagnostics;
mod provider;
mod resource;

pub use config::{ConfigValue, ENV_TOKEN, ENV_URL, ProviderConfig};
pub use data_source::{RecordsDataSource, RecordsState};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use provider::Provider;
pub use resource::{RecordPlan, RecordResource, RecordState};
