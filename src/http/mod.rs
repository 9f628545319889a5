//! HTTP module: client construction and single-file fetching.
//!
//! - [`client`] - Middleware client creation ([`create_http_client`])
//! - [`fetcher`] - Streamed, verified downloads ([`FileFetcher`])

pub mod client;
pub mod fetcher;

pub use client::{create_http_client, HttpClientConfig};
pub use fetcher::{Fetched, FileFetcher};
