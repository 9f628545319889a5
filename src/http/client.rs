//! HTTP client setup and middleware configuration.
//!
//! Both the asset index and the assets themselves are fetched through one
//! middleware client built here: requests are traced with `reqwest-tracing`
//! and, when asked for, transient failures are retried with exponential
//! backoff. By default no retry is attempted, so each fetch is one request.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "launcher/1.0".parse()?);
//!
//! let client = create_http_client(HttpClientConfig {
//!     retries: 2,
//!     proxy: None,
//!     headers: Some(headers),
//! })?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Number of transport-level retries for transient failures.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates an HTTP client with tracing and, if configured, retries.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    // Trace HTTP requests. See the tracing crate to make use of these traces.
    let mut builder = ClientBuilder::new(inner_client).with(TracingMiddleware::default());
    if config.retries > 0 {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }

    Ok(builder.build())
}
