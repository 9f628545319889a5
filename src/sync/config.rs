//! Configuration of a [`SyncEngine`](crate::sync::SyncEngine).

use crate::asset::HashAlgorithm;
use crate::http::HttpClientConfig;
use crate::progress::StyleOptions;
use crate::sync::events::SyncCallback;

use reqwest::header::HeaderMap;
use std::sync::Arc;

/// What a sync pass does when one download fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure in that asset's result and keep going.
    #[default]
    Continue,
    /// Return the first error and leave the rest of the queue untouched.
    Abort,
}

/// Configuration structure for the sync engine.
#[derive(Clone)]
pub struct SyncConfig {
    /// Base URL of the content-addressed CDN.
    pub cdn_base_url: String,
    /// Digest algorithm applied to every asset.
    pub hash_algorithm: HashAlgorithm,
    /// Behaviour on a failed download.
    pub failure_policy: FailurePolicy,
    /// Transport-level retries for transient HTTP failures.
    pub retries: u32,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy.
    pub proxy: Option<reqwest::Proxy>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
    /// Callback for lifecycle events.
    pub on_event: Option<Arc<SyncCallback>>,
}

impl SyncConfig {
    /// Creates the default configuration for `cdn_base_url`.
    pub fn new(cdn_base_url: impl Into<String>) -> Self {
        Self {
            cdn_base_url: cdn_base_url.into(),
            hash_algorithm: HashAlgorithm::default(),
            failure_policy: FailurePolicy::default(),
            retries: 0,
            headers: None,
            proxy: None,
            style_options: StyleOptions::default(),
            on_event: None,
        }
    }

    pub(crate) fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            retries: self.retries,
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
        }
    }
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncConfig")
            .field("cdn_base_url", &self.cdn_base_url)
            .field("hash_algorithm", &self.hash_algorithm)
            .field("failure_policy", &self.failure_policy)
            .field("retries", &self.retries)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("style_options", &self.style_options)
            .field("on_event", &self.on_event.is_some())
            .finish()
    }
}
