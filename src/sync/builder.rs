//! Builder for [`SyncEngine`] instances.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::asset::HashAlgorithm;
//! use assetsync::sync::{FailurePolicy, SyncEngineBuilder};
//! use reqwest::header::{HeaderValue, USER_AGENT};
//!
//! # fn example() -> assetsync::Result<()> {
//! let engine = SyncEngineBuilder::new("https://launcher.example.com/assets")
//!     .hash_algorithm(HashAlgorithm::Sha1)
//!     .failure_policy(FailurePolicy::Abort)
//!     .header(USER_AGENT, HeaderValue::from_static("launcher/1.0"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{
    config::{FailurePolicy, SyncConfig},
    engine::SyncEngine,
    events::SyncEvent,
};
use crate::asset::HashAlgorithm;
use crate::error::Result;
use crate::progress::StyleOptions;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::sync::Arc;

/// A builder used to create a [`SyncEngine`].
pub struct SyncEngineBuilder {
    config: SyncConfig,
}

impl SyncEngineBuilder {
    /// Creates a builder with the default options for `cdn_base_url`.
    pub fn new(cdn_base_url: impl Into<String>) -> Self {
        Self {
            config: SyncConfig::new(cdn_base_url),
        }
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden(cdn_base_url: impl Into<String>) -> Self {
        Self::new(cdn_base_url).style_options(StyleOptions::hidden())
    }

    /// Set the digest algorithm used to verify every asset.
    pub fn hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.config.hash_algorithm = hash_algorithm;
        self
    }

    /// Set what happens when a download fails.
    pub fn failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.config.failure_policy = failure_policy;
        self
    }

    /// Set the number of transport-level retries for transient HTTP failures.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Route requests through `proxy`.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the callback receiving [`SyncEvent`]s.
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SyncEvent<'_>) + Send + Sync + 'static,
    {
        self.config.on_event = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Merge `headers` into the default request headers.
    ///
    /// Can be called multiple times; see also [`SyncEngineBuilder::header`].
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add one default request header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Create the [`SyncEngine`] with the specified options.
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn build(self) -> Result<SyncEngine> {
        SyncEngine::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, USER_AGENT};

    const CDN: &str = "https://cdn.example.com/assets";

    #[test]
    fn test_builder_defaults() {
        let engine = SyncEngineBuilder::new(CDN).build().unwrap();

        assert_eq!(engine.cdn_base_url(), CDN);
        assert_eq!(engine.hash_algorithm(), HashAlgorithm::Sha1);
        assert_eq!(engine.failure_policy(), FailurePolicy::Continue);
        assert_eq!(engine.retries(), 0);
        assert!(engine.headers().is_none());
    }

    #[test]
    fn test_builder_configuration() {
        let engine = SyncEngineBuilder::hidden(CDN)
            .hash_algorithm(HashAlgorithm::Sha256)
            .failure_policy(FailurePolicy::Abort)
            .retries(2)
            .build()
            .unwrap();

        assert_eq!(engine.hash_algorithm(), HashAlgorithm::Sha256);
        assert_eq!(engine.failure_policy(), FailurePolicy::Abort);
        assert_eq!(engine.retries(), 2);
    }

    #[test]
    fn test_builder_headers_merge() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let engine = SyncEngineBuilder::new(CDN)
            .header(USER_AGENT, HeaderValue::from_static("assetsync-test"))
            .headers(headers)
            .build()
            .unwrap();

        let headers = engine.headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(USER_AGENT),
            Some(&HeaderValue::from_static("assetsync-test"))
        );
    }

    #[test]
    fn test_engine_debug_hides_callback() {
        let engine = SyncEngineBuilder::new(CDN).on_event(|_| {}).build().unwrap();
        let debug_str = format!("{:?}", engine);

        assert!(debug_str.contains("SyncEngine"));
        assert!(debug_str.contains("on_event: true"));
    }
}
