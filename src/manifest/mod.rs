//! Manifest module: loading the asset index a sync pass works from.
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetsync::http::{create_http_client, HttpClientConfig};
//! use assetsync::manifest::ManifestLoader;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = ManifestLoader::new(create_http_client(HttpClientConfig::default())?);
//! let assets = loader.load("https://launcher.example.com/indexes/jdk-17.json").await?;
//! println!("{} assets", assets.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;

pub use loader::{is_remote, load_local, parse_index, ManifestLoader};
