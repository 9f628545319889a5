#![allow(dead_code)]

use assetsync::{Asset, HashAlgorithm, SyncEngine, SyncEngineBuilder, SyncEvent};
use httpmock::prelude::*;
use httpmock::Mock;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Path prefix the mock CDN serves assets under.
pub const CDN_PREFIX: &str = "/assets";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// SHA-1 of `content` as lowercase hex
pub fn sha1_hex(content: &[u8]) -> String {
    HashAlgorithm::Sha1.digest_bytes(content)
}

/// An asset whose hash and size describe `content`
pub fn asset_for(path: &str, content: &[u8]) -> Asset {
    Asset::new(path, sha1_hex(content), content.len() as u64)
}

/// Path of `hash` on the mock CDN
pub fn cdn_path(hash: &str) -> String {
    format!("{}/{}/{}", CDN_PREFIX, &hash[..2], hash)
}

/// Base URL of the mock CDN
pub fn cdn_base_url(server: &MockServer) -> String {
    server.url(CDN_PREFIX)
}

/// Serves `body` at the CDN location of `asset`
pub async fn mock_asset<'a>(server: &'a MockServer, asset: &Asset, body: &[u8]) -> Mock<'a> {
    let path = cdn_path(&asset.hash);
    let body = body.to_vec();
    server
        .mock_async(move |when, then| {
            when.method(GET).path(path);
            then.status(200).body(body);
        })
        .await
}

/// Answers the CDN location of `asset` with `status`
pub async fn mock_asset_status<'a>(server: &'a MockServer, asset: &Asset, status: u16) -> Mock<'a> {
    let path = cdn_path(&asset.hash);
    server
        .mock_async(move |when, then| {
            when.method(GET).path(path);
            then.status(status);
        })
        .await
}

/// Serves `body` as an asset index at `path`
pub async fn mock_index<'a>(server: &'a MockServer, path: &str, body: &str) -> Mock<'a> {
    let path = path.to_string();
    let body = body.to_string();
    server
        .mock_async(move |when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await
}

/// Starts a CDN that announces a 100-byte body, sends 3 bytes and hangs up.
///
/// Returns the CDN base URL to build an engine or asset URLs from.
pub async fn start_truncating_cdn() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nabc",
                    )
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{}{}", addr, CDN_PREFIX)
}

/// Engine pointed at the mock CDN with progress bars hidden
pub fn create_test_engine(server: &MockServer) -> SyncEngine {
    create_test_engine_builder(server)
        .build()
        .expect("Failed to build engine")
}

/// Builder pointed at the mock CDN with progress bars hidden
pub fn create_test_engine_builder(server: &MockServer) -> SyncEngineBuilder {
    SyncEngineBuilder::hidden(cdn_base_url(server))
}

/// Records event names (with progress for `downloaded`) in emission order
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn record(&self, event: &SyncEvent<'_>) {
        let entry = match event {
            SyncEvent::Starting { assets } => format!("starting:{}", assets.len()),
            SyncEvent::Planned { total, needed } => format!("planned:{}/{}", needed, total),
            SyncEvent::Downloading { item } => {
                format!("downloading:{}", item.destination.file_name().unwrap().to_string_lossy())
            }
            SyncEvent::Downloaded { progress, .. } => format!("downloaded:{:.0}", progress),
            SyncEvent::Failed { .. } => "failed".to_string(),
            SyncEvent::Complete { results } => format!("complete:{}", results.len()),
        };
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Writes `content` to `root/path`, creating parents
pub fn write_file(root: &Path, path: &str, content: &[u8]) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(full, content).expect("Failed to write file");
}

/// Asserts that the file at `path` hashes to `hash`
pub fn assert_file_hash(path: &Path, hash: &str) {
    let content = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    assert_eq!(sha1_hex(&content), hash, "digest mismatch at path: {:?}", path);
}
