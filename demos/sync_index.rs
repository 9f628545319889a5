//! Sync a directory against an asset index and print what happened.
//!
//! ```text
//! cargo run --example sync_index -- <cdn-base-url> <index-path-or-url> <destination>
//! ```

use assetsync::{AssetStatus, SyncEngineBuilder, SyncEvent};
use color_eyre::{eyre::eyre, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("assetsync=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(cdn), Some(index), Some(destination)) = (args.next(), args.next(), args.next())
    else {
        return Err(eyre!(
            "usage: sync_index <cdn-base-url> <index-path-or-url> <destination>"
        ));
    };

    let engine = SyncEngineBuilder::new(cdn)
        .on_event(|event| {
            if let SyncEvent::Failed { item, error } = event {
                eprintln!("failed: {} ({})", item.destination.display(), error);
            }
        })
        .build()?;

    let results = engine
        .sync_from_index(&index, &PathBuf::from(destination))
        .await?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Path", "Size", "Status"]);
    for result in results.iter().filter(|r| *r.status() != AssetStatus::Skipped) {
        table.add_row(vec![
            result.asset().path.clone(),
            result.asset().size.to_string(),
            result.status().to_string(),
        ]);
    }
    println!("{table}");

    let downloaded = results
        .iter()
        .filter(|r| *r.status() == AssetStatus::Downloaded)
        .count();
    println!(
        "Processed {} assets. Downloaded {} files.",
        results.len(),
        downloaded
    );

    Ok(())
}
