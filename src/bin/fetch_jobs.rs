//! Fetch the current RemoteOK listings and save them as raw JSON.

use anyhow::Result;

use jobscope::config::IngestConfig;
use jobscope::ingest::{fetch_listings, save_listings};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IngestConfig::default();

    // A failed fetch still writes an (empty) array.
    let listings = fetch_listings(&config);
    log::info!("Fetched {} job posts.", listings.len());

    save_listings(&listings, &config.raw_path)?;
    log::info!("Saved to {}", config.raw_path.display());
    Ok(())
}
