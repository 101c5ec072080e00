//! Map raw listings onto the cleaned schema the dashboard loads.

use anyhow::Result;

use jobscope::config::IngestConfig;
use jobscope::ingest::{clean_listings, load_listings, save_listings};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IngestConfig::default();

    let raw = load_listings(&config.raw_path)?;
    let cleaned = clean_listings(&raw);
    let salaried = cleaned
        .iter()
        .filter(|job| !job["salary_min"].is_null() || !job["salary_max"].is_null())
        .count();
    log::info!(
        "Cleaned {} of {} listings ({} with salary information)",
        cleaned.len(),
        raw.len(),
        salaried
    );

    save_listings(&cleaned, &config.cleaned_path)?;
    log::info!("Saved to {}", config.cleaned_path.display());
    Ok(())
}
