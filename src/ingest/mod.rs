//! Ingestion: fetch raw listings, persist them, map them onto the cleaned
//! schema the dashboard reads.

pub mod clean;
pub mod fetch;
pub mod store;

pub use clean::clean_listings;
pub use fetch::{FetchError, fetch_listings, try_fetch_listings};
pub use store::{load_listings, save_listings};
