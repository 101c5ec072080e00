//! Remote job market dashboard.
//!
//! The library holds everything that does not need a window: loading and
//! aggregating job records, fetching and cleaning raw listings, and the pure
//! [`view::render`] step the egui front-end paints from.

pub mod color;
pub mod config;
pub mod data;
pub mod ingest;
pub mod view;
