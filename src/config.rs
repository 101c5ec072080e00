use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Ingestion settings
// ---------------------------------------------------------------------------

/// Public RemoteOK listing endpoint. Element 0 of its response is a legal
/// notice, not a job posting.
pub const REMOTEOK_URL: &str = "https://remoteok.com/api";

/// RemoteOK rejects requests without a browser-like agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Where the fetch and clean stages read and write their files.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub url: String,
    pub user_agent: String,
    /// Raw listings as returned by the API, minus the metadata element.
    pub raw_path: PathBuf,
    /// Cleaned records consumed by the dashboard.
    pub cleaned_path: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            url: REMOTEOK_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            raw_path: PathBuf::from("data/jobs_raw.json"),
            cleaned_path: PathBuf::from("data/jobs_cleaned.json"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard settings
// ---------------------------------------------------------------------------

/// Knobs for the aggregate views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Length of every top-N ranking.
    pub top_n: usize,
    /// Number of equal-width histogram bins.
    pub histogram_bins: usize,
    /// Rows shown in the overview preview table.
    pub preview_rows: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            histogram_bins: 30,
            preview_rows: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset loaded at startup.
    pub data_path: PathBuf,
    pub view: ViewConfig,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: IngestConfig::default().cleaned_path,
            view: ViewConfig::default(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
