use std::path::{Path, PathBuf};

use anyhow::Result;

use jobscope::config::ViewConfig;
use jobscope::data::loader::load_file;
use jobscope::data::model::JobDataset;
use jobscope::view::{self, Navigation, Section, View};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset. Never mutated; File → Open replaces it wholesale.
    pub dataset: JobDataset,

    /// Where `dataset` came from, shown in the top bar.
    pub source: PathBuf,

    /// Currently selected section.
    pub nav: Navigation,

    pub view_config: ViewConfig,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: JobDataset, source: PathBuf, view_config: ViewConfig) -> Self {
        Self {
            dataset,
            source,
            nav: Navigation::default(),
            view_config,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset.
    pub fn set_dataset(&mut self, dataset: JobDataset, source: PathBuf) {
        self.dataset = dataset;
        self.source = source;
        self.status_message = None;
    }

    /// Load `path`, keeping the current dataset if that fails.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let dataset = load_file(path)?;
        log::info!(
            "Loaded {} job records from {}",
            dataset.len(),
            path.display()
        );
        self.set_dataset(dataset, path.to_path_buf());
        Ok(())
    }

    pub fn select(&mut self, section: Section) {
        self.nav.section = section;
    }

    /// View for the active section, recomputed from the dataset.
    pub fn current_view(&self) -> View {
        view::render(self.nav.section, &self.dataset, &self.view_config)
    }
}
