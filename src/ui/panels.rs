use eframe::egui::{self, Color32, RichText, Ui};

use jobscope::view::Section;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – section navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel. Selecting a section is the only control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();
    ui.label("Go to");

    let mut selected = state.nav.section;
    for section in Section::ALL {
        ui.radio_value(&mut selected, section, section.label());
    }
    if selected != state.nav.section {
        log::debug!("Switching to section {}", selected.label());
        state.select(selected);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} job postings  ·  {}",
            state.dataset.len(),
            state.source.display()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Job Market Dashboard · data: RemoteOK").weak());
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open job postings")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.open(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
