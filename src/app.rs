use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, sections};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JobscopeApp {
    pub state: AppState,
}

impl JobscopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for JobscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("navigation")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active section ----
        let view = self.state.current_view();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("💼 Job Market Dashboard");
            ui.separator();
            sections::show(ui, &view);
        });
    }
}
