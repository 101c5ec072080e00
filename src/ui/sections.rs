use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use jobscope::view::{DistributionView, OverviewView, SalaryView, View};

use super::{plot, tables};

// ---------------------------------------------------------------------------
// Central panel – one painter per view
// ---------------------------------------------------------------------------

/// Paint a rendered view.
pub fn show(ui: &mut Ui, view: &View) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match view {
            View::Overview(v) => overview(ui, v),
            View::Salary(Ok(v)) => salary_analysis(ui, v),
            View::Salary(Err(e)) => {
                log::debug!("Salary analysis: {e}");
                ui.heading("💰 Salary Analysis");
                ui.colored_label(Color32::YELLOW, "No salary data available to display.");
            }
            View::Distribution(v) => distribution(ui, v),
        });
}

fn overview(ui: &mut Ui, v: &OverviewView) {
    ui.heading("📍 Overview");
    ui.add_space(4.0);
    tables::preview_table(ui, &v.preview);
    ui.add_space(8.0);
    bullet(ui, "Total Jobs", v.total_jobs);
    bullet(ui, "Unique Companies", v.unique_companies);
    bullet(ui, "Locations", v.unique_locations);
}

fn bullet(ui: &mut Ui, label: &str, value: usize) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("•  {label}:"));
        ui.label(RichText::new(value.to_string()).strong());
    });
}

fn salary_analysis(ui: &mut Ui, v: &SalaryView) {
    ui.heading("💰 Salary Analysis");
    ui.label(format!("{} postings with salary information", v.salaried_jobs));
    ui.separator();

    ui.strong("📊 Summary Statistics");
    tables::summary_table(ui, &v.summary);
    ui.separator();

    ui.strong("📈 Salary Distribution");
    plot::salary_histogram(ui, &v.histogram);
    ui.separator();

    ui.strong("📦 Salary Range – Box Plot");
    plot::salary_box_plot(ui, &v.box_plot, &v.avg_salaries);
    ui.separator();

    ui.strong("📍 Average Salary by Location (Top 10)");
    let top_first: Vec<_> = v.top_locations.iter().rev().cloned().collect();
    plot::mean_bars(ui, "top_locations", &top_first, Color32::LIGHT_BLUE);
    ui.separator();

    ui.strong("🧠 Average Salary by Job Title (Top 10)");
    plot::mean_bars(ui, "frequent_titles", &v.frequent_titles, Color32::LIGHT_GREEN);
    ui.separator();

    ui.strong("💸 Top Paying Job Titles");
    plot::top_paying_bars(ui, "top_paying_titles", &v.top_paying_titles);
}

fn distribution(ui: &mut Ui, v: &DistributionView) {
    ui.heading("🌍 Job Distribution by Location");
    if v.locations.is_empty() {
        ui.colored_label(Color32::YELLOW, "No job postings loaded.");
        return;
    }
    ui.label(format!(
        "Top {} locations across {} postings",
        v.locations.len(),
        v.total_jobs
    ));
    plot::count_bars(ui, "location_counts", &v.locations);
}
