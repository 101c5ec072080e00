use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Plot, PlotPoints, Points,
    uniform_grid_spacer,
};

use jobscope::color::{generate_palette, scale_colors};
use jobscope::data::aggregate::{BoxSummary, GroupCount, GroupMean, HistogramBin};

use super::tables::money;

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Salary distribution
// ---------------------------------------------------------------------------

/// Histogram of average salaries.
pub fn salary_histogram(ui: &mut Ui, bins: &[HistogramBin]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width().max(1.0))
                .name(format!("{} – {}", money(b.start), money(b.end)))
        })
        .collect();

    Plot::new("salary_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Average Salary")
        .y_axis_label("count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Salary Distribution")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

/// Box plot of average salaries with every posting drawn beside it.
pub fn salary_box_plot(ui: &mut Ui, summary: &BoxSummary, values: &[f64]) {
    let spread = BoxSpread::new(
        summary.lower_whisker,
        summary.q1,
        summary.median,
        summary.q3,
        summary.upper_whisker,
    );
    let points: PlotPoints = values.iter().map(|&v| [-0.6, v]).collect();

    Plot::new("salary_box_plot")
        .height(CHART_HEIGHT)
        .y_axis_label("avg_salary")
        .show_x(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(
                BoxPlot::new(vec![BoxElem::new(0.0, spread).name("avg_salary")])
                    .name("Salary Range Overview"),
            );
            plot_ui.points(
                Points::new(points)
                    .radius(2.0)
                    .color(Color32::LIGHT_BLUE)
                    .name("postings"),
            );
        });
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// Horizontal bars. `rows` are given bottom to top.
fn horizontal_bars(ui: &mut Ui, id: &str, value_label: &str, rows: Vec<(String, f64, Color32)>) {
    let labels: Vec<String> = rows.iter().map(|(l, _, _)| l.clone()).collect();
    let bars: Vec<Bar> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (label, value, color))| Bar::new(i as f64, value).name(label).fill(color))
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(value_label)
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().width(0.7));
        });
}

/// Label for an integer grid mark, empty between categories.
fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Mean salary per group in a single colour, list order bottom to top.
pub fn mean_bars(ui: &mut Ui, id: &str, groups: &[GroupMean], color: Color32) {
    let rows = groups
        .iter()
        .map(|g| (g.key.clone(), g.mean, color))
        .collect();
    horizontal_bars(ui, id, "Average Salary", rows);
}

/// Mean salary per group, highest first on top, shaded on the viridis scale.
pub fn top_paying_bars(ui: &mut Ui, id: &str, groups: &[GroupMean]) {
    let means: Vec<f64> = groups.iter().map(|g| g.mean).collect();
    let rows = groups
        .iter()
        .zip(scale_colors(&means))
        .rev()
        .map(|(g, c)| (g.key.clone(), g.mean, c))
        .collect();
    horizontal_bars(ui, id, "Average Salary", rows);
}

/// Posting counts per location, most common on top.
pub fn count_bars(ui: &mut Ui, id: &str, counts: &[GroupCount]) {
    let rows = counts
        .iter()
        .zip(generate_palette(counts.len()))
        .rev()
        .map(|(g, c)| (g.key.clone(), g.count as f64, c))
        .collect();
    horizontal_bars(ui, id, "Job Postings", rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integer_marks() {
        let labels = vec!["Remote".to_string(), "Berlin".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Remote");
        assert_eq!(category_label(&labels, 1.0), "Berlin");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
