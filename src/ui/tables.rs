use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use jobscope::data::aggregate::{FieldStats, SalarySummary};
use jobscope::data::model::JobRecord;

const ROW_HEIGHT: f32 = 20.0;

/// Whole-dollar amount with thousands separators, e.g. `$123,456`.
pub fn money(v: f64) -> String {
    let rounded = v.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

fn optional_money(v: Option<f64>) -> String {
    v.map(money).unwrap_or_else(|| "–".to_string())
}

/// First rows of the dataset.
pub fn preview_table(ui: &mut Ui, records: &[JobRecord]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(90.0), 2)
        .header(ROW_HEIGHT, |mut header| {
            for title in ["Company", "Location", "Job Title", "salary_min", "salary_max"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rec in records {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(rec.company.as_str());
                    });
                    row.col(|ui| {
                        ui.label(rec.location.as_str());
                    });
                    row.col(|ui| {
                        ui.label(rec.job_title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(optional_money(rec.salary_min));
                    });
                    row.col(|ui| {
                        ui.label(optional_money(rec.salary_max));
                    });
                });
            }
        });
}

/// min / mean / max rows by salary column.
pub fn summary_table(ui: &mut Ui, summary: &SalarySummary) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .columns(Column::auto().at_least(110.0), 3)
        .header(ROW_HEIGHT, |mut header| {
            for title in ["", "salary_min", "salary_max", "avg_salary"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            let rows = summary.rows();
            let stats: [(&str, fn(&FieldStats) -> f64); 3] = [
                ("min", |s: &FieldStats| s.min),
                ("mean", |s: &FieldStats| s.mean),
                ("max", |s: &FieldStats| s.max),
            ];
            for (label, pick) in stats {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(label).strong());
                    });
                    for (_, field) in &rows {
                        row.col(|ui| {
                            ui.label(money(pick(field)));
                        });
                    }
                });
            }
        });
}
