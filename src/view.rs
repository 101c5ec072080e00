use crate::config::ViewConfig;
use crate::data::aggregate::{
    self, BoxSummary, GroupCount, GroupKey, GroupMean, HistogramBin, SalarySummary, SortOrder,
    StatsResult,
};
use crate::data::model::{JobDataset, JobRecord};
use crate::data::salary::normalize_dataset;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Dashboard sections, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    SalaryAnalysis,
    JobDistribution,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Overview,
        Section::SalaryAnalysis,
        Section::JobDistribution,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::SalaryAnalysis => "Salary Analysis",
            Section::JobDistribution => "Job Distribution",
        }
    }
}

/// Which section the operator is looking at. Owned by the app state and
/// passed to [`render`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    pub section: Section,
}

// ---------------------------------------------------------------------------
// Views – owned render output, independent of egui
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub total_jobs: usize,
    pub unique_companies: usize,
    pub unique_locations: usize,
    pub preview: Vec<JobRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryView {
    /// Number of postings carrying salary information.
    pub salaried_jobs: usize,
    pub summary: SalarySummary,
    /// `avg_salary` of every salaried posting, for the box-plot points.
    pub avg_salaries: Vec<f64>,
    pub histogram: Vec<HistogramBin>,
    pub box_plot: BoxSummary,
    /// Top locations by mean salary, highest first.
    pub top_locations: Vec<GroupMean>,
    /// Most frequent titles by mean salary, lowest first.
    pub frequent_titles: Vec<GroupMean>,
    /// Top titles by mean salary, highest first.
    pub top_paying_titles: Vec<GroupMean>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionView {
    pub total_jobs: usize,
    /// Postings per location, most common first.
    pub locations: Vec<GroupCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Overview(OverviewView),
    /// `Err(NoSalaryData)` is the explicit "no data" state.
    Salary(StatsResult<SalaryView>),
    Distribution(DistributionView),
}

/// Build the view for `section` from `dataset`. Pure: nothing is cached
/// between calls.
pub fn render(section: Section, dataset: &JobDataset, config: &ViewConfig) -> View {
    match section {
        Section::Overview => View::Overview(overview(dataset, config)),
        Section::SalaryAnalysis => View::Salary(salary_analysis(dataset, config)),
        Section::JobDistribution => View::Distribution(DistributionView {
            total_jobs: dataset.len(),
            locations: aggregate::location_counts(dataset, config.top_n),
        }),
    }
}

fn overview(dataset: &JobDataset, config: &ViewConfig) -> OverviewView {
    OverviewView {
        total_jobs: dataset.len(),
        unique_companies: dataset.unique_companies(),
        unique_locations: dataset.unique_locations(),
        preview: dataset.head(config.preview_rows).to_vec(),
    }
}

fn salary_analysis(dataset: &JobDataset, config: &ViewConfig) -> StatsResult<SalaryView> {
    let set = normalize_dataset(dataset);
    Ok(SalaryView {
        salaried_jobs: set.len(),
        summary: aggregate::describe(&set)?,
        avg_salaries: set.avg_salaries(),
        histogram: aggregate::histogram(&set, config.histogram_bins)?,
        box_plot: aggregate::box_summary(&set)?,
        top_locations: aggregate::group_mean_by(
            &set,
            GroupKey::Location,
            config.top_n,
            SortOrder::Descending,
        )?,
        frequent_titles: aggregate::frequent_title_means(&set, config.top_n)?,
        top_paying_titles: aggregate::group_mean_by(
            &set,
            GroupKey::JobTitle,
            config.top_n,
            SortOrder::Descending,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::StatsError;

    fn job(company: &str, location: &str, min: Option<f64>, max: Option<f64>) -> JobRecord {
        JobRecord {
            company: company.to_string(),
            location: location.to_string(),
            job_title: "Dev".to_string(),
            salary_min: min,
            salary_max: max,
            ..Default::default()
        }
    }

    fn dataset() -> JobDataset {
        JobDataset::from_records(vec![
            job("A", "Remote", Some(50_000.0), None),
            job("B", "Berlin", None, Some(70_000.0)),
            job("A", "Remote", None, None),
        ])
    }

    #[test]
    fn sections_have_dashboard_labels() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Overview", "Salary Analysis", "Job Distribution"]);
        assert_eq!(Navigation::default().section, Section::Overview);
    }

    #[test]
    fn overview_counts_every_record() {
        let View::Overview(v) = render(Section::Overview, &dataset(), &ViewConfig::default())
        else {
            panic!("expected overview");
        };
        assert_eq!(v.total_jobs, 3);
        assert_eq!(v.unique_companies, 2);
        assert_eq!(v.unique_locations, 2);
        assert_eq!(v.preview.len(), 3);
    }

    #[test]
    fn salary_view_uses_salaried_records_only() {
        let View::Salary(Ok(v)) =
            render(Section::SalaryAnalysis, &dataset(), &ViewConfig::default())
        else {
            panic!("expected salary data");
        };
        assert_eq!(v.salaried_jobs, 2);
        assert_eq!(v.summary.avg_salary.mean, 60_000.0);
        assert_eq!(v.top_locations[0].key, "Berlin");
        assert_eq!(v.frequent_titles.len(), 1);
        assert_eq!(v.histogram.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn salary_view_without_salaries_is_no_data() {
        let ds = JobDataset::from_records(vec![job("A", "Remote", None, None)]);
        assert_eq!(
            render(Section::SalaryAnalysis, &ds, &ViewConfig::default()),
            View::Salary(Err(StatsError::NoSalaryData))
        );
        assert_eq!(
            render(Section::SalaryAnalysis, &JobDataset::default(), &ViewConfig::default()),
            View::Salary(Err(StatsError::NoSalaryData))
        );
    }

    #[test]
    fn distribution_counts_unsalaried_postings_too() {
        let View::Distribution(v) =
            render(Section::JobDistribution, &dataset(), &ViewConfig::default())
        else {
            panic!("expected distribution");
        };
        assert_eq!(v.total_jobs, 3);
        assert_eq!(v.locations[0].key, "Remote");
        assert_eq!(v.locations[0].count, 2);
    }

    #[test]
    fn render_is_repeatable() {
        let ds = dataset();
        let config = ViewConfig::default();
        for section in Section::ALL {
            assert_eq!(render(section, &ds, &config), render(section, &ds, &config));
        }
    }
}
