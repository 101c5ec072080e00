use std::collections::HashMap;

use thiserror::Error;

use super::model::JobDataset;
use super::salary::{NormalizedRecord, SalarySet};

/// Salary reductions cannot run on an empty [`SalarySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no salary data available")]
    NoSalaryData,
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;

fn require_data(set: &SalarySet<'_>) -> StatsResult<()> {
    if set.is_empty() {
        Err(StatsError::NoSalaryData)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl FieldStats {
    /// `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(FieldStats { min, mean, max })
    }
}

/// Min / mean / max of the three salary columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalarySummary {
    pub salary_min: FieldStats,
    pub salary_max: FieldStats,
    pub avg_salary: FieldStats,
}

impl SalarySummary {
    /// Rows in display order: `(column name, stats)`.
    pub fn rows(&self) -> [(&'static str, FieldStats); 3] {
        [
            ("salary_min", self.salary_min),
            ("salary_max", self.salary_max),
            ("avg_salary", self.avg_salary),
        ]
    }
}

pub fn describe(set: &SalarySet<'_>) -> StatsResult<SalarySummary> {
    require_data(set)?;
    let records = set.records();
    let mins: Vec<f64> = records.iter().map(|r| r.salary_min).collect();
    let maxs: Vec<f64> = records.iter().map(|r| r.salary_max).collect();
    let avgs: Vec<f64> = records.iter().map(|r| r.avg_salary).collect();
    Ok(SalarySummary {
        salary_min: FieldStats::compute(&mins).ok_or(StatsError::NoSalaryData)?,
        salary_max: FieldStats::compute(&maxs).ok_or(StatsError::NoSalaryData)?,
        avg_salary: FieldStats::compute(&avgs).ok_or(StatsError::NoSalaryData)?,
    })
}

// ---------------------------------------------------------------------------
// Group means and rankings
// ---------------------------------------------------------------------------

/// Column a ranking partitions on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Location,
    JobTitle,
}

impl GroupKey {
    fn of<'a>(self, record: &NormalizedRecord<'a>) -> &'a str {
        match self {
            GroupKey::Location => record.location(),
            GroupKey::JobTitle => record.job_title(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupKey::Location => "Location",
            GroupKey::JobTitle => "Job Title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Mean `avg_salary` of one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

/// Accumulate per-key means, groups listed in first-encountered order.
fn group_means<'k>(pairs: impl IntoIterator<Item = (&'k str, f64)>) -> Vec<GroupMean> {
    let mut index: HashMap<&'k str, usize> = HashMap::new();
    let mut acc: Vec<(&'k str, f64, usize)> = Vec::new();
    for (key, value) in pairs {
        let i = *index.entry(key).or_insert_with(|| {
            acc.push((key, 0.0, 0));
            acc.len() - 1
        });
        acc[i].1 += value;
        acc[i].2 += 1;
    }
    acc.into_iter()
        .map(|(key, sum, count)| GroupMean {
            key: key.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Stable sort: equal means keep their relative order.
fn sort_by_mean(groups: &mut [GroupMean], order: SortOrder) {
    match order {
        SortOrder::Ascending => groups.sort_by(|a, b| a.mean.total_cmp(&b.mean)),
        SortOrder::Descending => groups.sort_by(|a, b| b.mean.total_cmp(&a.mean)),
    }
}

/// Mean `avg_salary` per distinct `key`, ordered by mean and truncated to
/// `limit` groups. Ties keep first-encountered order.
pub fn group_mean_by(
    set: &SalarySet<'_>,
    key: GroupKey,
    limit: usize,
    order: SortOrder,
) -> StatsResult<Vec<GroupMean>> {
    require_data(set)?;
    let mut groups = group_means(set.records().iter().map(|r| (key.of(r), r.avg_salary)));
    sort_by_mean(&mut groups, order);
    groups.truncate(limit);
    Ok(groups)
}

/// Mean `avg_salary` of the `limit` most frequent job titles, ascending.
///
/// Frequency ties are broken by first-encountered order, and so are ties
/// between equal means in the final ordering.
pub fn frequent_title_means(set: &SalarySet<'_>, limit: usize) -> StatsResult<Vec<GroupMean>> {
    require_data(set)?;
    let groups = group_means(
        set.records()
            .iter()
            .map(|r| (GroupKey::JobTitle.of(r), r.avg_salary)),
    );

    let mut by_count: Vec<usize> = (0..groups.len()).collect();
    by_count.sort_by(|&a, &b| groups[b].count.cmp(&groups[a].count));
    let mut keep = vec![false; groups.len()];
    for &i in by_count.iter().take(limit) {
        keep[i] = true;
    }

    let mut selected: Vec<GroupMean> = groups
        .into_iter()
        .zip(keep)
        .filter_map(|(g, k)| k.then_some(g))
        .collect();
    sort_by_mean(&mut selected, SortOrder::Ascending);
    Ok(selected)
}

// ---------------------------------------------------------------------------
// Distribution shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width histogram of `avg_salary` over `[min, max]`.
///
/// The last bin is closed on the right. When every value is identical a
/// single bin holds them all.
pub fn histogram(set: &SalarySet<'_>, bins: usize) -> StatsResult<Vec<HistogramBin>> {
    require_data(set)?;
    let values = set.avg_salaries();
    let stats = FieldStats::compute(&values).ok_or(StatsError::NoSalaryData)?;
    let bins = bins.max(1);
    let width = (stats.max - stats.min) / bins as f64;

    if width <= 0.0 {
        return Ok(vec![HistogramBin {
            start: stats.min,
            end: stats.max,
            count: values.len(),
        }]);
    }

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: stats.min + width * i as f64,
            end: stats.min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for v in values {
        let i = (((v - stats.min) / width).floor() as usize).min(bins - 1);
        out[i].count += 1;
    }
    Ok(out)
}

/// Five-number summary behind a box plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

/// Percentile with linear interpolation over sorted values. `p` in [0, 100].
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Quartiles of `avg_salary`, whiskers at the most extreme data points
/// within 1.5 IQR of the box.
pub fn box_summary(set: &SalarySet<'_>) -> StatsResult<BoxSummary> {
    require_data(set)?;
    let mut sorted = set.avg_salaries();
    sorted.sort_by(f64::total_cmp);

    let q1 = percentile_sorted(&sorted, 25.0);
    let median = percentile_sorted(&sorted, 50.0);
    let q3 = percentile_sorted(&sorted, 75.0);
    let fence = 1.5 * (q3 - q1);

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| v >= q1 - fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= q3 + fence)
        .unwrap_or(q3);

    Ok(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
    })
}

// ---------------------------------------------------------------------------
// Posting counts (whole dataset, salaried or not)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// Number of postings per `Location`, most common first, truncated to
/// `limit`. Ties keep first-encountered order. Empty for an empty dataset.
pub fn location_counts(dataset: &JobDataset, limit: usize) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = group_means(
        dataset
            .records()
            .iter()
            .map(|r| (r.location.as_str(), 0.0)),
    )
    .into_iter()
    .map(|g| GroupCount {
        key: g.key,
        count: g.count,
    })
    .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(limit);
    groups
}
