use super::model::{JobDataset, JobRecord};

// ---------------------------------------------------------------------------
// NormalizedRecord – a record with both salary bounds resolved
// ---------------------------------------------------------------------------

/// A job record whose salary bounds are both known.
///
/// Invariant: `avg_salary == (salary_min + salary_max) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRecord<'a> {
    pub record: &'a JobRecord,
    pub salary_min: f64,
    pub salary_max: f64,
    pub avg_salary: f64,
}

impl<'a> NormalizedRecord<'a> {
    /// Resolve the salary bounds of `record`, filling a missing bound from
    /// its sibling. `None` when both bounds are absent.
    pub fn from_record(record: &'a JobRecord) -> Option<Self> {
        let (salary_min, salary_max) = match (record.salary_min, record.salary_max) {
            (Some(lo), Some(hi)) => (lo, hi),
            (Some(lo), None) => (lo, lo),
            (None, Some(hi)) => (hi, hi),
            (None, None) => return None,
        };
        Some(NormalizedRecord {
            record,
            salary_min,
            salary_max,
            avg_salary: (salary_min + salary_max) / 2.0,
        })
    }

    pub fn location(&self) -> &'a str {
        &self.record.location
    }

    pub fn job_title(&self) -> &'a str {
        &self.record.job_title
    }
}

// ---------------------------------------------------------------------------
// SalarySet – the retained subset
// ---------------------------------------------------------------------------

/// All records of a dataset that carry salary information, in input order.
/// May be empty; the reductions in [`super::aggregate`] refuse to work on an
/// empty set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalarySet<'a> {
    records: Vec<NormalizedRecord<'a>>,
}

impl<'a> SalarySet<'a> {
    pub fn records(&self) -> &[NormalizedRecord<'a>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `avg_salary` of every record, in input order.
    pub fn avg_salaries(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.avg_salary).collect()
    }
}

/// Drop records with no salary at all and resolve the rest.
///
/// A record is excluded only when *both* bounds are absent; one known bound
/// is enough to keep it.
pub fn normalize(records: &[JobRecord]) -> SalarySet<'_> {
    SalarySet {
        records: records
            .iter()
            .filter_map(NormalizedRecord::from_record)
            .collect(),
    }
}

/// Convenience wrapper over [`normalize`] for a whole dataset.
pub fn normalize_dataset(dataset: &JobDataset) -> SalarySet<'_> {
    normalize(dataset.records())
}
