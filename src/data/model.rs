use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// JobRecord – one row of the cleaned dataset
// ---------------------------------------------------------------------------

/// A single cleaned job posting.
///
/// Only the five columns the dashboard reads are typed; every other column
/// is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Company", default, deserialize_with = "text_or_null")]
    pub company: String,
    #[serde(rename = "Location", default, deserialize_with = "text_or_null")]
    pub location: String,
    #[serde(rename = "Job Title", default, deserialize_with = "text_or_null")]
    pub job_title: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    /// Pass-through columns (`date`, `tags`, `url`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Pandas writes missing strings as `null`; read those as "".
fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl JobRecord {
    /// Whether at least one salary bound is known.
    pub fn has_salary(&self) -> bool {
        self.salary_min.is_some() || self.salary_max.is_some()
    }
}

// ---------------------------------------------------------------------------
// JobDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Immutable, ordered sequence of job records.
///
/// Record order is the file order; every ranking that needs a tie-break
/// falls back on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDataset {
    records: Vec<JobRecord>,
}

impl JobDataset {
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        JobDataset { records }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` records (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[JobRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Count of distinct `Company` values.
    pub fn unique_companies(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.company.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Count of distinct `Location` values.
    pub fn unique_locations(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.location.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
