use serde_json::{Map, Value as JsonValue};

/// Raw RemoteOK field → cleaned column name.
const RENAMES: [(&str, &str); 3] = [
    ("company", "Company"),
    ("location", "Location"),
    ("position", "Job Title"),
];

const SALARY_FIELDS: [&str; 2] = ["salary_min", "salary_max"];

/// Map raw listings onto the cleaned schema read by the dashboard.
///
/// - `company` / `location` / `position` become `Company` / `Location` /
///   `Job Title`, trimmed; missing or non-string values become `null`.
/// - `salary_min` / `salary_max` stay numeric when positive; `0`, negative,
///   missing or non-numeric values (RemoteOK's "not disclosed") become `null`.
/// - Every other field is passed through untouched.
///
/// Elements that are not JSON objects are skipped.
pub fn clean_listings(raw: &[JsonValue]) -> Vec<JsonValue> {
    raw.iter()
        .enumerate()
        .filter_map(|(i, listing)| match listing {
            JsonValue::Object(obj) => Some(JsonValue::Object(clean_listing(obj))),
            other => {
                log::warn!("Skipping listing {i}: expected an object, got {other}");
                None
            }
        })
        .collect()
}

fn clean_listing(obj: &Map<String, JsonValue>) -> Map<String, JsonValue> {
    let mut out = Map::new();

    for (from, to) in RENAMES {
        let value = obj
            .get(from)
            .and_then(JsonValue::as_str)
            .map(|s| JsonValue::String(s.trim().to_string()))
            .unwrap_or(JsonValue::Null);
        out.insert(to.to_string(), value);
    }

    for field in SALARY_FIELDS {
        let value = obj
            .get(field)
            .and_then(salary_value)
            .map(JsonValue::from)
            .unwrap_or(JsonValue::Null);
        out.insert(field.to_string(), value);
    }

    for (key, value) in obj {
        let renamed = RENAMES.iter().any(|(from, _)| from == key);
        if !renamed && !SALARY_FIELDS.contains(&key.as_str()) && !out.contains_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }

    out
}

/// A disclosed salary: a positive number, or a string holding one.
fn salary_value(v: &JsonValue) -> Option<f64> {
    let n = match v {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n > 0.0).then_some(n)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::model::JobRecord;

    #[test]
    fn renames_and_nulls_undisclosed_salaries() {
        let raw = vec![json!({
            "id": "123",
            "company": " Acme ",
            "position": "Rust Engineer",
            "location": "Worldwide",
            "salary_min": 0,
            "salary_max": 120000,
            "tags": ["rust"]
        })];
        let cleaned = clean_listings(&raw);
        assert_eq!(
            cleaned[0],
            json!({
                "Company": "Acme",
                "Location": "Worldwide",
                "Job Title": "Rust Engineer",
                "salary_min": null,
                "salary_max": 120000.0,
                "id": "123",
                "tags": ["rust"]
            })
        );
    }

    #[test]
    fn missing_fields_become_null() {
        let cleaned = clean_listings(&[json!({"slug": "x"})]);
        assert_eq!(cleaned[0]["Company"], JsonValue::Null);
        assert_eq!(cleaned[0]["salary_min"], JsonValue::Null);
        assert_eq!(cleaned[0]["slug"], "x");
    }

    #[test]
    fn numeric_strings_are_accepted_as_salaries() {
        let cleaned = clean_listings(&[json!({"salary_min": "85000", "salary_max": "n/a"})]);
        assert_eq!(cleaned[0]["salary_min"], json!(85000.0));
        assert_eq!(cleaned[0]["salary_max"], JsonValue::Null);
    }

    #[test]
    fn non_objects_are_skipped() {
        let cleaned = clean_listings(&[json!("legal notice"), json!({"company": "A"})]);
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn cleaned_output_loads_as_job_records() {
        let cleaned = clean_listings(&[json!({
            "company": "Acme",
            "position": "Dev",
            "location": "",
            "salary_min": 50000,
            "salary_max": 0
        })]);
        let rec: JobRecord = serde_json::from_value(cleaned[0].clone()).unwrap();
        assert_eq!(rec.company, "Acme");
        assert_eq!(rec.job_title, "Dev");
        assert_eq!(rec.salary_min, Some(50_000.0));
        assert_eq!(rec.salary_max, None);
    }
}
