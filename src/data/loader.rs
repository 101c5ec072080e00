use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{JobDataset, JobRecord};

const COMPANY: &str = "Company";
const LOCATION: &str = "Location";
const JOB_TITLE: &str = "Job Title";
const SALARY_MIN: &str = "salary_min";
const SALARY_MAX: &str = "salary_max";

fn is_typed_column(name: &str) -> bool {
    matches!(name, COMPANY | LOCATION | JOB_TITLE | SALARY_MIN | SALARY_MAX)
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a cleaned job dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "Company": ..., "Job Title": ..., "salary_min": ... }, ...]`
/// * `.csv`     – header row; an empty salary cell means "absent"
/// * `.parquet` – string columns plus nullable numeric salary columns
pub fn load_file(path: &Path) -> Result<JobDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')` or by
/// the `clean_jobs` binary:
///
/// ```json
/// [
///   {
///     "Company": "Acme",
///     "Location": "Worldwide",
///     "Job Title": "Senior Rust Engineer",
///     "salary_min": 90000,
///     "salary_max": null,
///     "tags": ["rust"]
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<JobDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON file {}", path.display()))?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<JobDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let JsonValue::Array(rows) = root else {
        bail!("Expected top-level JSON array");
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.is_object() {
                bail!("Row {i} is not a JSON object");
            }
            serde_json::from_value::<JobRecord>(row).with_context(|| format!("Row {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(JobDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. `salary_min` / `salary_max`
/// cells are numbers or empty. All other unknown columns are passed through.
fn load_csv(path: &Path) -> Result<JobDataset> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<JobDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut record = JobRecord::default();

        for (col_idx, value) in row.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            match col_name.as_str() {
                COMPANY => record.company = value.to_string(),
                LOCATION => record.location = value.to_string(),
                JOB_TITLE => record.job_title = value.to_string(),
                SALARY_MIN => record.salary_min = parse_salary(value, row_no, SALARY_MIN)?,
                SALARY_MAX => record.salary_max = parse_salary(value, row_no, SALARY_MAX)?,
                other => {
                    record.extra.insert(other.to_string(), guess_json_value(value));
                }
            }
        }

        records.push(record);
    }

    Ok(JobDataset::from_records(records))
}

fn parse_salary(s: &str, row: usize, col: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let v = s
        .parse::<f64>()
        .with_context(|| format!("CSV row {row}, {col}: '{s}' is not a number"))?;
    Ok((!v.is_nan()).then_some(v))
}

fn guess_json_value(s: &str) -> JsonValue {
    if s.is_empty() {
        return JsonValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return JsonValue::from(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return JsonValue::Number(n);
        }
    }
    if s == "true" || s == "false" {
        return JsonValue::Bool(s == "true");
    }
    JsonValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of cleaned job records.
///
/// Expected schema:
/// - `Company`, `Location`, `Job Title`: Utf8 or LargeUtf8 (nullable)
/// - `salary_min`, `salary_max`: Float64/Float32/Int64/Int32 (nullable)
/// - Any other columns are passed through as JSON values
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<JobDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening parquet file {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let column = |name: &str| schema.index_of(name).ok().map(|i| batch.column(i));

        let company = column(COMPANY);
        let location = column(LOCATION);
        let job_title = column(JOB_TITLE);
        let salary_min = column(SALARY_MIN);
        let salary_max = column(SALARY_MAX);

        let extra_cols: Vec<(&String, &ArrayRef)> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, f)| !is_typed_column(f.name()))
            .map(|(i, f)| (f.name(), batch.column(i)))
            .collect();

        for row in 0..batch.num_rows() {
            let text = |col: Option<&ArrayRef>, name: &str| -> Result<String> {
                col.map(|c| extract_text(c, row))
                    .transpose()
                    .with_context(|| format!("Row {row}: failed to read '{name}'"))
                    .map(Option::unwrap_or_default)
            };
            let salary = |col: Option<&ArrayRef>, name: &str| -> Result<Option<f64>> {
                col.map(|c| extract_f64(c, row))
                    .transpose()
                    .with_context(|| format!("Row {row}: failed to read '{name}'"))
                    .map(Option::flatten)
            };

            let mut extra = BTreeMap::new();
            for (name, col) in &extra_cols {
                extra.insert((*name).clone(), extract_json_value(col, row));
            }

            records.push(JobRecord {
                company: text(company, COMPANY)?,
                location: text(location, LOCATION)?,
                job_title: text(job_title, JOB_TITLE)?,
                salary_min: salary(salary_min, SALARY_MIN)?,
                salary_max: salary(salary_max, SALARY_MAX)?,
                extra,
            });
        }
    }

    Ok(JobDataset::from_records(records))
}

// -- Arrow helpers --

/// Read a string cell; null reads as "".
fn extract_text(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

/// Read a numeric cell; null and NaN read as absent.
fn extract_f64(col: &ArrayRef, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let v = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => bail!("Expected a numeric column, got {other:?}"),
    };
    Ok((!v.is_nan()).then_some(v))
}

/// Convert a pass-through cell to JSON.
fn extract_json_value(col: &ArrayRef, row: usize) -> JsonValue {
    if col.is_null(row) {
        return JsonValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => extract_text(col, row)
            .map(JsonValue::String)
            .unwrap_or(JsonValue::Null),
        DataType::Int32 => JsonValue::from(col.as_primitive::<Int32Type>().value(row)),
        DataType::Int64 => JsonValue::from(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 | DataType::Float64 => extract_f64(col, row)
            .ok()
            .flatten()
            .and_then(serde_json::Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        DataType::Boolean => JsonValue::Bool(col.as_boolean().value(row)),
        other => JsonValue::String(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    #[test]
    fn json_rows_keep_order_and_nulls() {
        let ds = parse_json(
            r#"[
                {"Company": "A", "Location": "Remote", "Job Title": "Dev", "salary_min": 50000, "salary_max": null},
                {"Company": "B", "Location": "Berlin", "Job Title": "Ops", "salary_min": null, "salary_max": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].salary_min, Some(50_000.0));
        assert_eq!(ds.records()[1].company, "B");
        assert!(!ds.records()[1].has_salary());
    }

    #[test]
    fn json_must_be_an_array_of_objects() {
        assert!(parse_json(r#"{"Company": "A"}"#).is_err());
        let err = parse_json(r#"[{"Company": "A"}, 3]"#).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));
    }

    #[test]
    fn json_rejects_non_numeric_salary() {
        assert!(parse_json(r#"[{"salary_min": "lots"}]"#).is_err());
    }

    #[test]
    fn csv_empty_salary_is_absent() {
        let data = "Company,Location,Job Title,salary_min,salary_max,url\n\
                    Acme,Remote,Dev,60000,,https://example.com/1\n\
                    Beta,Berlin,Ops,,,\n";
        let ds = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        assert_eq!(ds.len(), 2);
        let first = &ds.records()[0];
        assert_eq!(first.job_title, "Dev");
        assert_eq!(first.salary_min, Some(60_000.0));
        assert_eq!(first.salary_max, None);
        assert_eq!(first.extra["url"], "https://example.com/1");
        assert_eq!(ds.records()[1].extra["url"], JsonValue::Null);
    }

    #[test]
    fn csv_bad_salary_is_an_error() {
        let data = "Company,salary_min\nAcme,abc\n";
        assert!(read_csv(csv::Reader::from_reader(data.as_bytes())).is_err());
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("jobs.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn loads_json_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"Company": "A", "salary_max": 1}}]"#).unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.records()[0].salary_max, Some(1.0));
    }

    #[test]
    fn loads_parquet_with_nullable_salaries() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COMPANY, DataType::Utf8, true),
            Field::new(LOCATION, DataType::Utf8, true),
            Field::new(JOB_TITLE, DataType::Utf8, true),
            Field::new(SALARY_MIN, DataType::Float64, true),
            Field::new(SALARY_MAX, DataType::Int64, true),
            Field::new("id", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec![Some("Acme"), None])),
                Arc::new(StringArray::from(vec![Some("Remote"), Some("Lisbon")])),
                Arc::new(StringArray::from(vec![Some("Dev"), Some("QA")])),
                Arc::new(Float64Array::from(vec![Some(40_000.0), None])),
                Arc::new(Int64Array::from(vec![None, Some(80_000)])),
                Arc::new(Int64Array::from(vec![7, 8])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        let [a, b] = ds.records() else {
            panic!("expected two records");
        };
        assert_eq!(a.company, "Acme");
        assert_eq!(a.salary_min, Some(40_000.0));
        assert_eq!(a.salary_max, None);
        assert_eq!(b.company, "");
        assert_eq!(b.salary_max, Some(80_000.0));
        assert_eq!(b.extra["id"], JsonValue::from(8));
    }
}
