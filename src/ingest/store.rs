use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;

/// Write `listings` as a JSON array indented by four spaces, creating the
/// parent directory if needed.
pub fn save_listings<T: Serialize>(listings: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    listings
        .serialize(&mut ser)
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush().context("flushing output")?;
    Ok(())
}

/// Read back a JSON array written by [`save_listings`].
pub fn load_listings(path: &Path) -> Result<Vec<JsonValue>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {} as a JSON array", path.display()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn creates_parent_directories_and_indents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("jobs_raw.json");
        save_listings(&[json!({"id": "1"})], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n    {\n        \"id\": \"1\"\n    }\n]");
        assert_eq!(load_listings(&path).unwrap(), vec![json!({"id": "1"})]);
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs_raw.json");
        save_listings::<JsonValue>(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn non_ascii_is_written_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        save_listings(&[json!("Zürich")], &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Zürich"));
    }

    #[test]
    fn loading_a_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_listings(&dir.path().join("nope.json")).is_err());
    }
}
