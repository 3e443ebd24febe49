//! Catalog input sources and interactive query prompting.
//!
//! The CLI loads its catalog once per invocation, from a CSV file, an
//! inline JSON array, or JSON piped on stdin. A load failure is fatal:
//! the caller prints the diagnostic and exits non-zero. Missing *fields*
//! inside records are not failures; the normalizer resolves those with
//! defaults.

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use recsys_core::RawRecord;

/// Where the catalog comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A CSV file with a header row.
    Csv(PathBuf),
    /// An inline JSON array of records.
    Json(String),
    /// A JSON array of records piped on stdin.
    Stdin,
}

/// Loads raw records from the given source.
pub fn load_records(source: &CatalogSource) -> Result<Vec<RawRecord>> {
    match source {
        CatalogSource::Csv(path) => records_from_csv(path),
        CatalogSource::Json(data) => records_from_json(data),
        CatalogSource::Stdin => {
            let mut data = String::new();
            io::stdin()
                .read_to_string(&mut data)
                .context("failed to read catalog from stdin")?;
            records_from_json(&data)
        }
    }
}

/// Reads records from a CSV file with a header row.
///
/// Duplicated header names keep the leftmost column; empty cells count
/// as missing so the normalizer's defaults apply.
fn records_from_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog file '{}'", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers from '{}'", path.display()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("malformed CSV row in '{}'", path.display()))?;

        let mut record = RawRecord::new();
        for (key, field) in headers.iter().zip(row.iter()) {
            if field.is_empty() || record.contains_key(key) {
                continue;
            }
            record.insert(key.to_string(), Value::from(field));
        }
        records.push(record);
    }

    Ok(records)
}

/// Parses records from a JSON array string.
fn records_from_json(data: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(data).context("invalid JSON catalog: expected an array of objects")
}

/// Prompts on stdin for the three query fields.
///
/// Used when the command line did not supply all of them.
pub fn prompt_query() -> Result<(String, String, String)> {
    println!("Welcome to the Product Recommendation Model Tester.");
    println!("This model uses Hybrid Scoring to ensure high match rates.");

    let application = prompt("1. Enter Application (e.g., Packaging, Woodworking): ")?;
    let power = prompt("2. Enter Desired Power Usage (High, Medium, or Low): ")?;
    let description = prompt("3. Enter User Description (e.g., quiet, high flow): ")?;

    Ok((application, power, description))
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query input")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn csv_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Brand,Product,Applications,Motor Rating (kw),Description").unwrap();
        writeln!(file, "Acme,Vac100,Woodworking,6.0,quiet industrial vacuum").unwrap();
        writeln!(file, "Bolt,Pak20,Packaging,3.0,compact pump").unwrap();

        let records = records_from_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Brand"], "Acme");
        assert_eq!(records[1]["Motor Rating (kw)"], "3.0");
    }

    #[test]
    fn csv_duplicate_headers_keep_first_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Brand,Brand,Product").unwrap();
        writeln!(file, "First,Second,Vac100").unwrap();

        let records = records_from_csv(file.path()).unwrap();
        assert_eq!(records[0]["Brand"], "First");
    }

    #[test]
    fn csv_empty_cells_count_as_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Brand,Product").unwrap();
        writeln!(file, ",Vac100").unwrap();

        let records = records_from_csv(file.path()).unwrap();
        assert!(!records[0].contains_key("Brand"));
        assert_eq!(records[0]["Product"], "Vac100");
    }

    #[test]
    fn csv_missing_file_is_an_error() {
        let err = records_from_csv(Path::new("/no/such/products.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open catalog file"));
    }

    #[test]
    fn json_array_parses() {
        let records =
            records_from_json(r#"[{"Brand": "Acme", "Motor Rating (kw)": 6.0}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Brand"], "Acme");
    }

    #[test]
    fn json_non_array_is_an_error() {
        assert!(records_from_json(r#"{"Brand": "Acme"}"#).is_err());
        assert!(records_from_json("not json").is_err());
    }
}
