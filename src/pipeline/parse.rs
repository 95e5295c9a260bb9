//! Record feed loading.

use crate::model::AnomalyRecord;
use crate::parsers::parse_records_str;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a record feed from a JSON file.
///
/// The file must hold a top-level JSON array; each element becomes one
/// record with defaults substituted for missing fields.
pub fn load_records(path: &Path) -> Result<Vec<AnomalyRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record feed {}", path.display()))?;

    let records = parse_records_str(&content)
        .with_context(|| format!("Failed to parse record feed {}", path.display()))?;

    tracing::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_records_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"source_ip": "10.0.0.1"}}, {{"sensor": "S-1"}}]"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/feed.json")).unwrap_err();
        assert!(err.to_string().contains("feed.json"));
    }

    #[test]
    fn test_load_records_not_an_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"records": []}}"#).unwrap();
        assert!(load_records(file.path()).is_err());
    }
}
