pub mod jsonl;
pub mod table;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Reads a CSV table or a JSONL file, chosen by extension.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if is_csv(path) {
        table::read_csv(path)
    } else {
        jsonl::read_jsonl(path)
    }
}

pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::Profile;
    use tempfile::TempDir;

    #[test]
    fn read_table_dispatches_on_extension() {
        let dir = TempDir::new().expect("temp dir should be created");
        let csv_path = dir.path().join("profiles.CSV");
        fs::write(
            &csv_path,
            "user_id,profile_completeness,profile_views,portfolio_items\nu-1,80,1200,\n",
        )
        .expect("csv fixture should write");
        let jsonl_path = dir.path().join("profiles.jsonl");
        fs::write(
            &jsonl_path,
            "{\"user_id\":\"u-2\",\"proposal_success_rate\":12}\n",
        )
        .expect("jsonl fixture should write");

        let from_csv: Vec<Profile> = read_table(&csv_path).expect("csv should read");
        assert_eq!(from_csv[0].completeness(), 80.0);
        assert_eq!(from_csv[0].portfolio(), 0.0);

        let from_jsonl: Vec<Profile> = read_table(&jsonl_path).expect("jsonl should read");
        assert_eq!(from_jsonl[0].proposal_success(), 12.0);
    }

    #[test]
    fn write_json_pretty_creates_parent_dirs() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("a/b/summary.json");
        write_json_pretty(&path, &serde_json::json!({"ok": true})).expect("write should succeed");
        let content = fs::read_to_string(&path).expect("file should exist");
        assert!(content.contains("\"ok\": true"));
    }
}
