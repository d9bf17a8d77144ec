use crate::error::{FairfoundError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads one JSON object per line. Blank lines are skipped; anything that is
/// not an object, or does not fit `T`, fails with its line number.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |reason: String| FairfoundError::MalformedRecord {
            path: path.display().to_string(),
            line: index + 1,
            reason,
        };
        let value: Value = serde_json::from_str(&line).map_err(|e| malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(malformed("expected a JSON object".to_string()));
        }
        let row = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn write_jsonl<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    super::ensure_parent(path)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
