use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
    pub rows: usize,
    pub sha256: String,
}

impl FileEntry {
    pub fn new(file: impl Into<String>, rows: usize, bytes: &[u8]) -> Self {
        Self {
            file: file.into(),
            rows,
            sha256: sha256_hex(bytes),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub version: String,
    pub generated_at: String,
    pub seed: u64,
    pub users: usize,
    pub files: Vec<FileEntry>,
}

impl DatasetManifest {
    pub fn new(seed: u64, users: usize, files: Vec<FileEntry>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            seed,
            users,
            files,
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
