use super::manifest::FileEntry;
use super::synth::SyntheticData;
use crate::dataset::{jsonl, table, write_json_pretty};
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const USERS_FILE: &str = "users.csv";
pub const PROFILES_FILE: &str = "freelancer_profiles.csv";
pub const MILESTONES_FILE: &str = "roadmap_milestones.csv";
pub const REVIEWS_FILE: &str = "sentiment_reviews.jsonl";
pub const COMPARISONS_FILE: &str = "comparisons.jsonl";
pub const REQUESTS_FILE: &str = "mentorship_requests.jsonl";
pub const MESSAGES_FILE: &str = "mentorship_messages.jsonl";
pub const INDUSTRIES_FILE: &str = "industries.json";

fn entry(dir: &Path, name: &str, rows: usize) -> Result<FileEntry> {
    let bytes = fs::read(dir.join(name))?;
    debug!(file = name, rows, "dataset written");
    Ok(FileEntry::new(name, rows, &bytes))
}

/// Writes every dataset under `dir` and returns one manifest entry per file.
pub fn write_datasets(dir: &Path, data: &SyntheticData) -> Result<Vec<FileEntry>> {
    fs::create_dir_all(dir)?;
    let mut entries = Vec::with_capacity(8);

    table::write_csv(&dir.join(USERS_FILE), &data.users)?;
    entries.push(entry(dir, USERS_FILE, data.users.len())?);

    table::write_csv(&dir.join(PROFILES_FILE), &data.profiles)?;
    entries.push(entry(dir, PROFILES_FILE, data.profiles.len())?);

    table::write_csv(&dir.join(MILESTONES_FILE), &data.milestones)?;
    entries.push(entry(dir, MILESTONES_FILE, data.milestones.len())?);

    jsonl::write_jsonl(&dir.join(REVIEWS_FILE), &data.reviews)?;
    entries.push(entry(dir, REVIEWS_FILE, data.reviews.len())?);

    jsonl::write_jsonl(&dir.join(COMPARISONS_FILE), &data.comparisons)?;
    entries.push(entry(dir, COMPARISONS_FILE, data.comparisons.len())?);

    jsonl::write_jsonl(&dir.join(REQUESTS_FILE), &data.mentorship_requests)?;
    entries.push(entry(dir, REQUESTS_FILE, data.mentorship_requests.len())?);

    jsonl::write_jsonl(&dir.join(MESSAGES_FILE), &data.mentorship_messages)?;
    entries.push(entry(dir, MESSAGES_FILE, data.mentorship_messages.len())?);

    write_json_pretty(&dir.join(INDUSTRIES_FILE), &data.industries)?;
    entries.push(entry(dir, INDUSTRIES_FILE, data.industries.len())?);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::synth::Synthesizer;
    use crate::ranking::MilestoneRow;
    use crate::types::profile::Profile;
    use tempfile::TempDir;

    #[test]
    fn writes_all_files_with_matching_row_counts() {
        let dir = TempDir::new().expect("tempdir should be created");
        let data = Synthesizer::new(42, "2024-01-01T00:00:00+00:00").generate(12);
        let entries = write_datasets(dir.path(), &data).expect("datasets should be written");

        assert_eq!(entries.len(), 8);
        for entry in &entries {
            assert!(dir.path().join(&entry.file).exists(), "{} missing", entry.file);
        }
        let users = entries
            .iter()
            .find(|entry| entry.file == USERS_FILE)
            .expect("users entry should exist");
        assert_eq!(users.rows, 12);
    }

    #[test]
    fn generated_tables_feed_the_scorer() {
        let dir = TempDir::new().expect("tempdir should be created");
        let data = Synthesizer::new(3, "2024-01-01T00:00:00+00:00").generate(5);
        write_datasets(dir.path(), &data).expect("datasets should be written");

        let profiles: Vec<Profile> =
            crate::dataset::read_table(&dir.path().join(PROFILES_FILE)).expect("profiles should read");
        let milestones: Vec<MilestoneRow> = crate::dataset::read_table(&dir.path().join(MILESTONES_FILE))
            .expect("milestones should read");
        assert_eq!(profiles.len(), 5);
        assert_eq!(milestones.len(), 25);
        assert_eq!(profiles[0].user_id.as_deref(), Some(data.users[0].id.as_str()));
    }
}
