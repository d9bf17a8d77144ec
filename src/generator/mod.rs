pub mod manifest;
pub mod synth;
pub mod writer;

use crate::cli::GenerateCommand;
use crate::dataset::write_json_pretty;
use crate::error::{FairfoundError, Result};
use crate::types::config::FairfoundConfig;
use chrono::Utc;
use manifest::{DatasetManifest, MANIFEST_FILE};
use std::path::PathBuf;
use synth::Synthesizer;
use tracing::info;

pub fn execute_generate(cmd: &GenerateCommand, config: &FairfoundConfig) -> Result<PathBuf> {
    let seed = cmd.seed.unwrap_or_else(|| config.generate_seed());
    let users = cmd.users.unwrap_or_else(|| config.generate_users());
    if users == 0 {
        return Err(FairfoundError::ConfigParse(
            "--users must be greater than zero".to_string(),
        ));
    }

    let data = Synthesizer::new(seed, Utc::now().to_rfc3339()).generate(users);
    let files = writer::write_datasets(&cmd.out, &data)?;
    let manifest = DatasetManifest::new(seed, users, files);
    let manifest_path = cmd.out.join(MANIFEST_FILE);
    write_json_pretty(&manifest_path, &manifest)?;

    info!(
        seed,
        users,
        reviews = data.reviews.len(),
        out = %cmd.out.display(),
        "synthetic datasets generated"
    );
    println!("Generated datasets under {}", cmd.out.display());
    Ok(manifest_path)
}
