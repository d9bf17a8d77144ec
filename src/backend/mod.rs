//! Pushes a demo profile and sample feedback to the platform API.

use crate::cli::SeedCommand;
use crate::error::{FairfoundError, Result};
use crate::types::config::FairfoundConfig;
use crate::types::RunStatus;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const PROFILE_PATH: &str = "freelancers/me/profile/";
pub const FEEDBACK_PATH: &str = "freelancers/me/feedback/";
const DEFAULT_FEEDBACK_TEXT: &str = "Thanks!";

/// The calls seeding needs from the platform API.
pub trait Backend {
    fn patch_profile(&self, update: &Value) -> Result<()>;
    fn post_feedback(&self, text: &str) -> Result<()>;
}

pub struct BackendClient {
    base_url: String,
    token: String,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: &str, token: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn check(resp: reqwest::blocking::Response, what: &str) -> Result<()> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().unwrap_or_default();
        Err(FairfoundError::Backend(format!("{what} failed ({status}): {body}")))
    }
}

impl Backend for BackendClient {
    fn patch_profile(&self, update: &Value) -> Result<()> {
        let resp = self
            .client
            .patch(self.url(PROFILE_PATH))
            .bearer_auth(&self.token)
            .json(update)
            .send()?;
        Self::check(resp, "profile update")
    }

    fn post_feedback(&self, text: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url(FEEDBACK_PATH))
            .bearer_auth(&self.token)
            .json(&json!({ "text": text }))
            .send()?;
        Self::check(resp, "feedback post")
    }
}

pub fn demo_profile_update() -> Value {
    json!({
        "hourly_rate": 55,
        "portfolio_items": 9,
        "proposal_success_rate": 22,
        "repeat_clients_rate": 30,
        "skills": ["React", "TypeScript", "Node.js", "UI/UX Design"],
    })
}

#[derive(Debug, Deserialize)]
struct SampleReview {
    text: Option<String>,
}

/// Feedback texts from a JSON array of review objects; a missing file yields none.
pub fn load_sample_texts(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        warn!(path = %path.display(), "sample file not found; skipping feedback");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<SampleReview> = serde_json::from_str(&content)?;
    Ok(samples
        .into_iter()
        .map(|sample| sample.text.unwrap_or_else(|| DEFAULT_FEEDBACK_TEXT.to_string()))
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub posted: usize,
    pub failed: usize,
}

/// Patches the profile (fatal on failure), then posts each text, counting failures.
pub fn seed_backend(backend: &dyn Backend, texts: &[String]) -> Result<SeedReport> {
    backend.patch_profile(&demo_profile_update())?;
    info!("profile updated");

    let mut report = SeedReport {
        posted: 0,
        failed: 0,
    };
    for text in texts {
        match backend.post_feedback(text) {
            Ok(()) => {
                debug!(chars = text.len(), "feedback posted");
                report.posted += 1;
            }
            Err(error) => {
                warn!(%error, "feedback post failed");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

pub fn resolve_base_url(config: &FairfoundConfig) -> String {
    match std::env::var("BASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => config.backend_url(),
    }
}

pub fn execute_seed(cmd: &SeedCommand, config: &FairfoundConfig) -> Result<RunStatus> {
    let token = std::env::var("AUTH_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| FairfoundError::MissingCredential("AUTH_TOKEN".to_string()))?;
    let base_url = resolve_base_url(config);
    let client = BackendClient::new(&base_url, token, config.backend_timeout_secs())?;

    let texts = load_sample_texts(&cmd.sample)?;
    let report = seed_backend(&client, &texts)?;

    info!(
        base_url = %base_url,
        posted = report.posted,
        failed = report.failed,
        "seeding complete"
    );
    println!(
        "Seeded profile and {} feedback items ({} failed)",
        report.posted, report.failed
    );
    Ok(RunStatus::degraded_if(report.failed > 0))
}
