//! Hosted zero-shot classification over the Hugging Face inference API.

use super::CategoryClassifier;
use crate::error::{FairfoundError, Result};
use crate::types::review::Category;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub struct HuggingFaceClassifier {
    url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl HuggingFaceClassifier {
    pub fn new(endpoint: &str, model: &str, token: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            url: format!("{}/{}", endpoint.trim_end_matches('/'), model),
            token,
            client,
        })
    }
}

impl CategoryClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn classify(&self, text: &str, candidates: &[Category]) -> Result<Vec<(Category, f64)>> {
        let labels: Vec<&str> = candidates.iter().map(|category| category.as_str()).collect();
        let body = json!({
            "inputs": text,
            "parameters": {
                "candidate_labels": labels,
                "multi_label": true,
            },
        });

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;

        let status = resp.status();
        let resp_text = resp.text()?;
        if !status.is_success() {
            return Err(FairfoundError::Provider(format!(
                "zero-shot classifier error ({status}): {resp_text}"
            )));
        }

        let parsed: ZeroShotResponse = serde_json::from_str(&resp_text)?;
        Ok(pair_scores(parsed))
    }
}

/// Zips labels with scores, dropping labels outside the category vocabulary.
fn pair_scores(response: ZeroShotResponse) -> Vec<(Category, f64)> {
    response
        .labels
        .iter()
        .zip(response.scores)
        .filter_map(|(label, score)| Category::parse(label).map(|category| (category, score)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_known_labels_with_scores() {
        let response: ZeroShotResponse = serde_json::from_str(
            r#"{"sequence":"x","labels":["deadlines","pricing","quality"],"scores":[0.9,0.5,0.1]}"#,
        )
        .expect("response should parse");
        assert_eq!(
            pair_scores(response),
            vec![(Category::Deadlines, 0.9), (Category::Quality, 0.1)]
        );
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let classifier = HuggingFaceClassifier::new(
            "https://api-inference.huggingface.co/models/",
            "facebook/bart-large-mnli",
            "token".to_string(),
            5,
        )
        .expect("client should build");
        assert_eq!(
            classifier.url,
            "https://api-inference.huggingface.co/models/facebook/bart-large-mnli"
        );
    }
}
