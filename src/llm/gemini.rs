use super::{GenerationParams, TextGenerator};
use crate::error::{FairfoundError, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiGenerator {
    api_key: String,
    params: GenerationParams,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(api_key: String, params: GenerationParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;
        Ok(Self {
            api_key,
            params,
            client,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.params.model, self.api_key
        )
    }

    fn body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "maxOutputTokens": self.params.max_tokens,
                "temperature": self.params.temperature,
            },
        })
    }
}

fn first_candidate(resp_json: &Value) -> Result<String> {
    resp_json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| FairfoundError::Provider("response has no candidate text".to_string()))
}

impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let resp = self.client.post(self.url()).json(&self.body(prompt)).send()?;

        let status = resp.status();
        let resp_text = resp.text()?;
        if !status.is_success() {
            return Err(FairfoundError::Provider(format!(
                "gemini API error ({status}): {resp_text}"
            )));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        first_candidate(&resp_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> GeminiGenerator {
        GeminiGenerator::new(
            "secret".to_string(),
            GenerationParams {
                model: "gemini-pro".to_string(),
                max_tokens: 300,
                temperature: 0.7,
                timeout_secs: 5,
            },
        )
        .expect("client should build")
    }

    #[test]
    fn url_names_model_and_key() {
        assert_eq!(
            generator().url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent?key=secret"
        );
    }

    #[test]
    fn body_carries_prompt_and_limits() {
        let body = generator().body("hi");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 300);
    }

    #[test]
    fn candidate_text_is_extracted() {
        let resp = json!({"candidates": [{"content": {"parts": [{"text": "Great work\n- a"}]}}]});
        assert_eq!(
            first_candidate(&resp).expect("text should exist"),
            "Great work\n- a"
        );
        assert!(first_candidate(&json!({})).is_err());
    }
}
