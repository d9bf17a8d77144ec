//! Chat-completions generator for OpenAI and Azure OpenAI deployments.

use super::{GenerationParams, TextGenerator};
use crate::error::{FairfoundError, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const AZURE_API_VERSION: &str = "2023-05-15";

#[derive(Debug, Clone, PartialEq)]
enum Auth {
    Bearer(String),
    ApiKey(String),
}

pub struct OpenAiGenerator {
    name: &'static str,
    url: String,
    auth: Auth,
    params: GenerationParams,
    client: Client,
}

impl OpenAiGenerator {
    pub fn openai(api_key: String, params: GenerationParams) -> Result<Self> {
        Self::build("openai", OPENAI_URL.to_string(), Auth::Bearer(api_key), params)
    }

    /// Azure routes by deployment name, which is taken from the model setting.
    pub fn azure(api_key: String, endpoint: &str, params: GenerationParams) -> Result<Self> {
        let url = azure_url(endpoint, &params.model);
        Self::build("azure", url, Auth::ApiKey(api_key), params)
    }

    fn build(name: &'static str, url: String, auth: Auth, params: GenerationParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;
        Ok(Self {
            name,
            url,
            auth,
            params,
            client,
        })
    }

    fn body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.params.max_tokens,
            "temperature": self.params.temperature,
        });
        if matches!(self.auth, Auth::Bearer(_)) {
            body["model"] = Value::from(self.params.model.clone());
        }
        body
    }
}

fn azure_url(endpoint: &str, deployment: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        endpoint.trim_end_matches('/'),
        deployment,
        AZURE_API_VERSION
    )
}

fn first_choice(resp_json: &Value) -> Result<String> {
    resp_json["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| FairfoundError::Provider("response has no message content".to_string()))
}

impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        self.name
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let request = self.client.post(&self.url).json(&self.body(prompt));
        let request = match &self.auth {
            Auth::Bearer(key) => request.bearer_auth(key),
            Auth::ApiKey(key) => request.header("api-key", key),
        };
        let resp = request.send()?;

        let status = resp.status();
        let resp_text = resp.text()?;
        if !status.is_success() {
            return Err(FairfoundError::Provider(format!(
                "{} API error ({status}): {resp_text}",
                self.name
            )));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;
        first_choice(&resp_json)
    }
}
