pub mod gemini;
pub mod openai;
pub mod prompt;

use crate::cli::LlmCommand;
use crate::dataset::jsonl::{read_jsonl, write_jsonl};
use crate::error::{FairfoundError, Result};
use crate::types::config::{FairfoundConfig, LlmSettings, ProviderKind};
use crate::types::review::Review;
use crate::types::RunStatus;
use tracing::{debug, info, warn};

/// A text-completion backend: prompt in, text out.
pub trait TextGenerator {
    fn name(&self) -> &str;
    fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl From<&LlmSettings> for GenerationParams {
    fn from(settings: &LlmSettings) -> Self {
        Self {
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: settings.timeout_secs,
        }
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| FairfoundError::MissingCredential(name.to_string()))
}

pub fn build_generator(
    provider: ProviderKind,
    params: GenerationParams,
) -> Result<Box<dyn TextGenerator>> {
    match provider {
        ProviderKind::Openai => Ok(Box::new(openai::OpenAiGenerator::openai(
            require_env("OPENAI_API_KEY")?,
            params,
        )?)),
        ProviderKind::Azure => Ok(Box::new(openai::OpenAiGenerator::azure(
            require_env("AZURE_OPENAI_API_KEY")?,
            &require_env("AZURE_OPENAI_ENDPOINT")?,
            params,
        )?)),
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiGenerator::new(
            require_env("GOOGLE_API_KEY")?,
            params,
        )?)),
    }
}

/// Fills `llm_suggestions` and `llm_summary`; a failed call is recorded on the
/// review instead of aborting. Returns whether the call failed.
pub fn annotate_review(review: &mut Review, generator: &dyn TextGenerator) -> bool {
    let request = prompt::build_prompt(review);
    match generator.generate(&request) {
        Ok(reply) => {
            let parsed = prompt::parse_reply(&reply);
            debug!(suggestions = parsed.suggestions.len(), "llm reply parsed");
            review.llm_suggestions = Some(parsed.suggestions);
            review.llm_summary = Some(parsed.summary);
            false
        }
        Err(error) => {
            warn!(provider = generator.name(), %error, "llm call failed");
            review.llm_suggestions = Some(Vec::new());
            review.llm_summary = Some(format!("LLM error: {error}"));
            true
        }
    }
}

fn resolve_params(cmd: &LlmCommand, settings: &LlmSettings) -> GenerationParams {
    let mut params = GenerationParams::from(settings);
    if let Some(model) = &cmd.model {
        params.model = model.clone();
    } else if let Ok(model) = std::env::var("GOOGLE_MODEL_ID") {
        if !model.trim().is_empty() {
            params.model = model;
        }
    }
    params
}

pub fn execute_llm(cmd: &LlmCommand, config: &FairfoundConfig) -> Result<RunStatus> {
    if !cmd.input.exists() {
        return Err(FairfoundError::PathNotFound(cmd.input.display().to_string()));
    }
    let settings = config.llm_settings();
    let provider = cmd.provider.unwrap_or(settings.provider);
    let params = resolve_params(cmd, &settings);
    let generator = build_generator(provider, params)?;

    let mut rows: Vec<Review> = read_jsonl(&cmd.input)?;
    let mut failures = 0usize;
    for review in &mut rows {
        if annotate_review(review, generator.as_ref()) {
            failures += 1;
        }
    }
    write_jsonl(&cmd.out, &rows)?;

    info!(
        reviews = rows.len(),
        provider = generator.name(),
        failures,
        "llm suggestions complete"
    );
    println!(
        "LLM suggestions and summaries written to {}",
        cmd.out.display()
    );
    Ok(RunStatus::degraded_if(failures > 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::review::{Category, Label};
    use std::cell::RefCell;

    struct CannedGenerator {
        reply: String,
        prompts: RefCell<Vec<String>>,
    }

    impl TextGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct DownGenerator;

    impl TextGenerator for DownGenerator {
        fn name(&self) -> &str {
            "down"
        }

        fn generate(&self, _prompt: &str) -> Result<String> {
            Err(FairfoundError::Provider("503 service unavailable".to_string()))
        }
    }

    #[test]
    fn successful_reply_populates_llm_fields() {
        let generator = CannedGenerator {
            reply: "Nice progress.\n- Share a weekly status\n- Confirm the brief".to_string(),
            prompts: RefCell::new(Vec::new()),
        };
        let mut review = Review::new("Work was late.");
        review.label = Some(Label::Negative);
        review.categories = vec![Category::Deadlines];

        let failed = annotate_review(&mut review, &generator);
        assert!(!failed);
        assert_eq!(review.llm_summary.as_deref(), Some("Nice progress."));
        assert_eq!(
            review.llm_suggestions,
            Some(vec![
                "Share a weekly status".to_string(),
                "Confirm the brief".to_string()
            ])
        );
        assert!(generator.prompts.borrow()[0].contains("Categories: deadlines"));
    }

    #[test]
    fn failed_call_is_annotated_not_raised() {
        let mut review = Review::new("anything");
        let failed = annotate_review(&mut review, &DownGenerator);
        assert!(failed);
        assert_eq!(review.llm_suggestions, Some(Vec::new()));
        assert_eq!(
            review.llm_summary.as_deref(),
            Some("LLM error: provider error: 503 service unavailable")
        );
    }

    #[test]
    fn generation_params_follow_settings() {
        let params = GenerationParams::from(&LlmSettings::default());
        assert_eq!(params.model, "gemini-pro");
        assert_eq!(params.max_tokens, 300);
        assert_eq!(params.temperature, 0.7);
    }
}
