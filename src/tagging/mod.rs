pub mod huggingface;

use crate::cli::TagCommand;
use crate::dataset::jsonl::{read_jsonl, write_jsonl};
use crate::enrich::categories::{detect_categories, merge_categories};
use crate::error::{FairfoundError, Result};
use crate::types::config::{ClassifierKind, FairfoundConfig, TaggingSettings};
use crate::types::review::{Category, Review};
use crate::types::RunStatus;
use tracing::{debug, info, warn};

pub const MAX_CLASSIFIER_CHARS: usize = 1000;

/// Multi-label classifier scoring a text against candidate categories.
pub trait CategoryClassifier {
    fn name(&self) -> &str;
    fn classify(&self, text: &str, candidates: &[Category]) -> Result<Vec<(Category, f64)>>;
}

/// Proposes nothing; keyword rules alone decide.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl CategoryClassifier for NoClassifier {
    fn name(&self) -> &str {
        "none"
    }

    fn classify(&self, _text: &str, _candidates: &[Category]) -> Result<Vec<(Category, f64)>> {
        Ok(Vec::new())
    }
}

pub fn build_classifier(settings: &TaggingSettings) -> Result<Box<dyn CategoryClassifier>> {
    match settings.classifier {
        ClassifierKind::None => Ok(Box::new(NoClassifier)),
        ClassifierKind::Huggingface => {
            let token = std::env::var("HF_API_TOKEN")
                .map_err(|_| FairfoundError::MissingCredential("HF_API_TOKEN".to_string()))?;
            Ok(Box::new(huggingface::HuggingFaceClassifier::new(
                &settings.endpoint,
                &settings.model,
                token,
                settings.timeout_secs,
            )?))
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

pub struct TagOutcome {
    pub review: Review,
    pub classifier_failed: bool,
}

/// Unions existing, keyword and accepted classifier categories, in that order.
pub fn tag_review(
    mut review: Review,
    classifier: &dyn CategoryClassifier,
    threshold: f64,
) -> TagOutcome {
    let keyword = detect_categories(&review.text);
    let mut merged = merge_categories(&review.categories, &keyword);

    let excerpt = truncate_chars(&review.text, MAX_CLASSIFIER_CHARS);
    let classifier_failed = match classifier.classify(excerpt, &Category::ALL) {
        Ok(scored) => {
            let accepted: Vec<Category> = scored
                .into_iter()
                .filter(|(_, confidence)| *confidence >= threshold)
                .map(|(category, _)| category)
                .collect();
            merged = merge_categories(&merged, &accepted);
            false
        }
        Err(error) => {
            warn!(classifier = classifier.name(), %error, "classifier call failed; keeping keyword categories");
            true
        }
    };

    debug!(categories = merged.len(), "tagged review");
    review.categories = merged;
    TagOutcome {
        review,
        classifier_failed,
    }
}

pub fn execute_tag(cmd: &TagCommand, config: &FairfoundConfig) -> Result<RunStatus> {
    if !cmd.input.exists() {
        return Err(FairfoundError::PathNotFound(cmd.input.display().to_string()));
    }
    let settings = config.tagging_settings();
    let threshold = cmd.threshold.unwrap_or(settings.threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(FairfoundError::ConfigParse(
            "--threshold must be between 0.0 and 1.0".to_string(),
        ));
    }
    let classifier = build_classifier(&settings)?;

    let rows: Vec<Review> = read_jsonl(&cmd.input)?;
    let mut failures = 0usize;
    let mut tagged = Vec::with_capacity(rows.len());
    for review in rows {
        let outcome = tag_review(review, classifier.as_ref(), threshold);
        if outcome.classifier_failed {
            failures += 1;
        }
        tagged.push(outcome.review);
    }
    write_jsonl(&cmd.out, &tagged)?;

    info!(
        reviews = tagged.len(),
        classifier = classifier.name(),
        failures,
        "tagging complete"
    );
    println!("Tagged {} reviews -> {}", tagged.len(), cmd.out.display());
    Ok(RunStatus::degraded_if(failures > 0))
}
