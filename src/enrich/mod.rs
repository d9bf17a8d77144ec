pub mod categories;
pub mod suggestions;

use crate::cli::{EnrichCommand, SuggestCommand};
use crate::dataset::jsonl::{read_jsonl, write_jsonl};
use crate::error::{FairfoundError, Result};
use crate::sentiment::{self, label_from_score, round_score, SentimentScorer};
use crate::types::config::FairfoundConfig;
use crate::types::review::{Category, Label, Review};
use crate::types::RunStatus;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub score: f64,
    pub label: Label,
    pub categories: Vec<Category>,
    pub suggestions: Vec<String>,
}

pub struct Enricher {
    scorer: Box<dyn SentimentScorer>,
}

impl Enricher {
    pub fn new(scorer: Box<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn enrich_text(&self, text: &str) -> Enrichment {
        let raw = self.scorer.polarity(text);
        let label = label_from_score(raw);
        let categories = categories::detect_categories(text);
        let suggestions = suggestions::suggestions_for(label, &categories);
        Enrichment {
            score: round_score(raw),
            label,
            categories,
            suggestions,
        }
    }

    /// Overwrites score, label, categories and suggestions; other fields are untouched.
    pub fn enrich_review(&self, mut review: Review) -> Review {
        let enrichment = self.enrich_text(&review.text);
        debug!(
            label = %enrichment.label,
            score = enrichment.score,
            categories = enrichment.categories.len(),
            "enriched review"
        );
        review.score = Some(enrichment.score);
        review.label = Some(enrichment.label);
        review.categories = enrichment.categories;
        review.suggestions = enrichment.suggestions;
        review
    }
}

pub fn execute_enrich(cmd: &EnrichCommand, config: &FairfoundConfig, root: &Path) -> Result<RunStatus> {
    if !cmd.input.exists() {
        return Err(FairfoundError::PathNotFound(cmd.input.display().to_string()));
    }
    let setup = sentiment::ensure_scorer(&config.sentiment_settings(), root);
    let enricher = Enricher::new(setup.scorer);

    let rows: Vec<Review> = read_jsonl(&cmd.input)?;
    let enriched: Vec<Review> = rows
        .into_iter()
        .map(|review| enricher.enrich_review(review))
        .collect();
    write_jsonl(&cmd.out, &enriched)?;

    info!(reviews = enriched.len(), out = %cmd.out.display(), "enrichment complete");
    println!("Enriched {} reviews -> {}", enriched.len(), cmd.out.display());
    Ok(setup.status)
}

/// Recomputes suggestions from each review's stored label and categories.
pub fn execute_suggest(cmd: &SuggestCommand) -> Result<()> {
    if !cmd.input.exists() {
        return Err(FairfoundError::PathNotFound(cmd.input.display().to_string()));
    }
    let mut rows: Vec<Review> = read_jsonl(&cmd.input)?;
    for review in &mut rows {
        let label = review.label.unwrap_or(Label::Neutral);
        review.suggestions = suggestions::suggestions_for(label, &review.categories);
    }
    write_jsonl(&cmd.out, &rows)?;

    info!(reviews = rows.len(), out = %cmd.out.display(), "suggestions complete");
    println!("Suggestions written to {}", cmd.out.display());
    Ok(())
}
