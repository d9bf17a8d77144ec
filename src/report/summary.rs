use crate::types::review::{Category, Label, Review};
use serde::Serialize;

pub const TOP_CATEGORY_LIMIT: usize = 5;

pub const ACTIONABLE_SUGGESTIONS: [&str; 2] = [
    "Provide structured progress updates",
    "Ask for a brief quality score",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub positives: usize,
    pub neutrals: usize,
    pub negatives: usize,
    pub avg_score: f64,
    pub top_categories: Vec<Category>,
    pub actionable_suggestions: Vec<String>,
}

/// Counts labels, averages present scores and ranks categories by frequency.
/// Unlabelled reviews are not counted in any bucket.
pub fn summarize(reviews: &[Review]) -> ReviewSummary {
    let mut positives = 0;
    let mut neutrals = 0;
    let mut negatives = 0;
    let mut score_sum = 0.0;
    let mut score_count = 0usize;
    // first-seen order breaks frequency ties
    let mut frequencies: Vec<(Category, usize)> = Vec::new();

    for review in reviews {
        match review.label {
            Some(Label::Positive) => positives += 1,
            Some(Label::Neutral) => neutrals += 1,
            Some(Label::Negative) => negatives += 1,
            None => {}
        }
        if let Some(score) = review.score {
            score_sum += score;
            score_count += 1;
        }
        for category in &review.categories {
            match frequencies.iter_mut().find(|(seen, _)| seen == category) {
                Some((_, count)) => *count += 1,
                None => frequencies.push((*category, 1)),
            }
        }
    }

    let avg_score = if score_count == 0 {
        0.0
    } else {
        round4(score_sum / score_count as f64)
    };

    // stable sort keeps insertion order among equal counts
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    let top_categories = frequencies
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|(category, _)| category)
        .collect();

    ReviewSummary {
        positives,
        neutrals,
        negatives,
        avg_score,
        top_categories,
        actionable_suggestions: ACTIONABLE_SUGGESTIONS
            .iter()
            .map(|suggestion| suggestion.to_string())
            .collect(),
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
