pub mod lexicon;

use crate::types::config::{AnalyzerKind, SentimentSettings};
use crate::types::review::Label;
use crate::types::RunStatus;
use lexicon::LexiconScorer;
use std::path::Path;
use tracing::{debug, warn};

pub const POSITIVE_THRESHOLD: f64 = 0.2;
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Compound polarity of free text, in `[-1, 1]`.
pub trait SentimentScorer {
    fn name(&self) -> &str;
    fn polarity(&self, text: &str) -> f64;
}

/// Scores everything as `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    fn name(&self) -> &str {
        "neutral"
    }

    fn polarity(&self, _text: &str) -> f64 {
        0.0
    }
}

pub struct ScorerSetup {
    pub scorer: Box<dyn SentimentScorer>,
    pub status: RunStatus,
}

/// Resolves the configured analyzer once per process.
///
/// A lexicon that cannot be loaded degrades to [`NeutralScorer`]; relative
/// lexicon paths resolve against `root`.
pub fn ensure_scorer(settings: &SentimentSettings, root: &Path) -> ScorerSetup {
    if settings.analyzer == AnalyzerKind::None {
        debug!("sentiment analyzer disabled by configuration");
        return ScorerSetup {
            scorer: Box::new(NeutralScorer),
            status: RunStatus::Complete,
        };
    }

    let Some(lexicon_path) = settings.lexicon_path.as_ref() else {
        return ScorerSetup {
            scorer: Box::new(LexiconScorer::builtin()),
            status: RunStatus::Complete,
        };
    };

    let path = root.join(lexicon_path);
    match LexiconScorer::from_file(&path) {
        Ok(scorer) => {
            debug!(
                path = %path.display(),
                entries = scorer.entry_count(),
                "loaded sentiment lexicon"
            );
            ScorerSetup {
                scorer: Box::new(scorer),
                status: RunStatus::Complete,
            }
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "sentiment lexicon unavailable; scoring every review as neutral"
            );
            ScorerSetup {
                scorer: Box::new(NeutralScorer),
                status: RunStatus::Degraded,
            }
        }
    }
}

pub fn label_from_score(score: f64) -> Label {
    if score >= POSITIVE_THRESHOLD {
        Label::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn thresholds_are_inclusive_of_non_neutral_labels() {
        assert_eq!(label_from_score(0.2), Label::Positive);
        assert_eq!(label_from_score(-0.2), Label::Negative);
        assert_eq!(label_from_score(0.0), Label::Neutral);
        assert_eq!(label_from_score(0.199999), Label::Neutral);
        assert_eq!(label_from_score(-0.199999), Label::Neutral);
        assert_eq!(label_from_score(1.0), Label::Positive);
        assert_eq!(label_from_score(-1.0), Label::Negative);
    }

    #[test]
    fn round_score_keeps_two_decimals() {
        assert_eq!(round_score(0.62489), 0.62);
        assert_eq!(round_score(-0.2963), -0.3);
        assert_eq!(round_score(0.0), 0.0);
    }

    #[test]
    fn disabled_analyzer_is_neutral_but_not_degraded() {
        let setup = ensure_scorer(
            &SentimentSettings {
                analyzer: AnalyzerKind::None,
                lexicon_path: None,
            },
            Path::new("."),
        );
        assert_eq!(setup.scorer.name(), "neutral");
        assert_eq!(setup.scorer.polarity("great work"), 0.0);
        assert_eq!(setup.status, RunStatus::Complete);
    }

    #[test]
    fn missing_lexicon_degrades_to_neutral() {
        let dir = TempDir::new().expect("temp dir should be created");
        let setup = ensure_scorer(
            &SentimentSettings {
                analyzer: AnalyzerKind::Lexicon,
                lexicon_path: Some("absent.txt".to_string()),
            },
            dir.path(),
        );
        assert_eq!(setup.scorer.name(), "neutral");
        assert_eq!(setup.status, RunStatus::Degraded);
    }

    #[test]
    fn default_settings_use_builtin_lexicon() {
        let setup = ensure_scorer(
            &SentimentSettings {
                analyzer: AnalyzerKind::Lexicon,
                lexicon_path: None,
            },
            Path::new("."),
        );
        assert_eq!(setup.scorer.name(), "lexicon");
        assert!(setup.scorer.polarity("great work") > 0.2);
    }
}
