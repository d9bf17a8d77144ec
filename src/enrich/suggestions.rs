use crate::types::review::{Category, Label};

pub const DEADLINE_SUGGESTION: &str = "Share a timeline upfront and add milestones";
pub const COMMUNICATION_SUGGESTION: &str = "Send structured progress updates twice a week";
pub const FALLBACK_SUGGESTION: &str = "Clarify expectations early and confirm acceptance";
pub const NEUTRAL_SUGGESTION: &str = "Ask for a brief quality score to improve";
pub const POSITIVE_SUGGESTION: &str = "Keep doing structured updates and capture testimonials";

/// Canned suggestions for a label and its categories.
///
/// Negative reviews collect every matching category rule (deadlines first,
/// then communication) and only fall back to the generic message when none
/// matched.
pub fn suggestions_for(label: Label, categories: &[Category]) -> Vec<String> {
    match label {
        Label::Negative => {
            let mut suggestions = Vec::new();
            if categories.contains(&Category::Deadlines) {
                suggestions.push(DEADLINE_SUGGESTION.to_string());
            }
            if categories.contains(&Category::Communication) {
                suggestions.push(COMMUNICATION_SUGGESTION.to_string());
            }
            if suggestions.is_empty() {
                suggestions.push(FALLBACK_SUGGESTION.to_string());
            }
            suggestions
        }
        Label::Neutral => vec![NEUTRAL_SUGGESTION.to_string()],
        Label::Positive => vec![POSITIVE_SUGGESTION.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_with_both_categories_gets_both_suggestions() {
        let suggestions = suggestions_for(
            Label::Negative,
            &[Category::Communication, Category::Deadlines],
        );
        assert_eq!(
            suggestions,
            vec![DEADLINE_SUGGESTION.to_string(), COMMUNICATION_SUGGESTION.to_string()]
        );
        assert!(!suggestions.contains(&FALLBACK_SUGGESTION.to_string()));
    }

    #[test]
    fn negative_with_single_category_gets_one_suggestion() {
        assert_eq!(
            suggestions_for(Label::Negative, &[Category::Communication]),
            vec![COMMUNICATION_SUGGESTION.to_string()]
        );
        assert_eq!(
            suggestions_for(Label::Negative, &[Category::Deadlines, Category::Quality]),
            vec![DEADLINE_SUGGESTION.to_string()]
        );
    }

    #[test]
    fn negative_without_matching_categories_falls_back() {
        assert_eq!(
            suggestions_for(Label::Negative, &[Category::Scope]),
            vec![FALLBACK_SUGGESTION.to_string()]
        );
        assert_eq!(
            suggestions_for(Label::Negative, &[]),
            vec![FALLBACK_SUGGESTION.to_string()]
        );
    }

    #[test]
    fn neutral_and_positive_ignore_categories() {
        assert_eq!(
            suggestions_for(Label::Neutral, &[Category::Deadlines]),
            vec![NEUTRAL_SUGGESTION.to_string()]
        );
        assert_eq!(
            suggestions_for(Label::Positive, &[Category::Communication]),
            vec![POSITIVE_SUGGESTION.to_string()]
        );
    }
}
