use crate::types::review::Review;

pub const MAX_SUGGESTIONS: usize = 2;

pub fn build_prompt(review: &Review) -> String {
    let categories = review
        .categories
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let label = review.label.map(|label| label.as_str()).unwrap_or("");
    format!(
        "\nGiven the following review text and categories, generate 2 actionable suggestions \
         (max 200 chars each) and a friendly summary for the freelancer.\n\
         Text: {}\nCategories: {}\nLabel: {}\nSuggestions:\n",
        review.text, categories, label
    )
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedReply {
    pub suggestions: Vec<String>,
    pub summary: String,
}

/// Bullet (`-`) or `1.` lines become suggestions; the first other non-empty
/// line is the summary.
pub fn parse_reply(reply: &str) -> ParsedReply {
    let mut parsed = ParsedReply::default();
    for line in reply.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('-') || trimmed.starts_with("1.") {
            let cleaned = line.trim_matches(|c: char| c == '-' || c == ' ').trim();
            parsed.suggestions.push(cleaned.to_string());
        } else if parsed.summary.is_empty() && !trimmed.is_empty() {
            parsed.summary = trimmed.to_string();
        }
    }
    parsed.suggestions.truncate(MAX_SUGGESTIONS);
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::review::{Category, Label};

    #[test]
    fn prompt_lists_text_categories_and_label() {
        let mut review = Review::new("Late again.");
        review.categories = vec![Category::Deadlines, Category::Communication];
        review.label = Some(Label::Negative);

        let prompt = build_prompt(&review);
        assert!(prompt.contains("generate 2 actionable suggestions (max 200 chars each)"));
        assert!(prompt.contains("Text: Late again.\n"));
        assert!(prompt.contains("Categories: deadlines, communication\n"));
        assert!(prompt.contains("Label: negative\n"));
        assert!(prompt.ends_with("Suggestions:\n"));
    }

    #[test]
    fn prompt_tolerates_missing_label() {
        let prompt = build_prompt(&Review::new("ok"));
        assert!(prompt.contains("Categories: \nLabel: \n"));
    }

    #[test]
    fn reply_is_split_into_suggestions_and_summary() {
        let reply = "You're doing well overall!\n\n- Share weekly updates\n- Confirm scope early -\n- A third idea\nAnother line";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, "You're doing well overall!");
        assert_eq!(
            parsed.suggestions,
            vec!["Share weekly updates".to_string(), "Confirm scope early".to_string()]
        );
    }

    #[test]
    fn numbered_first_item_counts_as_suggestion() {
        let parsed = parse_reply("1. Post a timeline\n2. Ask for feedback\nKeep it up");
        assert_eq!(parsed.suggestions, vec!["1. Post a timeline".to_string()]);
        assert_eq!(parsed.summary, "2. Ask for feedback");
    }

    #[test]
    fn empty_reply_yields_nothing() {
        assert_eq!(parse_reply(""), ParsedReply::default());
    }
}
