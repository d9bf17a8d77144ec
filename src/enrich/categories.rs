use crate::types::review::Category;

/// Keyword triggers in evaluation order. Matching is a lowercase substring test.
pub const KEYWORD_RULES: [(Category, &[&str]); 5] = [
    (Category::Communication, &["communicat", "responsive", "reply"]),
    (Category::Quality, &["quality", "polish", "clean"]),
    (Category::Deadlines, &["deadline", "time", "late", "timely"]),
    (Category::Scope, &["scope", "requirement", "brief"]),
    (Category::Documentation, &["doc", "readme"]),
];

pub fn detect_categories(text: &str) -> Vec<Category> {
    let lowered = text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .collect()
}

/// Union keeping first-occurrence order.
pub fn merge_categories(existing: &[Category], detected: &[Category]) -> Vec<Category> {
    let mut merged = Vec::with_capacity(existing.len() + detected.len());
    for category in existing.iter().chain(detected) {
        if !merged.contains(category) {
            merged.push(*category);
        }
    }
    merged
}
