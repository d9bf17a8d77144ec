use super::summary::ReviewSummary;

pub fn to_json(summary: &ReviewSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
