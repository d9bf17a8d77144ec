use super::summary::ReviewSummary;

pub fn to_markdown(summary: &ReviewSummary) -> String {
    let mut output = String::new();
    output.push_str("# Review Summary\n\n");
    output.push_str(&format!(
        "- positives: {}\n- neutrals: {}\n- negatives: {}\n- average score: {:.4}\n\n",
        summary.positives, summary.neutrals, summary.negatives, summary.avg_score
    ));

    output.push_str("## Top Categories\n\n");
    if summary.top_categories.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for category in &summary.top_categories {
            output.push_str(&format!("- {category}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Actionable Suggestions\n\n");
    for suggestion in &summary.actionable_suggestions {
        output.push_str(&format!("- {suggestion}\n"));
    }

    output
}
