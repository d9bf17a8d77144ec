pub mod json;
pub mod md;
pub mod summary;

use crate::cli::AggregateCommand;
use crate::dataset::ensure_parent;
use crate::dataset::jsonl::read_jsonl;
use crate::error::{FairfoundError, Result};
use crate::types::review::Review;
use summary::ReviewSummary;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(summary: &ReviewSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(FairfoundError::Json),
        OutputFormat::Md => Ok(md::to_markdown(summary)),
    }
}

pub fn execute_aggregate(cmd: &AggregateCommand) -> Result<()> {
    if !cmd.reviews.exists() {
        return Err(FairfoundError::PathNotFound(cmd.reviews.display().to_string()));
    }
    let reviews: Vec<Review> = read_jsonl(&cmd.reviews)?;
    let summary = summary::summarize(&reviews);
    let rendered = render(&summary, cmd.format)?;

    ensure_parent(&cmd.out)?;
    std::fs::write(&cmd.out, rendered)?;

    info!(
        reviews = reviews.len(),
        positives = summary.positives,
        negatives = summary.negatives,
        "aggregation complete"
    );
    println!("Wrote aggregates -> {}", cmd.out.display());
    Ok(())
}
