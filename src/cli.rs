use crate::report::OutputFormat;
use crate::types::config::ProviderKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fairfound",
    version,
    about = "Freelancer pseudo-ranking and client review enrichment toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding fairfound.toml
    #[arg(long, global = true, default_value = ".")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score sentiment, detect categories and attach suggestions
    Enrich(EnrichCommand),
    /// Add categories from keywords and an optional zero-shot classifier
    Tag(TagCommand),
    /// Recompute rule-based suggestions from labels and categories
    Suggest(SuggestCommand),
    /// Ask a language model for suggestions and a summary per review
    Llm(LlmCommand),
    /// Compute pseudo-rankings for freelancer profiles
    Score(ScoreCommand),
    /// Summarize enriched reviews
    Aggregate(AggregateCommand),
    /// Generate seeded synthetic datasets
    Generate(GenerateCommand),
    /// Push a demo profile and sample feedback to the backend API
    Seed(SeedCommand),
}

#[derive(Args)]
pub struct EnrichCommand {
    #[arg(long = "in", default_value = "data/processed/sentiment_reviews_raw.jsonl")]
    pub input: PathBuf,
    #[arg(long, default_value = "data/processed/sentiment_reviews.jsonl")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct TagCommand {
    #[arg(long = "in", default_value = "data/processed/sentiment_reviews.jsonl")]
    pub input: PathBuf,
    #[arg(long, default_value = "data/processed/sentiment_reviews.jsonl")]
    pub out: PathBuf,
    /// Minimum classifier confidence; overrides [tagging] threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct SuggestCommand {
    #[arg(long = "in", default_value = "data/processed/sentiment_reviews_tagged.jsonl")]
    pub input: PathBuf,
    #[arg(long, default_value = "data/processed/sentiment_reviews_suggested.jsonl")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct LlmCommand {
    #[arg(long = "in", default_value = "data/processed/sentiment_reviews_tagged.jsonl")]
    pub input: PathBuf,
    #[arg(long, default_value = "data/processed/sentiment_reviews_llm.jsonl")]
    pub out: PathBuf,
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Profiles as CSV or JSONL
    #[arg(long, default_value = "data/processed/freelancer_profiles.csv")]
    pub profiles: PathBuf,
    /// Milestone rows (user_id, completed) as CSV or JSONL
    #[arg(long)]
    pub milestones: Option<PathBuf>,
    #[arg(long, default_value_t = 5)]
    pub total_milestones: i64,
    #[arg(long, default_value = "data/processed/pseudo_rankings.jsonl")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct AggregateCommand {
    #[arg(long, default_value = "data/processed/sentiment_reviews.jsonl")]
    pub reviews: PathBuf,
    #[arg(long, default_value = "data/processed/aggregates/aggregates.json")]
    pub out: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct GenerateCommand {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub users: Option<usize>,
    #[arg(long, default_value = "data/processed")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct SeedCommand {
    /// JSON array of sample reviews to post as feedback
    #[arg(long, default_value = "data/processed/samples/sentiment_reviews_sample.json")]
    pub sample: PathBuf,
}
