use crate::cli::ScoreCommand;
use crate::dataset;
use crate::error::{FairfoundError, Result};
use crate::types::profile::{MilestoneProgress, Profile};
use crate::types::scoring::{PseudoRanking, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

pub const COMPLETENESS_WEIGHT: f64 = 0.25;
pub const SUCCESS_WEIGHT: f64 = 2.0;
pub const SUCCESS_CAP: f64 = 30.0;
pub const PORTFOLIO_WEIGHT: f64 = 3.0;
pub const PORTFOLIO_CAP: f64 = 20.0;
pub const REPEAT_CAP: f64 = 15.0;
pub const MILESTONE_WEIGHT: f64 = 15.0;

/// Weighted 0-100 ranking of a profile plus its milestone progress.
///
/// Each term is capped on its own before summation; the sum is then clamped to
/// `[0, 100]` and rounded half-to-even, matching the backend's formula.
pub fn compute_pseudo_ranking(profile: &Profile, progress: MilestoneProgress) -> PseudoRanking {
    let breakdown = ScoreBreakdown {
        profile_completeness: profile.completeness() * COMPLETENESS_WEIGHT,
        proposal_success: (profile.proposal_success() * SUCCESS_WEIGHT).min(SUCCESS_CAP),
        portfolio: (profile.portfolio() * PORTFOLIO_WEIGHT).min(PORTFOLIO_CAP),
        repeat_clients: profile.repeat_clients().min(REPEAT_CAP),
        milestone_bonus: progress.ratio() * MILESTONE_WEIGHT,
    };
    let score = breakdown.total().clamp(0.0, 100.0).round_ties_even() as u8;
    PseudoRanking { score, breakdown }
}

/// The two milestone columns scoring needs; other columns are ignored.
#[derive(Debug, Deserialize)]
pub struct MilestoneRow {
    pub user_id: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub user_id: Option<String>,
    pub pseudo_ranking: u8,
    pub breakdown: ScoreBreakdown,
    pub milestone_count: i64,
    pub total_milestones: i64,
}

/// Completed and total milestone counts per user.
fn tally_milestones(rows: &[MilestoneRow]) -> HashMap<String, MilestoneProgress> {
    let mut tally: HashMap<String, MilestoneProgress> = HashMap::new();
    for row in rows {
        let entry = tally
            .entry(row.user_id.clone())
            .or_insert_with(|| MilestoneProgress::new(0, 0));
        entry.total += 1;
        if row.completed {
            entry.completed += 1;
        }
    }
    tally
}

fn progress_for(
    profile: &Profile,
    tally: Option<&HashMap<String, MilestoneProgress>>,
    default_total: i64,
) -> MilestoneProgress {
    if let Some(progress) = tally
        .zip(profile.user_id.as_ref())
        .and_then(|(tally, user_id)| tally.get(user_id))
    {
        return *progress;
    }
    MilestoneProgress::new(
        profile.milestone_count.unwrap_or(0),
        profile.total_milestones.unwrap_or(default_total),
    )
}

pub fn score_profiles(
    profiles: &[Profile],
    milestones: Option<&[MilestoneRow]>,
    default_total: i64,
) -> Vec<ScoredProfile> {
    let tally = milestones.map(tally_milestones);
    profiles
        .iter()
        .map(|profile| {
            let progress = progress_for(profile, tally.as_ref(), default_total);
            let ranking = compute_pseudo_ranking(profile, progress);
            debug!(
                user_id = profile.user_id.as_deref().unwrap_or("-"),
                score = ranking.score,
                "scored profile"
            );
            ScoredProfile {
                user_id: profile.user_id.clone(),
                pseudo_ranking: ranking.score,
                breakdown: ranking.breakdown,
                milestone_count: progress.completed(),
                total_milestones: progress.total(),
            }
        })
        .collect()
}

pub fn execute_score(cmd: &ScoreCommand) -> Result<()> {
    if !cmd.profiles.exists() {
        return Err(FairfoundError::PathNotFound(
            cmd.profiles.display().to_string(),
        ));
    }
    let profiles: Vec<Profile> = dataset::read_table(&cmd.profiles)?;
    let milestones: Option<Vec<MilestoneRow>> = match &cmd.milestones {
        Some(path) => {
            if !path.exists() {
                return Err(FairfoundError::PathNotFound(path.display().to_string()));
            }
            Some(dataset::read_table(path)?)
        }
        None => None,
    };

    let scored = score_profiles(&profiles, milestones.as_deref(), cmd.total_milestones);
    dataset::jsonl::write_jsonl(&cmd.out, &scored)?;
    info!(profiles = scored.len(), out = %cmd.out.display(), "scoring complete");
    println!("Scored {} profiles -> {}", scored.len(), cmd.out.display());
    Ok(())
}
