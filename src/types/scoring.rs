use serde::{Deserialize, Serialize};

/// Weighted contributions behind a pseudo-ranking.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub profile_completeness: f64,
    pub proposal_success: f64,
    pub portfolio: f64,
    pub repeat_clients: f64,
    pub milestone_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.profile_completeness
            + self.proposal_success
            + self.portfolio
            + self.repeat_clients
            + self.milestone_bonus
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PseudoRanking {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}
