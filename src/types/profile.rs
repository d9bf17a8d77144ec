use serde::{Deserialize, Serialize};

/// Profile snapshot consumed by the pseudo-ranking formula.
///
/// Every numeric field is optional on the wire; absent or `null` reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub profile_completeness: Option<f64>,
    #[serde(default)]
    pub proposal_success_rate: Option<f64>,
    #[serde(default)]
    pub portfolio_items: Option<f64>,
    #[serde(default)]
    pub repeat_clients_rate: Option<f64>,
    #[serde(default)]
    pub milestone_count: Option<i64>,
    #[serde(default)]
    pub total_milestones: Option<i64>,
}

impl Profile {
    pub fn completeness(&self) -> f64 {
        self.profile_completeness.unwrap_or(0.0)
    }

    pub fn proposal_success(&self) -> f64 {
        self.proposal_success_rate.unwrap_or(0.0)
    }

    pub fn portfolio(&self) -> f64 {
        self.portfolio_items.unwrap_or(0.0)
    }

    pub fn repeat_clients(&self) -> f64 {
        self.repeat_clients_rate.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneProgress {
    pub completed: i64,
    pub total: i64,
}

impl MilestoneProgress {
    pub fn new(completed: i64, total: i64) -> Self {
        Self { completed, total }
    }

    /// Denominator coerced to at least one.
    pub fn total(&self) -> i64 {
        self.total.max(1)
    }

    /// Completed count clamped into `[0, total]`.
    pub fn completed(&self) -> i64 {
        self.completed.clamp(0, self.total())
    }

    pub fn ratio(&self) -> f64 {
        self.completed() as f64 / self.total() as f64
    }
}

/// A roadmap milestone row, as produced by `generate`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Milestone {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub estimated_effort: String,
    pub order: u32,
    pub completed: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_read_as_zero() {
        let profile: Profile =
            serde_json::from_str(r#"{"profile_completeness": null, "portfolio_items": 4}"#)
                .expect("profile should parse");
        assert_eq!(profile.completeness(), 0.0);
        assert_eq!(profile.proposal_success(), 0.0);
        assert_eq!(profile.portfolio(), 4.0);
        assert_eq!(profile.repeat_clients(), 0.0);
        assert!(profile.user_id.is_none());
    }

    #[test]
    fn progress_coerces_denominator_and_clamps_count() {
        let progress = MilestoneProgress::new(3, 0);
        assert_eq!(progress.total(), 1);
        assert_eq!(progress.completed(), 1);
        assert_eq!(progress.ratio(), 1.0);

        let progress = MilestoneProgress::new(-2, 5);
        assert_eq!(progress.completed(), 0);
        assert_eq!(progress.ratio(), 0.0);

        let progress = MilestoneProgress::new(9, 5);
        assert_eq!(progress.ratio(), 1.0);
    }
}
