pub mod config;
pub mod profile;
pub mod review;
pub mod scoring;

/// How a batch command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    Degraded,
}

impl RunStatus {
    pub fn degraded_if(condition: bool) -> Self {
        if condition {
            Self::Degraded
        } else {
            Self::Complete
        }
    }
}
