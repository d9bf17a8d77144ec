use thiserror::Error;

#[derive(Error, Debug)]
pub enum FairfoundError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("malformed record at {path}:{line}: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FairfoundError {
    /// Bad input data or configuration, as opposed to an environment failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse(_) | Self::MalformedRecord { .. } | Self::Toml(_) | Self::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FairfoundError>;
