use crate::error::FairfoundError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FairfoundConfig {
    pub sentiment: Option<SentimentConfig>,
    pub tagging: Option<TaggingConfig>,
    pub llm: Option<LlmConfig>,
    pub backend: Option<BackendConfig>,
    pub generate: Option<GenerateConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Lexicon,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    pub analyzer: Option<AnalyzerKind>,
    pub lexicon_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    None,
    Huggingface,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaggingConfig {
    pub classifier: Option<ClassifierKind>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub threshold: Option<f64>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Openai,
    Azure,
    Gemini,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    pub seed: Option<u64>,
    pub users: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentSettings {
    pub analyzer: AnalyzerKind,
    pub lexicon_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggingSettings {
    pub classifier: ClassifierKind,
    pub model: String,
    pub endpoint: String,
    pub threshold: f64,
    pub timeout_secs: u64,
}

impl Default for TaggingSettings {
    fn default() -> Self {
        Self {
            classifier: ClassifierKind::None,
            model: "facebook/bart-large-mnli".to_string(),
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            threshold: 0.4,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub provider: ProviderKind,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: "gemini-pro".to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_USERS: usize = 50;

impl FairfoundConfig {
    pub fn sentiment_settings(&self) -> SentimentSettings {
        match &self.sentiment {
            Some(sentiment) => SentimentSettings {
                analyzer: sentiment.analyzer.unwrap_or(AnalyzerKind::Lexicon),
                lexicon_path: sentiment.lexicon_path.clone(),
            },
            None => SentimentSettings {
                analyzer: AnalyzerKind::Lexicon,
                lexicon_path: None,
            },
        }
    }

    pub fn tagging_settings(&self) -> TaggingSettings {
        let defaults = TaggingSettings::default();
        match &self.tagging {
            Some(tagging) => TaggingSettings {
                classifier: tagging.classifier.unwrap_or(defaults.classifier),
                model: tagging.model.clone().unwrap_or(defaults.model),
                endpoint: tagging.endpoint.clone().unwrap_or(defaults.endpoint),
                threshold: tagging.threshold.unwrap_or(defaults.threshold),
                timeout_secs: tagging.timeout_secs.unwrap_or(defaults.timeout_secs),
            },
            None => defaults,
        }
    }

    pub fn llm_settings(&self) -> LlmSettings {
        let defaults = LlmSettings::default();
        match &self.llm {
            Some(llm) => LlmSettings {
                provider: llm.provider.unwrap_or(defaults.provider),
                model: llm.model.clone().unwrap_or(defaults.model),
                max_tokens: llm.max_tokens.unwrap_or(defaults.max_tokens),
                temperature: llm.temperature.unwrap_or(defaults.temperature),
                timeout_secs: llm.timeout_secs.unwrap_or(defaults.timeout_secs),
            },
            None => defaults,
        }
    }

    pub fn backend_url(&self) -> String {
        self.backend
            .as_ref()
            .and_then(|backend| backend.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    pub fn backend_timeout_secs(&self) -> u64 {
        self.backend
            .as_ref()
            .and_then(|backend| backend.timeout_secs)
            .unwrap_or(30)
    }

    pub fn generate_seed(&self) -> u64 {
        self.generate
            .as_ref()
            .and_then(|generate| generate.seed)
            .unwrap_or(DEFAULT_SEED)
    }

    pub fn generate_users(&self) -> usize {
        self.generate
            .as_ref()
            .and_then(|generate| generate.users)
            .unwrap_or(DEFAULT_USERS)
    }

    pub fn validate(&self) -> Result<(), FairfoundError> {
        if let Some(sentiment) = &self.sentiment {
            if let Some(path) = &sentiment.lexicon_path {
                if path.trim().is_empty() {
                    return Err(FairfoundError::ConfigParse(
                        "sentiment.lexicon_path must not be empty".to_string(),
                    ));
                }
            }
        }

        if let Some(tagging) = &self.tagging {
            if let Some(threshold) = tagging.threshold {
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(FairfoundError::ConfigParse(
                        "tagging.threshold must be between 0.0 and 1.0".to_string(),
                    ));
                }
            }
            if tagging.timeout_secs == Some(0) {
                return Err(FairfoundError::ConfigParse(
                    "tagging.timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(llm) = &self.llm {
            if let Some(temperature) = llm.temperature {
                if !(0.0..=2.0).contains(&temperature) {
                    return Err(FairfoundError::ConfigParse(
                        "llm.temperature must be between 0.0 and 2.0".to_string(),
                    ));
                }
            }
            if llm.max_tokens == Some(0) {
                return Err(FairfoundError::ConfigParse(
                    "llm.max_tokens must be greater than 0".to_string(),
                ));
            }
            if llm.timeout_secs == Some(0) {
                return Err(FairfoundError::ConfigParse(
                    "llm.timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(backend) = &self.backend {
            if let Some(base_url) = &backend.base_url {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(FairfoundError::ConfigParse(format!(
                        "backend.base_url must be an http(s) URL: {base_url}"
                    )));
                }
            }
            if backend.timeout_secs == Some(0) {
                return Err(FairfoundError::ConfigParse(
                    "backend.timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(generate) = &self.generate {
            if generate.users == Some(0) {
                return Err(FairfoundError::ConfigParse(
                    "generate.users must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: FairfoundConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.sentiment_settings().analyzer, AnalyzerKind::Lexicon);
        assert_eq!(cfg.tagging_settings(), TaggingSettings::default());
        assert_eq!(cfg.llm_settings(), LlmSettings::default());
        assert_eq!(cfg.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(cfg.generate_seed(), 42);
        assert_eq!(cfg.generate_users(), 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[sentiment]
analyzer = "none"
lexicon_path = "vader_lexicon.txt"

[tagging]
classifier = "huggingface"
threshold = 0.55

[llm]
provider = "openai"
model = "gpt-4o-mini"
max_tokens = 200
temperature = 0.2

[backend]
base_url = "https://api.example.com/api/"

[generate]
seed = 7
users = 12
"#;
        let cfg: FairfoundConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.sentiment_settings().analyzer, AnalyzerKind::None);
        assert_eq!(
            cfg.sentiment_settings().lexicon_path.as_deref(),
            Some("vader_lexicon.txt")
        );
        let tagging = cfg.tagging_settings();
        assert_eq!(tagging.classifier, ClassifierKind::Huggingface);
        assert_eq!(tagging.threshold, 0.55);
        assert_eq!(tagging.model, "facebook/bart-large-mnli");
        let llm = cfg.llm_settings();
        assert_eq!(llm.provider, ProviderKind::Openai);
        assert_eq!(llm.model, "gpt-4o-mini");
        assert_eq!(llm.max_tokens, 200);
        assert_eq!(cfg.backend_url(), "https://api.example.com/api/");
        assert_eq!(cfg.generate_seed(), 7);
        assert_eq!(cfg.generate_users(), 12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let cfg: FairfoundConfig = toml::from_str(
            r#"
[tagging]
threshold = 1.5
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("tagging.threshold"));
    }

    #[test]
    fn validate_accepts_threshold_boundaries() {
        for threshold in ["0.0", "1.0"] {
            let cfg: FairfoundConfig =
                toml::from_str(&format!("[tagging]\nthreshold = {threshold}\n"))
                    .expect("config should parse");
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn validate_rejects_zero_users_and_tokens() {
        let cfg: FairfoundConfig = toml::from_str("[generate]\nusers = 0\n").expect("parse");
        assert!(cfg.validate().is_err());

        let cfg: FairfoundConfig = toml::from_str("[llm]\nmax_tokens = 0\n").expect("parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("llm.max_tokens"));
    }

    #[test]
    fn validate_rejects_non_http_backend() {
        let cfg: FairfoundConfig =
            toml::from_str("[backend]\nbase_url = \"ftp://example.com\"\n").expect("parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("backend.base_url"));
    }

    #[test]
    fn unknown_provider_fails_to_parse() {
        let result: Result<FairfoundConfig, _> = toml::from_str("[llm]\nprovider = \"bard\"\n");
        assert!(result.is_err());
    }
}
