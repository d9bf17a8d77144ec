use crate::error::{FairfoundError, Result};
use crate::types::config::FairfoundConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "fairfound.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".fairfound/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/fairfound/config.toml";

/// Merges global, project and local layers; every layer is optional.
pub fn load_config(root: &Path) -> Result<FairfoundConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<FairfoundConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: FairfoundConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| FairfoundError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FairfoundError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{AnalyzerKind, ProviderKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_yield_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.sentiment_settings().analyzer, AnalyzerKind::Lexicon);
        assert_eq!(cfg.llm_settings().provider, ProviderKind::Gemini);
        assert_eq!(cfg.generate_seed(), 42);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"

[backend]
base_url = "https://global.example/api/"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[llm]
model = "gpt-4o"
max_tokens = 200

[generate]
users = 12
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".fairfound")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[generate]
seed = 7
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        let llm = cfg.llm_settings();
        assert_eq!(llm.provider, ProviderKind::Openai);
        assert_eq!(llm.model, "gpt-4o");
        assert_eq!(llm.max_tokens, 200);
        assert_eq!(cfg.backend_url(), "https://global.example/api/");
        assert_eq!(cfg.generate_users(), 12);
        assert_eq!(cfg.generate_seed(), 7);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[tagging]\nthreshold = 1.5\n",
        )
        .expect("config should write");
        let err = load_config_with_global(dir.path(), None).expect_err("threshold is out of range");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[llm]\nprovider = \"bard\"\n")
            .expect("config should write");
        let err = load_config_with_global(dir.path(), None).expect_err("provider is unknown");
        assert!(matches!(err, FairfoundError::ConfigParse(_)));
    }
}
