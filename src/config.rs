use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use goals_core::app::AppOptions;
use goals_core::types::DEFAULT_PLACEHOLDER;
use goals_core::CommitPolicy;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub clear_draft_on_commit: bool,
    pub reject_empty: bool,
    pub placeholder: String,
    pub title: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let options = AppOptions::default();
        Self {
            clear_draft_on_commit: false,
            reject_empty: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            title: options.title,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load from an explicit path (must exist) or the default location
    /// (silently falls back to defaults when absent).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            policy: CommitPolicy {
                clear_draft_on_commit: self.clear_draft_on_commit,
                reject_empty: self.reject_empty,
            },
            placeholder: self.placeholder.clone(),
            title: self.title.clone(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(Path::new(&home).join(".config/goal-list/config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config(r#"{ "reject_empty": true }"#);
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.reject_empty);
        assert!(!config.clear_draft_on_commit);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn options_carry_policy_and_labels() {
        let file = write_config(
            r#"{ "clear_draft_on_commit": true, "title": "Sprint", "placeholder": "Next step" }"#,
        );
        let options = Config::load(Some(file.path())).unwrap().app_options();
        assert!(options.policy.clear_draft_on_commit);
        assert!(!options.policy.reject_empty);
        assert_eq!(options.title, "Sprint");
        assert_eq!(options.placeholder, "Next step");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config(r#"{ "persist": true }"#);
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config"));
    }

    #[test]
    fn defaults_match_permissive_store() {
        let options = Config::default().app_options();
        assert_eq!(options.policy, CommitPolicy::default());
        assert_eq!(options.title, AppOptions::default().title);
    }
}
