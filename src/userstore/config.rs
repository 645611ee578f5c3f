use crate::error::{Result, UserStoreError};
use crate::validation::{EmailCheck, Validator, DEFAULT_MIN_AGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Store behaviour that may vary between deployments, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Strictness of the email check (`"strict"` or `"lenient"`)
    #[serde(default)]
    pub email_check: EmailCheck,

    /// Lowest admissible age
    #[serde(default = "default_min_age")]
    pub min_age: i64,

    /// Pretty-print the array when the store file is rewritten
    #[serde(default)]
    pub pretty: bool,
}

fn default_min_age() -> i64 {
    DEFAULT_MIN_AGE
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            email_check: EmailCheck::default(),
            min_age: DEFAULT_MIN_AGE,
            pretty: false,
        }
    }
}

impl StoreConfig {
    /// Load config from the given file. A missing file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| UserStoreError::file(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| UserStoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Config from the given file, or the defaults when no file was named
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.email_check, self.min_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.email_check, EmailCheck::Strict);
        assert_eq!(config.min_age, 6);
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let err = StoreConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, UserStoreError::File { .. }));

        let err = StoreConfig::load_or_default(Some(dir.path().join("missing.json").as_path())).unwrap_err();
        assert!(matches!(err, UserStoreError::File { .. }));
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        let config = StoreConfig::load_or_default(None).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"email_check":"lenient"}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.email_check, EmailCheck::Lenient);
        assert_eq!(config.min_age, DEFAULT_MIN_AGE);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"email_check":"sometimes"}"#).unwrap();

        let err = StoreConfig::load(&path).unwrap_err();
        assert!(matches!(err, UserStoreError::Config(_)));
    }

    #[test]
    fn test_validator_follows_config() {
        let config = StoreConfig {
            email_check: EmailCheck::Strict,
            min_age: 21,
            pretty: false,
        };
        assert_eq!(config.validator(), Validator::new(EmailCheck::Strict, 21));
    }
}
