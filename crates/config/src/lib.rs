//! Startup configuration for Silica.
//!
//! A small YAML file, every key optional. Values here are raw: the app
//! validates things like the role name when it resolves its settings.
//!
//! ```yaml
//! clinic_name: Silica
//! tagline: Next-Gen Health
//! clinician: Dr. Julian Smith
//! splash_delay_ms: 2000
//! default_role: doctor
//! mouse: true
//! log_filter: info
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_FILE_NAME: &str = "silica.yaml";

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    pub clinic_name: String,
    pub tagline: String,
    /// Name shown in the dashboard sidebar.
    pub clinician: String,
    pub splash_delay_ms: u64,
    /// Role pre-selected on first login.
    pub default_role: String,
    pub mouse: bool,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: "Silica".into(),
            tagline: "Next-Gen Health".into(),
            clinician: "Dr. Julian Smith".into(),
            splash_delay_ms: 2000,
            default_role: "doctor".into(),
            mouse: true,
            log_filter: "info".into(),
        }
    }
}

impl ClinicConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load an explicit file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Load `path` if given, else `silica.yaml` in `dir` if present,
    /// else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        assert_eq!(ClinicConfig::from_yaml("").unwrap(), ClinicConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = ClinicConfig::from_yaml("splash_delay_ms: 500\ndefault_role: nurse\n").unwrap();
        assert_eq!(config.splash_delay_ms, 500);
        assert_eq!(config.default_role, "nurse");
        assert_eq!(config.clinic_name, "Silica");
        assert!(config.mouse);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = ClinicConfig::from_yaml("api_key: nope\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClinicConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn discover_prefers_explicit_then_local_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            ClinicConfig::discover(None, dir.path()).unwrap(),
            ClinicConfig::default()
        );

        std::fs::write(dir.path().join(DEFAULT_FILE_NAME), "clinician: Dr. Ada Okafor\n").unwrap();
        let local = ClinicConfig::discover(None, dir.path()).unwrap();
        assert_eq!(local.clinician, "Dr. Ada Okafor");

        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "mouse: false\n").unwrap();
        let config = ClinicConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert!(!config.mouse);
        assert_eq!(config.clinician, "Dr. Julian Smith");
    }
}
