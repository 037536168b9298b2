//! Resolved runtime settings: config file values with CLI overrides
//! applied and role names validated.

use std::time::Duration;

use silica_config::ClinicConfig;

use crate::domain::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("default_role: {0}")]
    InvalidRole(String),
}

/// Names and captions painted on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub clinic_name: String,
    pub tagline: String,
    pub clinician: String,
}

impl Default for Branding {
    fn default() -> Self {
        let config = ClinicConfig::default();
        Self {
            clinic_name: config.clinic_name,
            tagline: config.tagline,
            clinician: config.clinician,
        }
    }
}

/// Values given on the command line; `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub splash_ms: Option<u64>,
    pub role: Option<Role>,
    pub no_mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub branding: Branding,
    pub splash_delay: Duration,
    pub initial_role: Role,
    pub mouse: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            branding: Branding::default(),
            splash_delay: Duration::from_secs(2),
            initial_role: Role::Doctor,
            mouse: true,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn resolve(config: ClinicConfig, overrides: &Overrides) -> Result<Self, SettingsError> {
        let initial_role = match overrides.role {
            Some(role) => role,
            None => config
                .default_role
                .parse::<Role>()
                .map_err(SettingsError::InvalidRole)?,
        };
        let splash_ms = overrides.splash_ms.unwrap_or(config.splash_delay_ms);
        Ok(Self {
            branding: Branding {
                clinic_name: config.clinic_name,
                tagline: config.tagline,
                clinician: config.clinician,
            },
            splash_delay: Duration::from_millis(splash_ms),
            initial_role,
            mouse: config.mouse && !overrides.no_mouse,
            log_filter: config.log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let settings = Settings::resolve(ClinicConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn cli_overrides_win() {
        let config = ClinicConfig {
            splash_delay_ms: 5000,
            default_role: "admin".into(),
            ..ClinicConfig::default()
        };
        let overrides = Overrides {
            splash_ms: Some(100),
            role: Some(Role::Nurse),
            no_mouse: true,
        };
        let settings = Settings::resolve(config, &overrides).unwrap();
        assert_eq!(settings.splash_delay, Duration::from_millis(100));
        assert_eq!(settings.initial_role, Role::Nurse);
        assert!(!settings.mouse);
    }

    #[test]
    fn bad_role_in_config_rejected() {
        let config = ClinicConfig {
            default_role: "janitor".into(),
            ..ClinicConfig::default()
        };
        let err = Settings::resolve(config, &Overrides::default()).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidRole(msg) if msg.contains("janitor")));
    }
}
