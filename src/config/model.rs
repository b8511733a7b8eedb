//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI refresh and notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u64,
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            toast_duration_secs: default_toast_duration(),
            max_toasts: default_max_toasts(),
        }
    }
}

/// Mock sign-in behaviour and the demo account table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated processing time before a registration or password change
    /// takes effect.
    #[serde(default = "default_processing_delay")]
    pub processing_delay_ms: u64,
    #[serde(default = "default_login_min_password_len")]
    pub login_min_password_len: usize,
    #[serde(default = "default_new_password_min_len")]
    pub new_password_min_len: usize,
    /// Minimum strength score for a new password.
    #[serde(default = "default_required_strength")]
    pub required_strength: u8,
    #[serde(default = "default_accounts")]
    pub accounts: Vec<AccountConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay(),
            login_min_password_len: default_login_min_password_len(),
            new_password_min_len: default_new_password_min_len(),
            required_strength: default_required_strength(),
            accounts: default_accounts(),
        }
    }
}

/// A demo account the login screen can resolve by email or role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub role: Role,
    /// Display name shown once signed in.
    pub name: String,
    /// Password filled in by the demo shortcut. Never checked.
    #[serde(default = "default_password_hint")]
    pub password_hint: String,
}

/// Diagnostic log settings. Logs go to a file because the terminal is owned
/// by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

pub fn default_accounts() -> Vec<AccountConfig> {
    vec![
        AccountConfig {
            email: "candidate@demo.com".into(),
            role: Role::Candidate,
            name: "John Doe".into(),
            password_hint: default_password_hint(),
        },
        AccountConfig {
            email: "hr@demo.com".into(),
            role: Role::HrManager,
            name: "Sarah Smith".into(),
            password_hint: default_password_hint(),
        },
        AccountConfig {
            email: "admin@demo.com".into(),
            role: Role::Administrator,
            name: "Emily Davis".into(),
            password_hint: default_password_hint(),
        },
    ]
}

fn default_tick_rate() -> u64 {
    50
}
fn default_toast_duration() -> u64 {
    4
}
fn default_max_toasts() -> usize {
    3
}
fn default_processing_delay() -> u64 {
    1500
}
fn default_login_min_password_len() -> usize {
    6
}
fn default_new_password_min_len() -> usize {
    8
}
fn default_required_strength() -> u8 {
    70
}
fn default_password_hint() -> String {
    "demo123".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/talentdesk/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.auth.processing_delay_ms, 1500);
        assert_eq!(config.auth.required_strength, 70);
        assert_eq!(config.auth.accounts.len(), 3);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_accounts_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [auth]
            processing_delay_ms = 10

            [[auth.accounts]]
            email = "lead@corp.io"
            role = "HR Manager"
            name = "Team Lead"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.processing_delay_ms, 10);
        assert_eq!(config.auth.login_min_password_len, 6);
        assert_eq!(config.auth.accounts.len(), 1);
        assert_eq!(config.auth.accounts[0].role, Role::HrManager);
        assert_eq!(config.auth.accounts[0].password_hint, "demo123");
    }

    #[test]
    fn test_round_trip_keeps_role_labels() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("role = \"HR Manager\""));
    }
}
