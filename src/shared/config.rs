//! Application configuration. Logging, password policy, demo seed account.

use crate::domain::DomainError;
use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::Deserialize;

/// Default log filter when neither config nor RUST_LOG sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default minimum password length (non-empty).
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 1;

/// Screen shown at start-up unless configured otherwise.
pub const DEFAULT_INITIAL_VIEW: &str = "sign up";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// tracing EnvFilter directive. Read from ACCOUNT_DESK_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Minimum password length for sign-up and password change. Read from ACCOUNT_DESK_MIN_PASSWORD_LENGTH.
    #[serde(default)]
    pub min_password_length: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Demo seed account (saved into the store at start-up)
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from ACCOUNT_DESK_SEED_USERNAME.
    #[serde(default)]
    pub seed_username: Option<String>,

    /// Read from ACCOUNT_DESK_SEED_PASSWORD.
    #[serde(default)]
    pub seed_password: Option<String>,

    /// First screen: "sign up" or "log in". Read from ACCOUNT_DESK_INITIAL_VIEW.
    #[serde(default)]
    pub initial_view: Option<String>,
}

impl AppConfig {
    /// Load from `.env`, ACCOUNT_DESK_* environment variables and the optional
    /// file named by ACCOUNT_DESK_CONFIG (file first, env overrides).
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("ACCOUNT_DESK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("ACCOUNT_DESK"));
        Self::from_builder(c)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, DomainError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the log filter. Defaults to "info".
    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Returns the minimum password length. Defaults to 1.
    pub fn min_password_length_or_default(&self) -> usize {
        self.min_password_length
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH)
    }

    /// Returns the start-up screen name. Defaults to "sign up".
    pub fn initial_view_or_default(&self) -> String {
        self.initial_view
            .clone()
            .unwrap_or_else(|| DEFAULT_INITIAL_VIEW.to_string())
    }

    /// Returns the seed credentials if both halves are set.
    pub fn seed_account(&self) -> Option<(String, String)> {
        match (&self.seed_username, &self.seed_password) {
            (Some(name), Some(password)) if !name.is_empty() => {
                Some((name.clone(), password.clone()))
            }
            _ => None,
        }
    }
}
