use std::path::PathBuf;

use config::{Config, ConfigError, Environment, Map};
use serde::{Deserialize, Serialize};

use crate::requests::auth::LoginRequest;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_EMAIL: &str = "test@example.com";
pub const DEFAULT_PASSWORD: &str = "testpassword123";
pub const DEFAULT_TWO_FACTOR_TOKEN: &str = "123456";

/// Settings of one run against the server under test
///
/// Every field maps to an environment variable of the same name in upper case
/// (`BASE_URL`, `TEST_EMAIL`, `TEST_PASSWORD`, `TEST_2FA_TOKEN`, `TEST_REPORT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Root address every endpoint path is resolved against
    pub base_url: String,
    /// Email of the test account
    #[serde(rename = "test_email")]
    pub email: String,
    /// Password of the test account
    #[serde(rename = "test_password")]
    pub password: String,
    /// One-time token submitted when the server asks for 2FA
    #[serde(rename = "test_2fa_token")]
    pub two_factor_token: String,
    /// Where to write the HTML report, if anywhere
    #[serde(rename = "test_report", default)]
    pub report: Option<PathBuf>,
}

impl SuiteConfig {
    /// Build the configuration from an explicit variable map instead of the
    /// process environment. Keys are environment variable names.
    pub fn from_source(source: Map<String, String>) -> Result<Self, ConfigError> {
        build(Environment::default().source(Some(source)))
    }

    /// Login body for the configured test account
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Absolute URL of `path` on the server under test
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            two_factor_token: DEFAULT_TWO_FACTOR_TOKEN.to_string(),
            report: None,
        }
    }
}

/// Load configuration from `.env` and environment variables
///
/// Precedence (highest to lowest):
/// 1. Process environment: BASE_URL=http://auth.internal:8080
/// 2. `.env` in the working directory (never overrides 1)
/// 3. Literal defaults
pub fn load_config() -> Result<SuiteConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment overrides from {}", path.display());
    }

    build(Environment::default())
}

fn build(environment: Environment) -> Result<SuiteConfig, ConfigError> {
    let config = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("test_email", DEFAULT_EMAIL)?
        .set_default("test_password", DEFAULT_PASSWORD)?
        .set_default("test_2fa_token", DEFAULT_TWO_FACTOR_TOKEN)?
        .add_source(environment.try_parsing(false))
        .build()?;

    config.try_deserialize()
}
