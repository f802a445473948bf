pub mod suite;

use once_cell::sync::OnceCell;

pub use config::ConfigError;
pub use suite::SuiteConfig;

static CONFIG: OnceCell<SuiteConfig> = OnceCell::new();

/// Load the suite configuration from `.env` and the process environment
pub fn load() -> Result<SuiteConfig, ConfigError> {
    suite::load_config()
}

/// Configuration shared by every case of the run, loaded on first access
pub fn get() -> Result<&'static SuiteConfig, ConfigError> {
    CONFIG.get_or_try_init(load)
}
