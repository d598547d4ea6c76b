use config::{Config, Environment};
use log::LevelFilter;
use serde::Deserialize;

use crate::core::error::AppResult;

pub mod image;

use image::ImageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Dev,
    Test,
    Prod,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Dev
    }
}

impl Profile {
    /// Log verbosity the host binary initialises for this profile.
    pub fn log_level(&self) -> LevelFilter {
        match self {
            Profile::Dev | Profile::Test => LevelFilter::Debug,
            Profile::Prod => LevelFilter::Info,
        }
    }
}

/// Application configuration. Defaults cover every field; deployments
/// override individual values through `APP__`-prefixed environment
/// variables, e.g. `APP__IMAGE__DEFAULT_BUDGET_KB=250`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub image: ImageConfig,
}

impl AppConfig {
    pub fn read() -> AppResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
