use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration, read from `STAYFINDER_*` environment variables
/// (a `.env` file is honored by the binary via dotenvy).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Directory holding `users.json` / `properties.json` seed collections.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_database_url() -> String {
    "sqlite:stayfinder.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            loglevel: default_loglevel(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("STAYFINDER_")).extract()
    }
}
