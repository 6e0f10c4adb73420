use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const URL_ENV: &str = "BOOKAPI_URL";
pub const DEFAULT_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend root, without the `/bookapi` suffix.
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads a TOML file such as `url = "http://localhost:8080"`.
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read config file {}", path.display()))?;

        let config = toml::from_str::<Config>(&text)
            .with_context(|| format!("Couldn't parse config file {}", path.display()))?;

        Ok(config)
    }

    pub fn from_env() -> Option<Config> {
        match env::var(URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Some(Config { url }),
            _ => None,
        }
    }

    /// Config file first, then `BOOKAPI_URL`, then the default.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        let config = match path {
            Some(path) => Config::from_file(path)?,
            None => match Config::from_env() {
                Some(config) => config,
                None => {
                    debug!("No {} set, using {}", URL_ENV, DEFAULT_URL);
                    Config::default()
                }
            },
        };

        info!("book api = {}", config.base_url());

        Ok(config)
    }

    pub fn base_url(&self) -> String {
        format!("{}/bookapi", self.url.trim().trim_end_matches('/'))
    }
}
