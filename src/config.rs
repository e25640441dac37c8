//! Global venues configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

static DEFAULT_BASE_URL: &str = "http://localhost:5000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_open_browser() -> bool {
    true
}

/// Configuration at ~/.config/venues/config.toml
///
/// Every key can be overridden with a `VENUES_`-prefixed environment
/// variable, e.g. `VENUES_BASE_URL`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VenuesConfig {
    /// Server the `/venues/` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Open redirect targets in the system browser.
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl Default for VenuesConfig {
    fn default() -> Self {
        VenuesConfig {
            base_url: default_base_url(),
            open_browser: default_open_browser(),
        }
    }
}

impl VenuesConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("venues");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("VENUES").try_parsing(true)
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("Could not read config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Could not serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Could not write config file {}", path.display()))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# venues configuration

# Server the venue paths are sent to:
# base_url = \"{}\"

# Open the page the server redirects to in your browser:
# open_browser = true
",
            DEFAULT_BASE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file {}", path.display()))?;

        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("Invalid base_url '{}'", self.base_url))
    }
}
