// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Keychain service name used by `set-key`/`get-key`.
pub const KEYRING_SERVICE: &str = "influencetx";
/// Keychain account holding the Open States key.
pub const KEYRING_ACCOUNT: &str = "openstates";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Open States API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Open States API root (default: https://openstates.org/api/v1)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Two-letter state abbreviation (default: tx)
    #[serde(default = "default_state")]
    pub state: String,

    /// Show setup instructions instead of failing when the key is missing
    #[serde(default)]
    pub debug: bool,

    /// Request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://openstates.org/api/v1".into()
}
fn default_state() -> String {
    "tx".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            state: default_state(),
            debug: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > keychain > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.influencetx.toml in working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".influencetx.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (INFLUENCETX_STATE, INFLUENCETX_API_KEY, etc.)
        figment = figment.merge(Env::prefixed("INFLUENCETX_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // A blank key (e.g. `api_key = ""`) must not shadow the fallbacks below
        config.api_key = config.api_key.filter(|k| !k.trim().is_empty());

        // The variable name Open States documents for its key
        if config.api_key.is_none() {
            config.api_key = std::env::var("OPENSTATES_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        #[cfg(feature = "secure-storage")]
        if config.api_key.is_none() {
            if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT) {
                if let Ok(key) = entry.get_password() {
                    config.api_key = Some(key).filter(|k| !k.trim().is_empty());
                }
            }
        }

        config.apply_cli(cli);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "influencetx").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref state) = cli.state {
            self.state = state.clone();
        }
        if cli.debug {
            self.debug = true;
        }
    }

    fn normalize(&mut self) {
        self.state = self.state.trim().to_ascii_lowercase();
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.state.len() != 2 || !self.state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Config(format!(
                "state must be a two-letter abbreviation, got '{}'",
                self.state
            )));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base_url '{}' is invalid: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !(1..=600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–600, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Effective configuration as TOML, with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.api_key = shown.api_key.as_ref().map(|_| "********".to_string());
        toml::to_string_pretty(&shown).map_err(|e| Error::Config(e.to_string()))
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# influencetx configuration

# Open States API key (register at https://openstates.org/api/register/).
# Prefer OPENSTATES_API_KEY or `influencetx set-key` over storing it here.
# api_key = ""

# Open States API root
base_url = "https://openstates.org/api/v1"

# Two-letter state abbreviation
state = "tx"

# Show setup instructions instead of failing when no API key is configured
debug = false

# Request timeout in seconds
timeout_secs = 30
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
