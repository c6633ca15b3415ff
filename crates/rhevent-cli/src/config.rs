//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rhevent_sdk::{ClientConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, ClientConfig>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Where this configuration was loaded from
    #[serde(skip)]
    path: Option<PathBuf>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rhevent").join("config.toml"))
    }

    /// Load configuration from `path` (or the default path), falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };

        config
            .profiles
            .entry(default_profile())
            .or_insert_with(ClientConfig::default);
        config.path = Some(path);
        Ok(config)
    }

    /// Save configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&ClientConfig> {
        self.get_profile(&self.active_profile)
    }

    /// Get a profile by name.
    pub fn get_profile(&self, name: &str) -> Result<&ClientConfig> {
        self.profiles
            .get(name)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", name)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: ClientConfig) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Resolve the API base URL: explicit URL first, then the named profile,
    /// then the active profile.
    ///
    /// The named profile is used for this resolution only; `active_profile`
    /// is left as loaded.
    pub fn resolve_api_url(
        &self,
        override_url: Option<&str>,
        profile: Option<&str>,
    ) -> Result<ClientConfig> {
        let client = match (override_url, profile) {
            (Some(url), _) => ClientConfig::new(url),
            (None, Some(name)) => self.get_profile(name)?.clone(),
            (None, None) => self.get_active_profile()?.clone(),
        };
        client.validate().map_err(CliError::Config)?;
        Ok(client)
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert("default".to_string(), ClientConfig::new(DEFAULT_API_URL));

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            path: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
