use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".mighty.yaml";
pub const TOKEN_PLACEHOLDER: &str = "<get_your_token>";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default)]
    pub debug: bool,
    /// Look-back window of the pull phase, e.g. "4w".
    #[serde(default = "default_history")]
    pub history: String,
    #[serde(default = "default_timesheet")]
    pub timesheet: String,
}

fn default_url() -> String {
    "https://mite.yo.lk".to_string()
}
fn default_token() -> String {
    TOKEN_PLACEHOLDER.to_string()
}
fn default_history() -> String {
    "4w".to_string()
}
fn default_timesheet() -> String {
    "~/entries.xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: default_token(),
            debug: false,
            history: default_history(),
            timesheet: default_timesheet(),
        }
    }
}

impl Config {
    /// `~/.mighty.yaml`
    pub fn default_file() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Explicit path if given, otherwise the first of `./.mighty.yaml`,
    /// `~/.mighty.yaml` that exists.
    pub fn locate(explicit: Option<&Path>) -> AppResult<PathBuf> {
        if let Some(p) = explicit {
            return Ok(p.to_path_buf());
        }

        let candidates = [PathBuf::from(".").join(CONFIG_FILE_NAME), Self::default_file()];
        candidates
            .into_iter()
            .find(|p| p.exists())
            .ok_or_else(|| {
                AppError::ConfigLoad(Self::default_file(), "no config file found".to_string())
            })
    }

    /// Read the YAML file, then apply `MIGHTY_*` environment overrides.
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        let path = Self::locate(explicit)?;
        Self::read(&path)
    }

    /// Read one specific file, then apply `MIGHTY_*` environment overrides.
    pub fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(path.to_path_buf(), e.to_string()))?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(path.to_path_buf(), e.to_string()))?;

        cfg.apply_env(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    /// Overrides from `MIGHTY_URL`, `MIGHTY_TOKEN`, `MIGHTY_DEBUG`,
    /// `MIGHTY_HISTORY`, `MIGHTY_TIMESHEET`.
    pub fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, var: F) -> AppResult<()> {
        if let Some(v) = var("MIGHTY_URL") {
            self.url = v;
        }
        if let Some(v) = var("MIGHTY_TOKEN") {
            self.token = v;
        }
        if let Some(v) = var("MIGHTY_HISTORY") {
            self.history = v;
        }
        if let Some(v) = var("MIGHTY_TIMESHEET") {
            self.timesheet = v;
        }
        if let Some(v) = var("MIGHTY_DEBUG") {
            self.debug = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(AppError::Config(format!("MIGHTY_DEBUG: invalid value '{other}'")));
                }
            };
        }
        Ok(())
    }

    /// Write a config file with the defaults. Never overwrites unless `force`.
    pub fn generate(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::ConfigExists(path.to_path_buf()));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Reject configurations that cannot talk to the remote store.
    pub fn ensure_ready(&self) -> AppResult<()> {
        if self.url.trim().is_empty() {
            return Err(AppError::Config("'url' is empty".to_string()));
        }
        if self.token.trim().is_empty() || self.token == TOKEN_PLACEHOLDER {
            return Err(AppError::Config(
                "'token' is not set, put your mite API key in the config file".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with the token masked, for printing.
    pub fn redacted(&self) -> Config {
        Config {
            token: crate::utils::formatting::mask_secret(&self.token),
            ..self.clone()
        }
    }
}
