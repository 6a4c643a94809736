//! Client config load/save for `~/.law-qa/config.yaml`.
//! Schema: `backend.endpoints` (ordered candidates) and `video.source_url`.

use std::path::{Path, PathBuf};

/// Built-in first-tier endpoint (local development backend).
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Built-in second-tier endpoint (hosted production backend).
pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://immigration-law-chatbot.onrender.com";

/// Env var naming a backend endpoint to try before any configured one.
pub const BACKEND_URL_ENV: &str = "LAW_QA_BACKEND_URL";

/// Backend section (ordered candidate endpoints).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BackendSection {
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Video section (fixed source asset for timestamp cues).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct VideoSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Full client config.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub video: VideoSection,
}

impl Config {
    /// Ordered candidate endpoints, first-success-wins.
    ///
    /// Priority: the `LAW_QA_BACKEND_URL` env value when set and non-blank,
    /// then configured endpoints, then the built-in local/production pair.
    pub fn endpoints(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Ok(value) = std::env::var(BACKEND_URL_ENV) {
            if !value.trim().is_empty() {
                out.push(value);
            }
        }
        out.extend(self.backend.endpoints.iter().cloned());
        if out.is_empty() {
            out.push(DEFAULT_LOCAL_ENDPOINT.to_string());
            out.push(DEFAULT_REMOTE_ENDPOINT.to_string());
        }
        out
    }
}

/// Returns the default config file path: `~/.law-qa/config.yaml` (platform-specific).
pub fn default_config_path() -> Option<PathBuf> {
    let home = home_dir()?;
    Some(home.join(".law-qa").join("config.yaml"))
}

#[cfg(unix)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE").map(PathBuf::from)
}

#[cfg(not(any(unix, windows)))]
fn home_dir() -> Option<PathBuf> {
    None
}

/// Load config from a YAML file. Path is typically `~/.law-qa/config.yaml`.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Io(e.to_string()))
}

/// Save config to a YAML file. Creates parent directory if missing.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
    }
    let contents = serde_yaml::to_string(config).map_err(|e| ConfigError::Io(e.to_string()))?;
    std::fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))
}

/// Config load/save error.
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(s) => write!(f, "IO error: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}
