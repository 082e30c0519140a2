//! Application configuration: defaults, an optional JSON file, then the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const COMPLETION_KEY_ENV: &str = "OPENAI_API_KEY";
pub const NEWS_KEY_ENV: &str = "NEWS_API_KEY";
pub const GUI_FLAG_ENV: &str = "USE_GUI";
pub const CONFIG_PATH_ENV: &str = "STRATEGY_ASSISTANT_CONFIG";

const DEFAULT_INPUT: &str =
    "Achieve carbon neutrality by 2040. Increase renewable energy funding.";

/// A credential that never shows up in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Console,
    Interactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub completion: CompletionConfig,
    pub news: NewsConfig,
    pub ui: UiConfig,

    /// Text analysed when no other input is given
    pub input: String,

    #[serde(skip)]
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completion: CompletionConfig::default(),
            news: NewsConfig::default(),
            ui: UiConfig::default(),
            input: DEFAULT_INPUT.to_string(),
            mode: Mode::Console,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,

    #[serde(skip)]
    pub api_key: Option<Secret>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            temperature: None,
            timeout_secs: 60,
            api_key: None,
        }
    }
}

impl CompletionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub base_url: String,
    pub query: String,
    pub sort_by: String,
    pub max_headlines: usize,
    pub timeout_secs: u64,

    #[serde(skip)]
    pub api_key: Option<Secret>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2/everything".to_string(),
            query: "carbon neutrality".to_string(),
            sort_by: "publishedAt".to_string(),
            max_headlines: 3,
            timeout_secs: 10,
            api_key: None,
        }
    }
}

impl NewsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Config {
    /// Load once at startup from the real process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable variable lookup.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = lookup(CONFIG_PATH_ENV).map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(lookup);
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_json::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.completion.api_key = non_empty(lookup(COMPLETION_KEY_ENV)).map(Secret::new);
        self.news.api_key = non_empty(lookup(NEWS_KEY_ENV)).map(Secret::new);
        self.mode = if flag_enabled(lookup(GUI_FLAG_ENV).as_deref()) {
            Mode::Interactive
        } else {
            Mode::Console
        };
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?;
    Some(dir.join("strategy_assistant").join("config.json"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "0" | "false" | "no" | "off"),
    }
}
