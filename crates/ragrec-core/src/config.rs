//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults, `config.toml`, `config.<env>.toml`
//! and `APP_*` env vars (`__` separates nested keys, so
//! `APP_OUTPUT__FORMAT=json` sets `output.format`). Missing files are skipped.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::types::PageConfig;

const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownChoice { kind: "output format", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page setup for both forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    pub freetext: PageConfig,
    pub selector: PageConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            freetext: PageConfig::new("📊 RAG Recommender", "🧠"),
            selector: PageConfig::new("RAG Recommender", "🔍"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Typed view of the merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

pub struct Config {
    figment: Figment,
    env_name: String,
}

impl Config {
    /// Load `config.toml` from the working directory for the `RUST_ENV` environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit base file (after `~`/`$VAR` expansion) or `config.toml`.
    pub fn load_from(path: Option<&str>) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(path, &env_name)
    }

    pub fn load_for_env(path: Option<&str>, env_name: &str) -> anyhow::Result<Self> {
        let base = match path {
            Some(p) => resolve_with_base(&env::current_dir()?, p),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        if path.is_some() && !base.is_file() {
            let msg = format!("config file {} does not exist", base.display());
            anyhow::bail!(Error::InvalidConfig(msg));
        }

        let mut figment =
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::file(&base));
        if let Some(overlay) = env_overlay_path(&base, env_name) {
            tracing::debug!(file = %overlay.display(), "merging environment overlay");
            figment = figment.merge(Toml::file(overlay));
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, env_name: env_name.to_string() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn app(&self) -> anyhow::Result<AppConfig> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!(Error::InvalidConfig(e.to_string())))
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let app = self.app()?;
        for (name, page) in [("ui.freetext", &app.ui.freetext), ("ui.selector", &app.ui.selector)] {
            if page.title.trim().is_empty() {
                anyhow::bail!(Error::InvalidConfig(format!("{name}.title must not be empty")));
            }
        }
        if matches!(env, "prod" | "production") && app.logging.level == LogLevel::Trace {
            let msg = "trace logging is not allowed in production".to_string();
            anyhow::bail!(Error::InvalidConfig(msg));
        }
        Ok(())
    }
}

/// `config.toml` + `dev` -> `config.dev.toml`, next to the base file.
/// Unknown environments get no overlay.
fn env_overlay_path(base: &Path, env_name: &str) -> Option<PathBuf> {
    let suffix = match env_name {
        "dev" | "development" => "dev",
        "prod" | "production" => "prod",
        "test" | "testing" => "test",
        _ => return None,
    };
    let stem = base.file_stem()?.to_string_lossy();
    Some(base.with_file_name(format!("{stem}.{suffix}.toml")))
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
