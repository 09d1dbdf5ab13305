//! Configuration loading and export root resolution
//!
//! Bootstrap settings come from an optional TOML file. A missing file is not
//! an error: the viewer starts with compiled defaults and logs a warning.
//!
//! The export root is resolved in priority order:
//! 1. Command-line argument
//! 2. `IGVIEW_EXPORT_ROOT` environment variable
//! 3. `export_root` in the TOML config file
//! 4. Compiled default (`./data`)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable naming the export root
pub const EXPORT_ROOT_ENV: &str = "IGVIEW_EXPORT_ROOT";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Root folder of the unpacked export
    #[serde(default)]
    pub export_root: Option<PathBuf>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Directory of static assets served under /static
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// IP geolocation lookups for the login activity view
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationConfig {
    /// When false every login shows "Unknown Location" without a lookup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// ipinfo.io access token (optional; anonymous requests are rate limited)
    #[serde(default)]
    pub token: Option<String>,

    /// Upper bound on a single lookup
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token: None,
            timeout_ms: default_timeout_ms(),
            base_url: default_base_url(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_base_url() -> String {
    "https://ipinfo.io".to_string()
}

impl TomlConfig {
    /// Load the TOML file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Built-in defaults used when nothing else is configured
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub export_root: PathBuf,
    pub port: u16,
    pub log_level: String,
    pub static_dir: PathBuf,
    pub config_file: Option<PathBuf>,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            export_root: PathBuf::from("data"),
            port: 3000,
            log_level: default_log_level(),
            static_dir: PathBuf::from("static"),
            config_file: default_config_path(),
        }
    }
}

/// `<config dir>/igview/config.toml`, e.g. `~/.config/igview/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("igview").join("config.toml"))
}

/// Where the export root came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

/// Resolves the export root once at startup
#[derive(Debug, Clone, Default)]
pub struct ExportRootResolver {
    cli_arg: Option<PathBuf>,
    toml_root: Option<PathBuf>,
}

impl ExportRootResolver {
    pub fn new(cli_arg: Option<PathBuf>) -> Self {
        Self {
            cli_arg,
            toml_root: None,
        }
    }

    pub fn with_toml(mut self, config: Option<&TomlConfig>) -> Self {
        self.toml_root = config.and_then(|c| c.export_root.clone());
        self
    }

    /// Resolve the export root and report which tier supplied it
    pub fn resolve_with_source(&self) -> (PathBuf, RootSource) {
        if let Some(path) = &self.cli_arg {
            return (path.clone(), RootSource::CommandLine);
        }

        if let Ok(path) = std::env::var(EXPORT_ROOT_ENV) {
            if !path.trim().is_empty() {
                return (PathBuf::from(path), RootSource::Environment);
            }
        }

        if let Some(path) = &self.toml_root {
            return (path.clone(), RootSource::ConfigFile);
        }

        (
            CompiledDefaults::for_current_platform().export_root,
            RootSource::Default,
        )
    }

    pub fn resolve(&self) -> PathBuf {
        let (path, source) = self.resolve_with_source();
        info!(root = %path.display(), ?source, "Resolved export root");
        if !path.is_dir() {
            warn!(root = %path.display(), "Export root is not a directory; every view will report missing datasets");
        }
        path
    }
}
