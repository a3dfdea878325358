//! Startup configuration.
//!
//! Values come from, in increasing precedence: a TOML config file,
//! `FLASHDECK_*` environment variables, and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level flashdeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashdeckConfig {
    /// Deck file imported once before the first prompt.
    #[serde(default)]
    pub import_from: Option<PathBuf>,
    /// Deck file written when the session exits.
    #[serde(default)]
    pub export_to: Option<PathBuf>,
    /// Default tracing directive level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            import_from: None,
            export_to: None,
            log_level: default_log_level(),
        }
    }
}

impl FlashdeckConfig {
    /// Apply command-line values on top of this config. `None` keeps the
    /// current value.
    pub fn with_overrides(
        mut self,
        import_from: Option<PathBuf>,
        export_to: Option<PathBuf>,
    ) -> Self {
        if import_from.is_some() {
            self.import_from = import_from;
        }
        if export_to.is_some() {
            self.export_to = export_to;
        }
        self.normalized()
    }

    /// Treat whitespace-only paths as unset.
    fn normalized(mut self) -> Self {
        self.import_from = self.import_from.filter(|p| !is_blank(p));
        self.export_to = self.export_to.filter(|p| !is_blank(p));
        self
    }

    fn apply_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var("FLASHDECK_IMPORT_FROM") {
            self.import_from = Some(PathBuf::from(path));
        }
        if let Some(path) = var("FLASHDECK_EXPORT_TO") {
            self.export_to = Some(PathBuf::from(path));
        }
        self.normalized()
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `flashdeck.toml` in the current directory
/// 2. `~/.config/flashdeck/config.toml`
///
/// Environment variable overrides: `FLASHDECK_IMPORT_FROM`, `FLASHDECK_EXPORT_TO`.
pub fn load_config_from(path: Option<&Path>) -> Result<FlashdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("flashdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config_file(&path)?
        }
        None => FlashdeckConfig::default(),
    };

    Ok(config.apply_env(|key| std::env::var(key).ok()))
}

fn parse_config_file(path: &Path) -> Result<FlashdeckConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<FlashdeckConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashdeck"))
}
