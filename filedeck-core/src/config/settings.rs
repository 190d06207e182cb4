//! Workspace settings
//!
//! Settings are stored as TOML. Every section is optional and falls back to
//! its defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [workspace]
//! seed = "empty"
//!
//! [editor]
//! placeholder = "// nothing open"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};
use crate::selection::DEFAULT_PLACEHOLDER;
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput, span_names};
use crate::tree::Tree;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging configuration
    pub logging: LoggingSettings,
    /// Initial workspace contents
    pub workspace: WorkspaceSettings,
    /// Editor panel behavior
    pub editor: EditorSettings,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub level: String,
    /// Custom `EnvFilter` directive, overrides `level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Write logs to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::default().to_string(),
            filter: None,
            log_file: None,
        }
    }
}

impl LoggingSettings {
    /// Returns the parsed log level.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for an unknown level name.
    pub fn tracing_level(&self) -> ConfigResult<TracingLevel> {
        self.level
            .parse::<TracingLevel>()
            .map_err(|()| ConfigError::Validation {
                field: "logging.level".to_string(),
                reason: format!("unknown log level '{}'", self.level),
            })
    }

    /// Builds the tracing configuration described by this section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for an unknown level name.
    pub fn tracing_config(&self) -> ConfigResult<TracingConfig> {
        let mut config = TracingConfig::production().with_level(self.tracing_level()?);
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter.clone());
        }
        if let Some(path) = &self.log_file {
            config = config.with_output(TracingOutput::File { path: path.clone() });
        }
        Ok(config)
    }
}

/// Which tree a new workspace starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedTree {
    /// The sample project (`src/index.mjs`, `src/App.tsx`, `package.json`)
    #[default]
    Sample,
    /// No nodes at all
    Empty,
}

impl SeedTree {
    /// Builds the seed tree.
    #[must_use]
    pub fn build(self) -> Tree {
        match self {
            Self::Sample => Tree::sample(),
            Self::Empty => Tree::new(),
        }
    }
}

/// Workspace section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Initial tree
    pub seed: SeedTree,
}

/// Editor section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Text shown while no file is selected
    pub placeholder: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and validates them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for unusable values.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file is missing,
    /// `ConfigError::Read` if it cannot be read, and the errors of
    /// [`Settings::from_toml_str`] otherwise.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let _span = tracing::info_span!(span_names::CONFIG_LOAD, path = %path.display()).entered();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(seed = ?settings.workspace.seed, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from a TOML file, using defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`] except for a missing file.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Renders the settings as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if rendering fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Checks values that the TOML schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first bad setting.
    pub fn validate(&self) -> ConfigResult<()> {
        self.logging.tracing_level()?;
        let Some(filter) = self.logging.filter.as_deref() else {
            return Ok(());
        };
        if filter.is_empty() {
            return Err(ConfigError::Validation {
                field: "logging.filter".to_string(),
                reason: "filter must not be empty".to_string(),
            });
        }
        EnvFilter::try_new(filter).map_err(|e| ConfigError::Validation {
            field: "logging.filter".to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
