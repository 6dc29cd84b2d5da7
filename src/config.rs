//! Gitlet repository configuration (`.gitlet/config`).
//!
//! Defines the typed configuration loaded once per command, including the
//! cosmetic author identity shown in `log` output and the verbosity toggle
//! mirrored by `-v`/`GITLET_LOG`. Missing file or missing fields use
//! sensible defaults — absence is never an error.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level Gitlet repository configuration.
///
/// Parsed from `.gitlet/config`. Missing fields use defaults; a missing file
/// is equivalent to an all-defaults config, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitletConfig {
    /// Author identity used for display purposes only.
    #[serde(default)]
    pub user: UserConfig,
    /// Core behavior toggles.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Author identity shown in commit metadata. Cosmetic only — excluded from
/// the commit hash (see the `Commit` invariants).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Display name, defaults to `"Gitlet User"` when unset.
    #[serde(default = "default_name")]
    pub name: String,
    /// Display email, defaults to a placeholder when unset.
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
        }
    }
}

fn default_name() -> String {
    "Gitlet User".to_owned()
}

fn default_email() -> String {
    "gitlet@localhost".to_owned()
}

/// Core behavior toggles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Mirrors `-v`/`--verbose`: raise the default log level to `debug`.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

impl GitletConfig {
    /// Load configuration from `path`. A missing file yields
    /// [`GitletConfig::default`]; a present-but-unparsable file is an error.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file exists but is not valid TOML, or
    /// contains unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(ConfigError {
                    path: Some(path.to_path_buf()),
                    message: err.to_string(),
                })
            }
        };
        toml::from_str(&text).map_err(|err| ConfigError {
            path: Some(path.to_path_buf()),
            message: err.to_string(),
        })
    }

    /// Serialize this config to TOML and write it to `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|err| ConfigError {
            path: Some(path.to_path_buf()),
            message: err.to_string(),
        })?;
        fs::write(path, text).map_err(|err| ConfigError {
            path: Some(path.to_path_buf()),
            message: err.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A configuration load/save failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// Path to the offending file, if known.
    pub path: Option<PathBuf>,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
