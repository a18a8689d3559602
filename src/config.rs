// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layered: built-in defaults, then a TOML file, then `STACKYARD_*`
//! environment variables.

use crate::error::StackError;
use ::config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "STACKYARD";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Canvas width used when seeding scenarios and laying out grids
    pub canvas_width: f64,
    /// Satellite ring radius for hub layouts
    pub hub_radius: f64,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            canvas_width: 1200.0,
            hub_radius: 280.0,
            color: true,
        }
    }
}

/// Default config file location, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "stackyard")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the platform config file is
/// used when present.
pub fn load(path: Option<&Path>) -> Result<Config, StackError> {
    let defaults = Config::default();
    let mut builder = ::config::Config::builder()
        .set_default("log_level", defaults.log_level)?
        .set_default("canvas_width", defaults.canvas_width)?
        .set_default("hub_radius", defaults.hub_radius)?
        .set_default("color", defaults.color)?;

    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = default_path() {
                debug!("Looking for config at {}", path.display());
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
            }
        }
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?
        .try_deserialize()?;
    Ok(config)
}
