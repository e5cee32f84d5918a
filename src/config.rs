// Configuration file handling

use crate::error::{AssertifyError, Result};
use crate::report::{ReportOptions, ReportStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Report style (color, plain, json)
    #[serde(default)]
    pub style: ReportStyle,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Append the first mismatch location to failing reports
    #[serde(default)]
    pub show_mismatch: bool,

    /// Append a character diff to failing reports
    #[serde(default)]
    pub show_diff: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            color: default_color(),
            show_mismatch: false,
            show_diff: false,
        }
    }
}

pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const CONFIG_FILE_NAMES: [&str; 2] = [".assertifyrc", ".assertifyrc.toml"];

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Checks `.assertifyrc` then `.assertifyrc.toml`, each in the current
    /// directory before the home directory. Returns `Ok(None)` when no file
    /// exists.
    pub fn load() -> Result<Option<Self>> {
        match Self::discover() {
            Some(path) => Self::load_from_file(&path).map(Some),
            None => Ok(None),
        }
    }

    /// First existing configuration file, if any
    pub fn discover() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok();
        let home = dirs::home_dir();

        CONFIG_FILE_NAMES
            .iter()
            .flat_map(|name| [cwd.as_ref(), home.as_ref()].map(|dir| dir.map(|d| d.join(name))))
            .flatten()
            .find(|path| path.exists())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AssertifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| AssertifyError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// Effective report options, honoring `NO_COLOR`
    pub fn report_options(&self) -> ReportOptions {
        let no_color_env = std::env::var_os(ENV_NO_COLOR).is_some_and(|v| !v.is_empty());
        self.report_options_with(no_color_env)
    }

    pub fn report_options_with(&self, no_color: bool) -> ReportOptions {
        let style = match self.report.style {
            ReportStyle::Color if no_color || !self.report.color => ReportStyle::Plain,
            other => other,
        };

        ReportOptions {
            style,
            show_mismatch: self.report.show_mismatch,
            show_diff: self.report.show_diff,
        }
    }
}
