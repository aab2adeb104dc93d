use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::clock::{self, Clock, FixedClock, SystemClock};
use crate::paths::DEFAULT_ROOT;

/// Configuration handed to the scaffolder.
pub struct ScaffoldConfig {
    /// Destination directory for the generated project
    pub root_path: PathBuf,
    /// Date source for templated content
    pub clock: Box<dyn Clock>,
}

impl ScaffoldConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the date source, e.g. with a [`FixedClock`] in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl fmt::Debug for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldConfig")
            .field("root_path", &self.root_path)
            .field("today", &self.clock.today())
            .finish()
    }
}

/// Optional settings file passed with `--config`.
///
/// ```toml
/// root = "~/qa/portal"
/// date = "2025-03-25"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Destination directory; `~` is expanded
    #[serde(default)]
    pub root: Option<String>,
    /// Fixed generation date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given directly on the command line; these win over settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<String>,
    pub date: Option<String>,
}

/// Build the scaffold configuration.
///
/// Precedence per field: command-line flag, then settings file, then the
/// built-in default (fixed root, system clock).
pub fn resolve(settings: Option<&Settings>, overrides: &Overrides) -> Result<ScaffoldConfig> {
    let root = overrides
        .root
        .clone()
        .or_else(|| settings.and_then(|s| s.root.clone()))
        .unwrap_or_else(|| DEFAULT_ROOT.to_string());
    let root_path = PathBuf::from(shellexpand::tilde(&root).as_ref());

    let mut config = ScaffoldConfig::new(root_path);

    let date = overrides
        .date
        .clone()
        .or_else(|| settings.and_then(|s| s.date.clone()));
    if let Some(date) = date {
        let parsed = clock::parse_date(&date)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
        config = config.with_clock(FixedClock(parsed));
    }

    Ok(config)
}

/// Load the optional settings file and resolve the final configuration.
pub fn load(settings_path: Option<&Path>, overrides: &Overrides) -> Result<ScaffoldConfig> {
    let settings = settings_path.map(Settings::load).transpose()?;
    resolve(settings.as_ref(), overrides)
}
