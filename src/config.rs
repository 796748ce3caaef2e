use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::output::DEFAULT_TOP_N;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log every classified interaction (KUDOS_DEBUG)
    pub debug: bool,
    /// Leaderboard length (KUDOS_TOP_N, default 20)
    pub top_n: usize,
    /// Archive to analyse when none is given on the command line (KUDOS_ARCHIVE)
    pub archive_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            top_n: DEFAULT_TOP_N,
            archive_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let debug = lookup("KUDOS_DEBUG").is_some_and(|v| parse_flag(&v));

        let top_n = match lookup("KUDOS_TOP_N") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("KUDOS_TOP_N must be a positive integer, got {v:?}"))?,
            None => DEFAULT_TOP_N,
        };

        let config = Self {
            debug,
            top_n,
            archive_path: lookup("KUDOS_ARCHIVE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        archive: Option<PathBuf>,
        debug: bool,
        top_n: Option<usize>,
    ) -> Result<Self> {
        if archive.is_some() {
            self.archive_path = archive;
        }
        self.debug |= debug;
        if let Some(n) = top_n {
            self.top_n = n;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            anyhow::bail!("Leaderboard length must be at least 1 (check --top or KUDOS_TOP_N)");
        }
        Ok(())
    }

    /// The archive to analyse, or a helpful error if none was configured.
    pub fn require_archive(&self) -> Result<&PathBuf> {
        match &self.archive_path {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No archive given. Pass a path, e.g. `kudos analyse tweets.json`,\n\
                 or set KUDOS_ARCHIVE in your .env file."
            ),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
