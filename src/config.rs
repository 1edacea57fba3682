use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".xtextrc.json";

/// Source, markup and template files scanned when no includes are configured.
pub const DEFAULT_INCLUDES: &[&str] = &["*.cs", "*.aspx", "*.ascx", "*.Master"];

pub const DEFAULT_CATALOG_DIR: &str = "POs";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File-name globs of the files to scan.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Directories whose direct children are never scanned.
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Catalog directory, relative to the scan root.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
}

fn default_includes() -> Vec<String> {
    DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_catalog_dir() -> String {
    DEFAULT_CATALOG_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            excludes: Vec::new(),
            catalog_dir: default_catalog_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `includes` is invalid or the
    /// catalog directory is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        if self.catalog_dir.trim().is_empty() {
            anyhow::bail!("'catalogDir' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
