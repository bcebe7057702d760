//! Site configuration management for `pagesplit.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[split]`    | Source document and output directory             |
//! | `[[pages]]`  | Page registry (key, file, icon, modal, placement)|
//! | `[markers]`  | Structural markers delimiting template fragments |
//! | `[restitch]` | Files already-split fragments are read back from |
//! | `[modals]`   | Modal snippet scanner settings                   |
//!
//! The config file is optional: without one, the defaults reproduce the
//! original coffee-site tables. CLI arguments override file values after
//! loading, and all paths are normalized against the root directory.

mod error;
mod markers;
pub mod defaults;
pub mod modals;
pub mod pages;
mod restitch;

pub use markers::Markers;
pub use pages::{PageSpec, Placement};

use error::ConfigError;
use modals::ModalsConfig;
use restitch::RestitchConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// [split] Section
// ============================================================================

/// `[split]` section in pagesplit.toml - source and output locations.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Site root directory. Usually set from the CLI, not the file.
    #[serde(default = "defaults::split::root")]
    #[educe(Default = defaults::split::root())]
    pub root: Option<PathBuf>,

    /// The monolithic source document, relative to root.
    #[serde(default = "defaults::split::source")]
    #[educe(Default = defaults::split::source())]
    pub source: PathBuf,

    /// Output directory, relative to root.
    #[serde(default = "defaults::split::output")]
    #[educe(Default = defaults::split::output())]
    pub output: PathBuf,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing pagesplit.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SplitConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Source and output locations
    #[serde(default)]
    pub split: SourceConfig,

    /// The page registry, in navigation order
    #[serde(default = "defaults::pages::registry")]
    #[educe(Default = defaults::pages::registry())]
    pub pages: Vec<PageSpec>,

    /// Structural markers
    #[serde(default)]
    pub markers: Markers,

    /// Restitch sources
    #[serde(default)]
    pub restitch: RestitchConfig,

    /// Modal snippet scanner settings
    #[serde(default)]
    pub modals: ModalsConfig,
}

impl SplitConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SplitConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.split.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.split.root = Some(path.to_path_buf())
    }

    /// Look up a registry entry by page key
    pub fn page(&self, key: &str) -> Option<&PageSpec> {
        self.pages.iter().find(|p| p.key == key)
    }

    /// Resolve an output-directory-relative file name
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.split.output.join(name)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        // Apply CLI overrides before path normalization
        Self::update_option(&mut self.split.source, cli.source.as_ref());
        Self::update_option(&mut self.split.output, cli.output.as_ref());

        let root = Self::normalize_path(&Self::expand_path(&root));
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.split.source =
            Self::normalize_path(&root.join(Self::expand_path(&self.split.source)));
        self.split.output =
            Self::normalize_path(&root.join(Self::expand_path(&self.split.output)));

        if let Commands::Modals { revision, file } = &cli.command {
            Self::update_option(&mut self.modals.revision, revision.as_ref());
            Self::update_option(&mut self.modals.file, file.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Expand a leading tilde in a configured path
    fn expand_path(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the given command
    pub fn validate(&self, command: &Commands) -> Result<()> {
        if self.pages.is_empty() {
            bail!(ConfigError::Validation(
                "[[pages]] must have at least one entry".into()
            ));
        }

        let mut keys = HashSet::new();
        let mut files = HashSet::new();
        for page in &self.pages {
            if !keys.insert(page.key.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "duplicate page key `{}`",
                    page.key
                )));
            }
            if !files.insert(page.file.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "duplicate output file `{}`",
                    page.file
                )));
            }
        }

        match command {
            Commands::Split => {
                if !self.split.source.is_file() {
                    bail!(ConfigError::Validation(format!(
                        "[split.source] not found: {}",
                        self.split.source.display()
                    )));
                }
            }
            Commands::Modals { .. } => {
                Self::check_command_installed("git")?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(cmd: &str) -> Result<()> {
        which::which(cmd).map_err(|_| {
            ConfigError::Validation(format!("`{cmd}` not found. Please install it first."))
        })?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
