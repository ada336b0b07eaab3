use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, Result};
use crate::transform::{Replacement, DEFAULT_REPLACEMENTS};
use crate::utils::join_segments;

/// Where the patch is applied, what it rewrites and on which platform it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchConfig {
    /// Base directory the vendor path is resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Vendor directory, as path segments relative to `root`
    #[serde(default = "default_vendor_dir")]
    pub vendor_dir: Vec<String>,

    /// File name inside the vendor directory
    #[serde(default = "default_target_file")]
    pub target_file: String,

    /// Literal substitutions applied to the target file
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,

    /// Operating system the patch is restricted to
    #[serde(default = "default_required_os")]
    pub required_os: String,

    /// Report what would change without touching the file
    #[serde(default)]
    pub dry_run: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_vendor_dir() -> Vec<String> {
    ["source", "MaterialXView", "drogon"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_target_file() -> String {
    "CMakeLists.txt".to_string()
}

fn default_replacements() -> Vec<Replacement> {
    DEFAULT_REPLACEMENTS.to_vec()
}

fn default_required_os() -> String {
    "windows".to_string()
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            vendor_dir: default_vendor_dir(),
            target_file: default_target_file(),
            replacements: default_replacements(),
            required_os: default_required_os(),
            dry_run: false,
        }
    }
}

impl PatchConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading patch configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| PatchError::config_error(e.to_string(), path))?;

        Self::from_toml_str(&content).map_err(|e| PatchError::config_error(e.to_string(), path))
    }

    /// Use a different base directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolved vendor directory
    pub fn vendor_dir_path(&self) -> PathBuf {
        join_segments(&self.root, &self.vendor_dir)
    }

    /// Resolved target file
    pub fn target_file_path(&self) -> PathBuf {
        self.vendor_dir_path().join(&self.target_file)
    }

    /// Whether `os` is the platform this patch targets
    pub fn matches_os(&self, os: &str) -> bool {
        self.required_os.eq_ignore_ascii_case(os)
    }
}
