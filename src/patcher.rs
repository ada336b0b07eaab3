use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::PatchConfig;
use crate::error::Result;
use crate::transform::{apply_replacements, needs_patch};
use crate::utils::{dir_exists, display_path, file_exists, read_file_to_string, write_file};

/// How a patch run ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Running on a platform the patch does not apply to
    PlatformSkipped { os: String },
    /// The vendor directory is not where it is expected
    VendorDirMissing { dir: PathBuf },
    /// The vendor directory has no target file
    TargetFileMissing { dir: PathBuf, file: String },
    /// The file already uses the expected spelling
    Unchanged { path: PathBuf },
    /// The file was rewritten
    Patched { path: PathBuf, replacements: usize },
    /// Dry run: the file would have been rewritten
    WouldPatch { path: PathBuf, replacements: usize },
}

impl PatchOutcome {
    /// Whether the target file now carries the patched spelling
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Unchanged { .. } | Self::Patched { .. })
    }

    /// Whether the file on disk was modified
    pub fn wrote_file(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlatformSkipped { .. } => write!(f, "Not running on Windows. Skipping patch."),
            Self::VendorDirMissing { dir } => {
                write!(f, "Drogon directory not found: {}", display_path(dir).display())
            }
            Self::TargetFileMissing { dir, file } => {
                write!(f, "{} not found in {}", file, display_path(dir).display())
            }
            Self::Unchanged { path } => {
                write!(f, "No changes needed in {}", display_path(path).display())
            }
            Self::Patched { path, .. } => write!(f, "Patched {}", display_path(path).display()),
            Self::WouldPatch { path, replacements } => write!(
                f,
                "Would patch {} ({} replacement(s))",
                display_path(path).display(),
                replacements
            ),
        }
    }
}

/// Rewrites the vendored Drogon build file
pub struct Patcher {
    config: PatchConfig,
}

impl Patcher {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    /// Apply the patch for the platform this binary was built for
    pub fn apply_patch_current_os(&self) -> Result<PatchOutcome> {
        self.apply_patch(std::env::consts::OS)
    }

    /// Check the platform and the vendor tree, then rewrite the target file
    /// if any replacement matches.
    ///
    /// Only read and write failures are errors; every other early exit is a
    /// successful outcome that leaves the filesystem untouched.
    pub fn apply_patch(&self, os: &str) -> Result<PatchOutcome> {
        if !self.config.matches_os(os) {
            info!("Skipping patch on {}", os);
            return Ok(PatchOutcome::PlatformSkipped { os: os.to_string() });
        }

        let dir = self.config.vendor_dir_path();
        if !dir_exists(&dir) {
            info!("Vendor directory not found: {}", dir.display());
            return Ok(PatchOutcome::VendorDirMissing { dir });
        }

        let path = self.config.target_file_path();
        if !file_exists(&path) {
            info!("Target file not found: {}", path.display());
            return Ok(PatchOutcome::TargetFileMissing {
                dir,
                file: self.config.target_file.clone(),
            });
        }

        let original = read_file_to_string(&path).map_err(|e| {
            error!("Failed to read {}: {}", path.display(), e);
            e
        })?;

        if !needs_patch(&original, &self.config.replacements) {
            info!("No changes needed in {}", path.display());
            return Ok(PatchOutcome::Unchanged { path });
        }

        // A pattern can match and still rewrite to identical text
        let transformed = apply_replacements(&original, &self.config.replacements);
        if !transformed.changed(&original) {
            info!("No changes needed in {}", path.display());
            return Ok(PatchOutcome::Unchanged { path });
        }

        let replacements = transformed.total_replacements();
        if self.config.dry_run {
            info!(
                "Dry run: {} replacement(s) pending in {}",
                replacements,
                path.display()
            );
            return Ok(PatchOutcome::WouldPatch { path, replacements });
        }

        write_file(&path, &transformed.content).map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            e
        })?;
        debug!("Replacement counts: {:?}", transformed.counts);
        info!("Patched {} ({} replacement(s))", path.display(), replacements);

        Ok(PatchOutcome::Patched { path, replacements })
    }
}
