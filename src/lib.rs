// drogon-patch - fixes the Jsoncpp/jsoncpp casing mismatch in a vendored
// Drogon CMakeLists.txt so it builds against the Windows jsoncpp package

pub mod config;
pub mod error;
pub mod patcher;
pub mod transform;
pub mod utils;

pub use config::PatchConfig;
pub use error::PatchError;
pub use patcher::{PatchOutcome, Patcher};
pub use transform::{apply_replacements, Replacement, DEFAULT_REPLACEMENTS};

use anyhow::Result;
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr so stdout carries only status lines
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug over warn.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initializing drogon-patch v{}", version());
    Ok(())
}
