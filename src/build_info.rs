//! Build metadata reported by the CLI and `GET /version`.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version, commit, and build date of the running binary.
///
/// Commit and date come from `BUILD_COMMIT`/`BUILD_DATE` set by the build
/// environment; plain `cargo build` leaves them as "unknown".
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: VERSION,
            commit: option_env!("BUILD_COMMIT").unwrap_or("unknown"),
            build_date: option_env!("BUILD_DATE").unwrap_or("unknown"),
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new()
    }
}
