//! Availability and version check for the `vendor` tool.

use crate::ops::errors::VendorError;
use crate::tools::Vendorer;

/// Oldest `vendor` build that understands `wgo` mode.
pub const MIN_VENDOR_BUILD: u32 = 3;

const USAGE_BANNER: &str = "Usage: vendor";
const VERSION_BANNER: &str = "vendor build ";

/// Check that `vendor` is installed and at least build `min_build`.
///
/// Returns the detected build number.
pub fn ensure_vendor_available(vendorer: &dyn Vendorer, min_build: u32) -> Result<u32, VendorError> {
    check_usage_banner(&vendorer.usage_banner())?;
    let build = check_version_banner(&vendorer.version_banner(), min_build)?;
    tracing::debug!("found vendor build {}", build);
    Ok(build)
}

/// The bare invocation must print its usage on stderr.
pub fn check_usage_banner(stderr: &str) -> Result<(), VendorError> {
    if stderr.starts_with(USAGE_BANNER) {
        Ok(())
    } else {
        Err(VendorError::ToolMissing)
    }
}

/// `vendor -v` must print `vendor build <N>` with `N >= min_build`.
pub fn check_version_banner(stdout: &str, min_build: u32) -> Result<u32, VendorError> {
    if !stdout.starts_with(VERSION_BANNER) {
        return Err(VendorError::ToolOutdated {
            found: None,
            required: min_build,
        });
    }

    let token = stdout.split_whitespace().nth(2).unwrap_or_default();
    match token.parse::<u32>() {
        Ok(build) if build >= min_build => Ok(build),
        _ => Err(VendorError::ToolOutdated {
            found: Some(token.to_string()),
            required: min_build,
        }),
    }
}
