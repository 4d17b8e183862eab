//! CLI command implementations.

pub mod profile;
pub mod summary;

use std::path::Path;

use tabprof::{ProfileResult, Profiler};
use tracing::debug;

use crate::cli::ProfileOptions;

/// Read `file` and profile it with the given options.
fn profile_file(
    file: &Path,
    options: &ProfileOptions,
) -> Result<ProfileResult, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let bytes = std::fs::read(file)?;
    debug!(file = %file.display(), size_bytes = bytes.len(), "Read input file");

    let profiler = Profiler::with_config(options.to_config(file));
    Ok(profiler.profile(&bytes)?)
}
