use std::path::Path;

use suitesift_core::error::SuitesiftError;
use suitesift_core::lines::{added_lines, trimmed_lines};

use crate::process::CommandRunner;

const GIT: &str = "git";

pub fn changed_files_args(sha: &str) -> Vec<String> {
    ["diff", "--no-color", "--no-ext-diff", "--name-only", sha, "HEAD"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Color and external diff drivers stay off: pins are read from plain `+ `
/// lines regardless of the user's git config.
pub fn changed_pins_args(sha: &str, package_file: &str) -> Vec<String> {
    ["diff", "--no-color", "--no-ext-diff", sha, "HEAD", "--", package_file]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Repository-relative paths changed between `sha` and `HEAD`.
pub fn changed_files(
    runner: &dyn CommandRunner,
    source_root: &Path,
    sha: &str,
) -> Result<Vec<String>, SuitesiftError> {
    let out = runner.run(GIT, &changed_files_args(sha), source_root)?;
    Ok(trimmed_lines(&out))
}

/// Lines added to `package_file` between `sha` and `HEAD`, joined with `\n`.
pub fn changed_pins(
    runner: &dyn CommandRunner,
    source_root: &Path,
    sha: &str,
    package_file: &str,
) -> Result<String, SuitesiftError> {
    let out = runner.run(GIT, &changed_pins_args(sha, package_file), source_root)?;
    Ok(added_lines(&out))
}
