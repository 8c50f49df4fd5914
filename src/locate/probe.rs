//! Filesystem probes for executable candidates.
//!
//! A candidate is accepted when it exists, is a regular file, and is marked
//! executable under the current OS's rules: on POSIX any execute permission
//! bit; on Windows an existing file with the expected suffix.

use std::path::Path;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows executability is determined by the file suffix, which the
/// locator already appends, so existence is sufficient.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Check whether a path is an acceptable executable candidate.
pub fn is_candidate(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}
