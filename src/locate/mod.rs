//! Executable location.
//!
//! Finds a named tool by scanning an ordered list of directories: a `PATH`
//! override from the settings scopes when one is configured, otherwise the
//! baseline shell PATH. The first directory containing an existing, regular,
//! executable file named after the tool (plus the OS executable suffix)
//! wins.
//!
//! Absence is a normal outcome, signaled as `None`; whether it is fatal is
//! the caller's decision.

pub mod probe;

use std::path::PathBuf;

use tracing::debug;

use crate::host::{View, Window};
use crate::settings::{SettingResolver, SettingSource};

/// An executable found on the effective search path.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedExecutable {
    /// Absolute path to the executable.
    pub path: PathBuf,
    /// Where the effective search path came from.
    pub source: SettingSource,
}

/// Locate a tool on the effective search path.
///
/// The `PATH` setting is resolved through the view/window/application scopes
/// only; when none supplies an override, the baseline shell PATH is used and
/// the provenance is the shell identifier.
pub fn executable_path(
    resolver: &SettingResolver<'_>,
    tool: &str,
    view: Option<&dyn View>,
    window: Option<&dyn Window>,
) -> Option<LocatedExecutable> {
    let (dirs, source) = match resolver.resolve_scoped("PATH", view, window) {
        Some(found) => {
            let dirs: Vec<PathBuf> = std::env::split_paths(&found.value).collect();
            (dirs, found.source)
        }
        None => {
            let (shell, dirs) = resolver.shell().get_path();
            (dirs, SettingSource::ShellEnv(shell))
        }
    };

    let file_name = format!("{}{}", tool, std::env::consts::EXE_SUFFIX);
    for dir in &dirs {
        let candidate = dir.join(&file_name);
        if probe::is_candidate(&candidate) {
            debug!("Found {} at {} (PATH from {})", tool, candidate.display(), source);
            return Some(LocatedExecutable {
                path: candidate,
                source,
            });
        }
    }

    debug!(
        "No executable named {} on any of {} searched directories",
        file_name,
        dirs.len()
    );
    None
}
