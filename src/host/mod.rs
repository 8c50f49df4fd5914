//! Host collaborator interfaces.
//!
//! The resolution core never talks to an editor, a shell, or a settings store
//! directly. It consumes the narrow traits in this module, implemented by the
//! host integration layer:
//!
//! - [`ShellEnvironment`] - the OS shell identifier and its inherited
//!   environment, the lowest-precedence configuration source
//! - [`View`] - per-file settings scope (highest precedence)
//! - [`Window`] - window/project-level settings scope
//! - [`ApplicationSettings`] - the named global settings resource
//!
//! Each accessor returns a fresh snapshot; nothing is cached between calls,
//! so repeated resolutions always observe the collaborators' current state.
//!
//! [`system`] provides real implementations backed by the process
//! environment and JSON settings files, used by the CLI. [`mock`] provides
//! configurable in-memory implementations for tests.

pub mod mock;
pub mod system;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::settings::SettingsBlock;

pub use mock::{MockApplicationSettings, MockShellEnvironment, MockView, MockWindow};
pub use system::{JsonSettings, SystemShellEnvironment};

/// The OS shell and the environment it supplies.
///
/// The shell identifier (typically the shell's path, e.g. `/bin/bash`)
/// doubles as the provenance label for values resolved from the baseline
/// environment.
pub trait ShellEnvironment {
    /// The shell identifier and the full inherited environment mapping.
    fn get_env(&self) -> (String, HashMap<String, String>);

    /// The shell identifier and the PATH entries, pre-split on the OS
    /// path-list separator.
    fn get_path(&self) -> (String, Vec<PathBuf>);
}

/// A per-file settings scope.
pub trait View {
    /// The view's settings block, already extracted from the host's
    /// `golang` namespace key, if one is configured.
    fn settings_block(&self) -> Option<SettingsBlock>;
}

/// A window/project-level settings scope.
pub trait Window {
    /// The project-level settings block, already extracted from the host's
    /// `golang` namespace key, if one is configured.
    fn project_settings_block(&self) -> Option<SettingsBlock>;
}

/// The application-level settings resource store.
///
/// Constructed and owned by the integration layer with its own load-once
/// lifecycle; the resolver only ever asks it for a named resource.
pub trait ApplicationSettings {
    /// Load the named settings resource, if it exists.
    fn load(&self, resource: &str) -> Option<SettingsBlock>;
}
