//! Layered setting resolution.
//!
//! Resolves a setting by checking scopes in priority order:
//! 1. View settings (per-file)
//! 2. Window settings (project-level)
//! 3. The `golang.sublime-settings` application resource
//! 4. The baseline shell environment
//!
//! A scope falls through to the next when it is absent, the key is absent,
//! the block's OS-aware shape is malformed, or the value fails the string
//! type check. Only the baseline environment applies the extra rule that the
//! value must name a directory that exists on disk.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::host::{ApplicationSettings, ShellEnvironment, View, Window};
use crate::settings::block::{value_type_name, Platform, SettingsBlock};

/// Name of the application-level settings resource.
pub const SETTINGS_RESOURCE: &str = "golang.sublime-settings";

/// Which scope supplied a resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// View or window settings.
    ProjectFile { os_specific: bool },
    /// The application settings resource.
    Application { os_specific: bool },
    /// The baseline shell environment; carries the shell identifier.
    ShellEnv(String),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectFile { os_specific: false } => write!(f, "project file"),
            Self::ProjectFile { os_specific: true } => write!(f, "project file (os-specific)"),
            Self::Application { os_specific: false } => write!(f, "{}", SETTINGS_RESOURCE),
            Self::Application { os_specific: true } => {
                write!(f, "{} (os-specific)", SETTINGS_RESOURCE)
            }
            Self::ShellEnv(shell) => write!(f, "{}", shell),
        }
    }
}

/// A resolved setting value with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSetting {
    /// The effective value.
    pub value: String,
    /// Which scope supplied it.
    pub source: SettingSource,
}

/// Which kind of settings scope a block came from, for provenance labels.
#[derive(Clone, Copy)]
enum ScopeKind {
    Project,
    Application,
}

impl ScopeKind {
    fn source(self, os_specific: bool) -> SettingSource {
        match self {
            ScopeKind::Project => SettingSource::ProjectFile { os_specific },
            ScopeKind::Application => SettingSource::Application { os_specific },
        }
    }
}

/// Resolves settings against the host collaborators.
///
/// Holds no state beyond the collaborator references; every resolution reads
/// their current snapshots, so results are deterministic for unchanged
/// collaborator state.
///
/// # Example
///
/// ```
/// use golangconfig::host::{MockApplicationSettings, MockShellEnvironment, MockView};
/// use golangconfig::settings::SettingResolver;
/// use serde_json::json;
///
/// let shell = MockShellEnvironment::new("/bin/bash");
/// let application = MockApplicationSettings::empty();
/// let view = MockView::new(json!({"GOOS": "windows"}));
///
/// let resolver = SettingResolver::new(&shell, &application);
/// let found = resolver.resolve("GOOS", Some(&view), None).unwrap();
/// assert_eq!(found.value, "windows");
/// assert_eq!(found.source.to_string(), "project file");
/// ```
#[derive(Clone, Copy)]
pub struct SettingResolver<'a> {
    shell: &'a dyn ShellEnvironment,
    application: &'a dyn ApplicationSettings,
    platform: Platform,
}

impl<'a> SettingResolver<'a> {
    /// Create a resolver for the current platform.
    pub fn new(shell: &'a dyn ShellEnvironment, application: &'a dyn ApplicationSettings) -> Self {
        Self::with_platform(shell, application, Platform::current())
    }

    /// Create a resolver for an explicit platform (for testing OS-aware
    /// blocks cross-platform).
    pub fn with_platform(
        shell: &'a dyn ShellEnvironment,
        application: &'a dyn ApplicationSettings,
        platform: Platform,
    ) -> Self {
        Self {
            shell,
            application,
            platform,
        }
    }

    /// The baseline shell environment collaborator.
    pub fn shell(&self) -> &dyn ShellEnvironment {
        self.shell
    }

    /// Resolve a setting through the full scope chain.
    ///
    /// Returns `None` when no scope supplies a usable value. The baseline
    /// environment contributes a value only when it names a directory that
    /// exists on the filesystem; anything else is logged and skipped.
    pub fn resolve(
        &self,
        name: &str,
        view: Option<&dyn View>,
        window: Option<&dyn Window>,
    ) -> Option<ResolvedSetting> {
        if let Some(found) = self.resolve_scoped(name, view, window) {
            return Some(found);
        }

        let (shell, env) = self.shell.get_env();
        let value = env.get(name)?;
        if !Path::new(value).is_dir() {
            debug!(
                "The {} environment variable value {:?} does not exist on the filesystem; ignoring",
                name, value
            );
            return None;
        }
        Some(ResolvedSetting {
            value: value.clone(),
            source: SettingSource::ShellEnv(shell),
        })
    }

    /// Resolve a setting through the three settings scopes only, without the
    /// baseline-environment fallback.
    ///
    /// Used for override-style settings such as `PATH`, where the baseline
    /// value is obtained separately and must not go through the
    /// directory-existence check.
    pub fn resolve_scoped(
        &self,
        name: &str,
        view: Option<&dyn View>,
        window: Option<&dyn Window>,
    ) -> Option<ResolvedSetting> {
        if let Some(view) = view {
            if let Some(block) = view.settings_block() {
                if let Some(found) = self.lookup(&block, name, ScopeKind::Project) {
                    return Some(found);
                }
            }
        }
        if let Some(window) = window {
            if let Some(block) = window.project_settings_block() {
                if let Some(found) = self.lookup(&block, name, ScopeKind::Project) {
                    return Some(found);
                }
            }
        }
        if let Some(block) = self.application.load(SETTINGS_RESOURCE) {
            if let Some(found) = self.lookup(&block, name, ScopeKind::Application) {
                return Some(found);
            }
        }
        None
    }

    /// Look up a setting in one scope's block, type-checking the value.
    ///
    /// Non-string values (including an explicit `null`) fail the type check,
    /// which is logged and skips the scope.
    fn lookup(&self, block: &SettingsBlock, name: &str, kind: ScopeKind) -> Option<ResolvedSetting> {
        let found = block.get(name, self.platform)?;
        let source = kind.source(found.os_specific);
        match found.value.as_str() {
            Some(value) => Some(ResolvedSetting {
                value: value.to_string(),
                source,
            }),
            None => {
                debug!(
                    "The {} setting from the {} is not a string, it is {}; ignoring",
                    name,
                    source,
                    value_type_name(found.value)
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_file_labels() {
        assert_eq!(
            SettingSource::ProjectFile { os_specific: false }.to_string(),
            "project file"
        );
        assert_eq!(
            SettingSource::ProjectFile { os_specific: true }.to_string(),
            "project file (os-specific)"
        );
    }

    #[test]
    fn application_labels() {
        assert_eq!(
            SettingSource::Application { os_specific: false }.to_string(),
            "golang.sublime-settings"
        );
        assert_eq!(
            SettingSource::Application { os_specific: true }.to_string(),
            "golang.sublime-settings (os-specific)"
        );
    }

    #[test]
    fn shell_env_label_is_the_shell_identifier() {
        assert_eq!(
            SettingSource::ShellEnv("/bin/zsh".into()).to_string(),
            "/bin/zsh"
        );
    }
}
