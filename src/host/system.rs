//! Host implementations backed by the real system.
//!
//! Used by the CLI, where no editor is present: the baseline environment
//! comes from the process environment and the application settings resource
//! is a JSON file on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{GolangConfigError, Result};
use crate::host::{ApplicationSettings, ShellEnvironment};
use crate::settings::SettingsBlock;

/// Baseline environment read from the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShellEnvironment;

impl SystemShellEnvironment {
    pub fn new() -> Self {
        Self
    }
}

fn shell_identifier() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

impl ShellEnvironment for SystemShellEnvironment {
    fn get_env(&self) -> (String, HashMap<String, String>) {
        (shell_identifier(), std::env::vars().collect())
    }

    fn get_path(&self) -> (String, Vec<PathBuf>) {
        let path = std::env::var_os("PATH").unwrap_or_default();
        (shell_identifier(), std::env::split_paths(&path).collect())
    }
}

/// Application settings resource loaded from a JSON file.
///
/// Loaded once at construction; lifecycle is owned by the integration layer,
/// not by the resolver.
#[derive(Debug, Clone, Default)]
pub struct JsonSettings {
    block: Option<SettingsBlock>,
}

impl JsonSettings {
    /// A settings store with no resource configured.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file whose top level is an object.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GolangConfigError::SettingsNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GolangConfigError::Io(e)
            }
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| GolangConfigError::SettingsParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let block = SettingsBlock::from_value(&value).ok_or_else(|| {
            GolangConfigError::SettingsParseError {
                path: path.to_path_buf(),
                message: "top-level value must be an object".to_string(),
            }
        })?;

        Ok(Self { block: Some(block) })
    }
}

impl ApplicationSettings for JsonSettings {
    fn load(&self, _resource: &str) -> Option<SettingsBlock> {
        self.block.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SETTINGS_RESOURCE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn system_env_includes_path() {
        let shell = SystemShellEnvironment::new();
        let (_, env) = shell.get_env();
        assert!(env.contains_key("PATH"));
    }

    #[test]
    fn system_path_is_split_into_directories() {
        let shell = SystemShellEnvironment::new();
        let (_, dirs) = shell.get_path();
        assert!(!dirs.is_empty());
    }

    #[test]
    fn empty_settings_store_has_no_block() {
        let settings = JsonSettings::empty();
        assert!(settings.load(SETTINGS_RESOURCE).is_none());
    }

    #[test]
    fn load_file_parses_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("golang.sublime-settings");
        fs::write(&path, r#"{"GOPATH": "/go"}"#).unwrap();

        let settings = JsonSettings::load_file(&path).unwrap();
        assert!(settings.load(SETTINGS_RESOURCE).is_some());
    }

    #[test]
    fn load_file_missing_is_settings_not_found() {
        let temp = TempDir::new().unwrap();
        let err = JsonSettings::load_file(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GolangConfigError::SettingsNotFound { .. }));
    }

    #[test]
    fn load_file_rejects_non_object_top_level() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = JsonSettings::load_file(&path).unwrap_err();
        assert!(matches!(err, GolangConfigError::SettingsParseError { .. }));
    }

    #[test]
    fn load_file_rejects_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonSettings::load_file(&path).unwrap_err();
        assert!(matches!(err, GolangConfigError::SettingsParseError { .. }));
    }
}
