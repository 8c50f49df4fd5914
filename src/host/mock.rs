//! Mock host implementations for testing.
//!
//! Configurable in-memory collaborators used by the crate's own tests and
//! available to downstream integration layers for theirs.
//!
//! # Example
//!
//! ```
//! use golangconfig::host::{MockApplicationSettings, MockShellEnvironment, MockView};
//! use golangconfig::settings::SettingResolver;
//! use serde_json::json;
//!
//! let shell = MockShellEnvironment::new("/bin/bash").set("GOOS", "linux");
//! let application = MockApplicationSettings::empty();
//! let view = MockView::new(json!({"GOARCH": "arm64"}));
//!
//! let resolver = SettingResolver::new(&shell, &application);
//! let found = resolver.resolve("GOARCH", Some(&view), None).unwrap();
//! assert_eq!(found.value, "arm64");
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::host::{ApplicationSettings, ShellEnvironment, View, Window};
use crate::settings::SettingsBlock;

/// Mock baseline shell environment with a fixed shell and variable set.
#[derive(Debug, Clone, Default)]
pub struct MockShellEnvironment {
    shell: String,
    vars: HashMap<String, String>,
}

impl MockShellEnvironment {
    /// Create a mock for the given shell identifier with no variables.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            vars: HashMap::new(),
        }
    }

    /// Add a variable (builder style).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ShellEnvironment for MockShellEnvironment {
    fn get_env(&self) -> (String, HashMap<String, String>) {
        (self.shell.clone(), self.vars.clone())
    }

    fn get_path(&self) -> (String, Vec<PathBuf>) {
        let dirs = self
            .vars
            .get("PATH")
            .map(|path| std::env::split_paths(path).collect())
            .unwrap_or_default();
        (self.shell.clone(), dirs)
    }
}

/// Mock view scope holding an optional settings block.
#[derive(Debug, Clone, Default)]
pub struct MockView {
    block: Option<SettingsBlock>,
}

impl MockView {
    /// Create a view whose settings block is the given JSON object.
    pub fn new(settings: Value) -> Self {
        Self {
            block: SettingsBlock::from_value(&settings),
        }
    }

    /// Create a view with no settings block.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl View for MockView {
    fn settings_block(&self) -> Option<SettingsBlock> {
        self.block.clone()
    }
}

/// Mock window scope holding an optional project settings block.
#[derive(Debug, Clone, Default)]
pub struct MockWindow {
    block: Option<SettingsBlock>,
}

impl MockWindow {
    /// Create a window whose project settings block is the given JSON object.
    pub fn new(settings: Value) -> Self {
        Self {
            block: SettingsBlock::from_value(&settings),
        }
    }

    /// Create a window with no project settings block.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl Window for MockWindow {
    fn project_settings_block(&self) -> Option<SettingsBlock> {
        self.block.clone()
    }
}

/// Mock application settings store holding an optional settings block.
#[derive(Debug, Clone, Default)]
pub struct MockApplicationSettings {
    block: Option<SettingsBlock>,
}

impl MockApplicationSettings {
    /// Create a store whose resource is the given JSON object.
    pub fn new(settings: Value) -> Self {
        Self {
            block: SettingsBlock::from_value(&settings),
        }
    }

    /// Create a store with no resource configured.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ApplicationSettings for MockApplicationSettings {
    fn load(&self, _resource: &str) -> Option<SettingsBlock> {
        self.block.clone()
    }
}
