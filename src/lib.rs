//! golangconfig - layered configuration resolution for the Go toolchain.
//!
//! Locates a named toolchain executable and assembles the environment
//! variables needed to run it, merging layered configuration sources with a
//! strict precedence order: view settings > window/project settings > the
//! `golang.sublime-settings` application resource > the baseline shell
//! environment.
//!
//! # Modules
//!
//! - [`cli`] - Diagnostic command-line interface
//! - [`error`] - Error types and result aliases
//! - [`host`] - Collaborator traits for the integration layer, plus system
//!   and mock implementations
//! - [`locate`] - Executable search with per-OS executability rules
//! - [`settings`] - Settings blocks and the priority-ordered scope chain
//! - [`subprocess`] - Subprocess launch info assembly
//!
//! # Example
//!
//! ```
//! use golangconfig::host::{MockApplicationSettings, MockShellEnvironment, MockView};
//! use golangconfig::settings::SettingResolver;
//! use serde_json::json;
//!
//! let shell = MockShellEnvironment::new("/bin/bash");
//! let application = MockApplicationSettings::empty();
//! let view = MockView::new(json!({"GOFLAGS": "-mod=vendor"}));
//!
//! let resolver = SettingResolver::new(&shell, &application);
//! let found = resolver.resolve("GOFLAGS", Some(&view), None).unwrap();
//! assert_eq!(found.value, "-mod=vendor");
//! assert_eq!(found.source.to_string(), "project file");
//! ```

pub mod cli;
pub mod error;
pub mod host;
pub mod locate;
pub mod settings;
pub mod subprocess;

pub use error::{GolangConfigError, Result};
pub use locate::{executable_path, LocatedExecutable};
pub use settings::{ResolvedSetting, SettingResolver, SettingSource, SettingsBlock};
pub use subprocess::SubprocessInfo;
