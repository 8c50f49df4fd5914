//! Layered settings resolution.
//!
//! This module implements the setting-resolution core:
//! - Block representation and OS-aware shape classification in [`block`]
//! - The priority-ordered scope chain in [`resolver`]
//!
//! Precedence, most specific first: view > window > application settings
//! resource > baseline shell environment. Within a scope, an OS-aware block
//! prefers the current platform's sub-block over flat keys.

pub mod block;
pub mod resolver;

pub use block::{BlockShape, Lookup, Platform, SettingsBlock, PLATFORM_KEYS};
pub use resolver::{ResolvedSetting, SettingResolver, SettingSource, SETTINGS_RESOURCE};
