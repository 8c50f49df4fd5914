//! Subprocess launch information assembly.
//!
//! Combines the executable locator and the setting resolver into everything
//! needed to launch a toolchain subprocess: the executable path and a fully
//! merged environment mapping.
//!
//! The environment starts as a full copy of the baseline shell environment.
//! Required variables are resolved first, in caller order, and a miss aborts
//! the whole assembly. Optional variables follow; an optional variable that
//! resolves to nothing is removed from the copied baseline rather than left
//! holding an unrelated inherited value.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::error::{GolangConfigError, Result};
use crate::host::{View, Window};
use crate::locate::executable_path;
use crate::settings::SettingResolver;

/// Everything needed to launch a toolchain subprocess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubprocessInfo {
    /// Absolute path to the executable.
    pub executable: PathBuf,
    /// The fully merged environment mapping.
    pub env: HashMap<String, String>,
}

impl SubprocessInfo {
    /// Assemble launch information for a tool.
    ///
    /// # Errors
    ///
    /// Returns [`GolangConfigError::ExecutableNotFound`] when the tool is not
    /// on any searched directory, and [`GolangConfigError::RequiredVarMissing`]
    /// when a variable in `required` resolves to nothing in any scope.
    ///
    /// Deterministic: identical collaborator state always yields an identical
    /// result; nothing is cached between calls.
    pub fn assemble(
        resolver: &SettingResolver<'_>,
        tool: &str,
        required: &[&str],
        optional: &[&str],
        view: Option<&dyn View>,
        window: Option<&dyn Window>,
    ) -> Result<Self> {
        let located = executable_path(resolver, tool, view, window).ok_or_else(|| {
            GolangConfigError::ExecutableNotFound {
                tool: tool.to_string(),
            }
        })?;

        let (_, mut env) = resolver.shell().get_env();

        for name in required {
            match resolver.resolve(name, view, window) {
                Some(found) => {
                    debug!("Resolved required {} from the {}", name, found.source);
                    env.insert((*name).to_string(), found.value);
                }
                None => {
                    return Err(GolangConfigError::RequiredVarMissing {
                        var: (*name).to_string(),
                    });
                }
            }
        }

        for name in optional {
            match resolver.resolve(name, view, window) {
                Some(found) => {
                    debug!("Resolved optional {} from the {}", name, found.source);
                    env.insert((*name).to_string(), found.value);
                }
                None => {
                    // Explicit unset semantics: an unconfigured optional
                    // variable must not retain a stale baseline value.
                    if env.remove(*name).is_some() {
                        debug!("Removed unconfigured optional {} from the environment", name);
                    }
                }
            }
        }

        Ok(Self {
            executable: located.path,
            env,
        })
    }
}
