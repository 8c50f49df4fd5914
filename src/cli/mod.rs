//! Command-line interface.
//!
//! A diagnostic front end over the resolution core, running against the real
//! system environment (no view/window scope, since no host editor is
//! present). The application settings resource can be supplied as a JSON
//! file via `--settings`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{GolangConfigError, Result};
use crate::host::{JsonSettings, SystemShellEnvironment};
use crate::locate::executable_path;
use crate::settings::SettingResolver;
use crate::subprocess::SubprocessInfo;

/// Layered configuration resolution and executable discovery for the Go
/// toolchain.
#[derive(Debug, Parser)]
#[command(name = "golangconfig", version, about)]
pub struct Cli {
    /// Enable debug logging of scope resolution
    #[arg(long, global = true)]
    pub debug: bool,

    /// JSON file to use as the application settings resource
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Locate a tool on the effective PATH
    Which {
        /// Tool name, e.g. "go" or "gofmt"
        tool: String,
    },

    /// Resolve setting values and show their provenance
    Setting {
        /// Setting names, e.g. GOPATH GOROOT
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Assemble subprocess launch info for a tool
    Env {
        /// Tool name, e.g. "go"
        tool: String,

        /// Environment variables that must resolve
        #[arg(long = "require", value_name = "VAR")]
        required: Vec<String>,

        /// Environment variables to overlay when configured
        #[arg(long = "optional", value_name = "VAR")]
        optional: Vec<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the parsed command against the system environment.
pub fn run(cli: &Cli) -> Result<()> {
    let shell = SystemShellEnvironment::new();
    let application = match &cli.settings {
        Some(path) => JsonSettings::load_file(path)?,
        None => JsonSettings::empty(),
    };
    let resolver = SettingResolver::new(&shell, &application);

    match &cli.command {
        Commands::Which { tool } => {
            let located = executable_path(&resolver, tool, None, None)
                .ok_or_else(|| GolangConfigError::ExecutableNotFound { tool: tool.clone() })?;
            println!("{} ({})", located.path.display(), located.source);
        }
        Commands::Setting { names } => {
            for name in names {
                match resolver.resolve(name, None, None) {
                    Some(found) => println!("{}={} ({})", name, found.value, found.source),
                    None => println!("{} is not set", name),
                }
            }
        }
        Commands::Env {
            tool,
            required,
            optional,
            json,
        } => {
            let required: Vec<&str> = required.iter().map(String::as_str).collect();
            let optional: Vec<&str> = optional.iter().map(String::as_str).collect();
            let info = SubprocessInfo::assemble(&resolver, tool, &required, &optional, None, None)?;

            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&info).map_err(anyhow::Error::from)?
                );
            } else {
                println!("{}", info.executable.display());
                let mut vars: Vec<_> = info.env.iter().collect();
                vars.sort();
                for (name, value) in vars {
                    println!("{}={}", name, value);
                }
            }
        }
    }

    Ok(())
}
