//! `routes`: show the route groups the loader would register

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use modforge::config::ModforgeConfig;
use modforge::routes::{RouteGroup, RouteLoader};

/// Show discovered route groups
#[derive(Debug, Clone, Default, Args)]
pub struct RoutesCommand {
    /// Print the groups as JSON
    #[arg(long)]
    pub json: bool,
}

impl RoutesCommand {
    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if the module registry is malformed or output cannot
    /// be written.
    pub fn execute(&self, config: &ModforgeConfig, out: &mut impl Write) -> Result<()> {
        let loader = RouteLoader::from_config(config).context("Invalid module configuration")?;
        let groups = loader.plan();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &groups)
                .context("Failed to serialize route groups")?;
            writeln!(out)?;
            return Ok(());
        }

        if groups.is_empty() {
            writeln!(
                out,
                "{} {}",
                style("No route files found under").yellow(),
                style(loader.base_path().display()).dim()
            )?;
            return Ok(());
        }

        for group in &groups {
            write_group(out, group)?;
        }
        Ok(())
    }
}

fn write_group(out: &mut impl Write, group: &RouteGroup) -> Result<()> {
    let prefix = group
        .prefix
        .as_deref()
        .map_or_else(|| "/".to_string(), |p| format!("/{p}"));
    let middleware = if group.middleware.is_empty() {
        "-".to_string()
    } else {
        group.middleware.join(", ")
    };

    writeln!(
        out,
        "{:<4} {:<24} {}/{}  [{}]  {}",
        group.kind,
        prefix,
        group.module,
        group.submodule,
        middleware,
        style(&group.namespace).dim()
    )?;
    Ok(())
}
