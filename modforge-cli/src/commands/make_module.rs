//! `make:module`: generate the files of a module
//!
//! ```bash
//! modforge make:module Billing\\Invoice --model --controller
//! modforge make:module Catalog/Product --all
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use modforge::config::ModforgeConfig;
use modforge::naming::ModuleName;
use modforge::scaffold::{ArtifactOutcome, ArtifactStatus, ModuleGenerator, Selection};
use tracing::debug;

use crate::Outcome;

/// Artifact selection; at least one flag is required
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
#[group(required = true, multiple = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct ArtifactFlags {
    /// Generate every artifact
    #[arg(long)]
    pub all: bool,

    /// Create-table migration
    #[arg(long)]
    pub migration: bool,

    /// Vue component
    #[arg(long)]
    pub vue: bool,

    /// create/edit/index/show views
    #[arg(long)]
    pub view: bool,

    /// Resource controller and web routes
    #[arg(long)]
    pub controller: bool,

    /// Model
    #[arg(long)]
    pub model: bool,

    /// API controller and API routes
    #[arg(long)]
    pub api: bool,
}

impl From<ArtifactFlags> for Selection {
    fn from(flags: ArtifactFlags) -> Self {
        Self {
            all: flags.all,
            migration: flags.migration,
            vue: flags.vue,
            view: flags.view,
            controller: flags.controller,
            model: flags.model,
            api: flags.api,
        }
    }
}

/// Generate the files of a module
#[derive(Debug, Clone, Args)]
pub struct MakeModuleCommand {
    /// Module name (`Billing\Invoice`, `Billing/Invoice`, `Billing::Invoice`)
    pub name: String,

    /// Artifacts to generate
    #[command(flatten)]
    pub flags: ArtifactFlags,
}

impl MakeModuleCommand {
    /// Run the command, printing one line per attempted artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the module name is invalid (before any file is
    /// touched) or output cannot be written.
    pub fn execute(&self, config: &ModforgeConfig, out: &mut impl Write) -> Result<Outcome> {
        let module = ModuleName::parse(&self.name)
            .with_context(|| format!("Invalid module name '{}'", self.name))?;
        let tasks = Selection::from(self.flags).tasks();
        debug!(module = %module, ?tasks, "make:module");

        let report = ModuleGenerator::from_settings(&config.generator).generate(&module, &tasks);
        for outcome in report.outcomes() {
            write_outcome(out, outcome)?;
        }

        Ok(if report.has_failures() {
            Outcome::Failed
        } else {
            Outcome::Success
        })
    }
}

fn write_outcome(out: &mut impl Write, outcome: &ArtifactOutcome) -> Result<()> {
    let line = match outcome.status {
        ArtifactStatus::Created => format!("{} {}", style("✓").green(), style(outcome.message()).green()),
        ArtifactStatus::AlreadyExists => {
            format!("{} {}", style("•").yellow(), style(outcome.message()).yellow())
        }
        ArtifactStatus::Failed(_) => format!("{} {}", style("✗").red(), style(outcome.message()).red()),
    };

    match &outcome.path {
        Some(path) => writeln!(out, "{line} {}", style(path.display()).dim())?,
        None => writeln!(out, "{line}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Cli, Command};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("modforge").chain(args.iter().copied()))
    }

    #[test]
    fn test_requires_at_least_one_flag() {
        let err = parse(&["make:module", "Billing\\Invoice"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parses_flags() {
        let cli = parse(&["make:module", "Billing\\Invoice", "--model", "--api"]).unwrap();
        let Command::MakeModule(cmd) = cli.command else {
            panic!("expected make:module");
        };
        assert_eq!(cmd.name, "Billing\\Invoice");
        assert!(cmd.flags.model);
        assert!(cmd.flags.api);
        assert!(!cmd.flags.controller);
    }

    #[test]
    fn test_all_flag_selects_every_task() {
        let cli = parse(&["make:module", "Catalog/Product", "--all"]).unwrap();
        let Command::MakeModule(cmd) = cli.command else {
            panic!("expected make:module");
        };
        let selection = modforge::scaffold::Selection::from(cmd.flags);
        assert_eq!(selection.tasks(), modforge::scaffold::Task::ALL.to_vec());
    }

    #[test]
    fn test_name_is_required() {
        assert!(parse(&["make:module", "--all"]).is_err());
    }
}
