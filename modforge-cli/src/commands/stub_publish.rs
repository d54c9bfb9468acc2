//! `stub:publish`: copy the built-in stubs into the project

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use modforge::config::ModforgeConfig;
use modforge::scaffold::StubRepository;

/// Copy the built-in stubs for customization
#[derive(Debug, Clone, Default, Args)]
pub struct StubPublishCommand {
    /// Target directory (defaults to the configured stub directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl StubPublishCommand {
    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a stub cannot be written.
    pub fn execute(&self, config: &ModforgeConfig, out: &mut impl Write) -> Result<()> {
        let dir = self.dir.as_ref().unwrap_or(&config.generator.stub_dir);
        let written = StubRepository::publish(dir)
            .with_context(|| format!("Failed to publish stubs to {}", dir.display()))?;

        for path in &written {
            writeln!(out, "{} {}", style("✓").green(), path.display())?;
        }
        writeln!(
            out,
            "{} stub(s) published to {}",
            style(written.len()).bold(),
            dir.display()
        )?;
        Ok(())
    }
}
