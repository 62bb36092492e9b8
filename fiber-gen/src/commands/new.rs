//! Project generation command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::scaffold::{GenerationReport, Generator, ModuleInitializer};
use crate::templates::TemplateStore;

/// Create a new Go Fiber + htmx project
pub struct NewCommand {
    name: String,
    output_dir: PathBuf,
}

impl NewCommand {
    /// Create a command generating `name` in the current directory
    ///
    /// The name is used as is. Whatever `go mod init` rejects fails the run
    /// once the files are written.
    #[must_use]
    pub fn new(name: String) -> Self {
        let output_dir = PathBuf::from(&name);
        Self { name, output_dir }
    }

    /// Create a command generating `name` under `parent`
    #[must_use]
    pub fn in_dir(name: String, parent: &Path) -> Self {
        let output_dir = parent.join(&name);
        Self { name, output_dir }
    }

    /// Project root the command writes into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns the first generation error, with the project name attached.
    pub fn execute(&self, initializer: &dyn ModuleInitializer) -> Result<GenerationReport> {
        println!(
            "{} {} {}",
            style("Generating").green().bold(),
            style("Go Fiber project:").bold(),
            style(&self.name).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let store = TemplateStore::embedded();
        let result = Generator::new(&store, &self.name, &self.output_dir)
            .run_with_progress(initializer, |stage| spinner.set_message(stage.message()));

        spinner.finish_and_clear();

        let report =
            result.with_context(|| format!("Failed to generate project '{}'", self.name))?;
        info!(root = %report.project_root.display(), "project generated");

        self.print_success();
        Ok(report)
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!(
            "{} {}",
            style("✓ Successfully initialized Go module:").green().bold(),
            style(&self.name).cyan()
        );
        println!("{}", style("✓ Generated views").green());
        println!("{}", style("✓ Generated public assets").green());
        println!("{}", style("✓ Generated routes and controllers").green());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.output_dir.display())).cyan()
        );
        println!();
        println!("  {} Fetch dependencies and start the server:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("make run").cyan());
        println!();
        println!("  {} Open in browser:", style("3.").cyan());
        println!("     {}", style("http://localhost:3000").cyan().underlined());
        println!();
    }
}
