//! Project generation pipeline
//!
//! Runs the steps strictly in order:
//! 1. Render every template (no disk access)
//! 2. Create the directory layout
//! 3. Write the files
//! 4. Initialize the Go module
//!
//! The first failure aborts the run and is returned as is.

use std::path::{Path, PathBuf};

use tracing::instrument;

use super::layout::{PROJECT_DIRECTORIES, PROJECT_FILES};
use super::materializer::{Materialized, Materializer};
use super::module_init::ModuleInitializer;
use crate::error::GenerateError;
use crate::templates::TemplateStore;

/// Progress of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing done yet
    Start,
    /// Directory layout exists
    DirectoriesCreated,
    /// Every template file is written
    FilesWritten,
    /// The module init command succeeded
    ModuleInitialized,
    /// Run complete
    Done,
}

impl Stage {
    /// Short description for progress output
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Start => "Rendering templates...",
            Self::DirectoriesCreated => "Writing project files...",
            Self::FilesWritten => "Initializing Go module...",
            Self::ModuleInitialized => "Finishing up...",
            Self::Done => "Done",
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Project root that was populated
    pub project_root: PathBuf,
    /// Directories and files put on disk
    pub materialized: Materialized,
    /// Output captured from the module init command
    pub init_output: String,
}

/// Generates a project named `project_name` into `project_root`
pub struct Generator<'a> {
    store: &'a TemplateStore,
    project_name: &'a str,
    project_root: &'a Path,
}

impl<'a> Generator<'a> {
    /// Create a generator
    #[must_use]
    pub const fn new(
        store: &'a TemplateStore,
        project_name: &'a str,
        project_root: &'a Path,
    ) -> Self {
        Self {
            store,
            project_name,
            project_root,
        }
    }

    /// Run the pipeline without progress reporting
    ///
    /// # Errors
    ///
    /// See [`Self::run_with_progress`].
    pub fn run(
        &self,
        initializer: &dyn ModuleInitializer,
    ) -> Result<GenerationReport, GenerateError> {
        self.run_with_progress(initializer, |_| {})
    }

    /// Run the pipeline, calling `on_stage` as each stage is reached
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerateError`] raised by any step. Files and
    /// directories created before the failure are left in place.
    #[instrument(
        skip_all,
        fields(project = %self.project_name, root = %self.project_root.display())
    )]
    pub fn run_with_progress(
        &self,
        initializer: &dyn ModuleInitializer,
        mut on_stage: impl FnMut(Stage),
    ) -> Result<GenerationReport, GenerateError> {
        on_stage(Stage::Start);
        let materialized = Materializer::new(self.store, self.project_name).materialize(
            self.project_root,
            PROJECT_DIRECTORIES,
            PROJECT_FILES,
            &mut on_stage,
        )?;

        let init_output = initializer.init_module(self.project_root, self.project_name)?;
        on_stage(Stage::ModuleInitialized);

        on_stage(Stage::Done);
        Ok(GenerationReport {
            project_root: self.project_root.to_path_buf(),
            materialized,
            init_output,
        })
    }
}
