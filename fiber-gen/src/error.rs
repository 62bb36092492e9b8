//! Error types for project generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a generation run can fail
///
/// All variants are fatal for the run. Work already done stays on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A template referenced by the layout is not bundled with the binary
    #[error("template not found: {id}")]
    TemplateNotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// A project directory could not be created
    #[error("error creating directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        /// Directory that failed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// A project file could not be written
    #[error("error creating file {}: {source}", path.display())]
    FileWriteFailed {
        /// File that failed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The module initialization command exited with a non-zero status
    #[error("error running '{command}': {output}")]
    ExternalCommandFailed {
        /// Command line that was run
        command: String,
        /// Captured stdout and stderr, verbatim
        output: String,
    },

    /// The module initialization program could not be started at all
    #[error("could not run '{program}': {source}")]
    CommandUnavailable {
        /// Program that was looked up
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Defaults could not be serialized into the base layer
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// A configuration source was unreadable or held invalid values
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}
