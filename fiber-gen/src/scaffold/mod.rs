//! Project scaffolding
//!
//! Maps the fixed project layout onto bundled templates, writes it to disk
//! and initializes the Go module.

pub mod generator;
pub mod layout;
pub mod materializer;
pub mod module_init;

pub use generator::{GenerationReport, Generator, Stage};
pub use layout::{ProjectFile, PROJECT_DIRECTORIES, PROJECT_FILES};
pub use materializer::{Materialized, Materializer, RenderedFile};
pub use module_init::{initializer_for, CommandInitializer, ModuleInitializer, SkipInitializer};
