//! fiber-gen library
//!
//! Generates a Go Fiber + htmx project skeleton: a fixed directory layout,
//! files rendered from templates compiled into the binary, and a
//! `go mod init` run in the new project root.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use commands::NewCommand;
pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError};
pub use scaffold::{CommandInitializer, Generator, ModuleInitializer, Stage};
pub use templates::{substitute, TemplateStore, PLACEHOLDER};
