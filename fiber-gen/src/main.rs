//! fiber-gen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fiber_gen::scaffold::initializer_for;
use fiber_gen::{observability, GeneratorConfig, NewCommand};

#[derive(Parser)]
#[command(name = "fiber-gen")]
#[command(version)]
#[command(about = "Generate Go Fiber + htmx project templates", long_about = None)]
struct Cli {
    /// Project name, used as directory and Go module name
    #[arg(short, long)]
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GeneratorConfig::load()?;
    observability::init(&config.log)?;

    let initializer = initializer_for(&config.init);
    NewCommand::new(cli.name).execute(initializer.as_ref())?;

    Ok(())
}
