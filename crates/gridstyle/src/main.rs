//! Command-line front end: print the grid properties for a layout configuration.

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use gridstyle::{Mode, OutputFormat, read_config, render, resolve};
use std::io::{Write as _, stdout};
use std::path::PathBuf;

/// Resolve a grid layout configuration into CSS properties.
#[derive(Debug, Parser)]
#[command(name = "gridstyle", version, about)]
struct Cli {
    /// Container or item mode to resolve.
    #[arg(long, value_enum, default_value_t = Mode::Layout)]
    mode: Mode,

    /// JSON configuration file; `-` reads standard input.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rendered children, used when the configuration has no `items`.
    #[arg(long, default_value_t = 1)]
    children: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,

    /// Class name for CSS output.
    #[arg(long, default_value = "grid")]
    class: String,
}

/// Main entry point for the gridstyle CLI tool.
///
/// # Errors
/// Returns an error if the configuration cannot be read or parsed, or if
/// writing the output fails.
fn main() -> Result<()> {
    let _log_init: Result<(), _> =
        Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).try_init();

    let cli = Cli::parse();
    let text = read_config(cli.config.as_deref())?;
    let mapping = resolve(cli.mode, &text, cli.children)?;
    let rendered = render(&mapping, cli.format, &cli.class)?;

    let mut out = stdout().lock();
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
