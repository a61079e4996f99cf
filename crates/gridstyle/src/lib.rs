//! Load a layout configuration, resolve it and render the grid properties.
//!
//! Shared by the `gridstyle` binary and its tests.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use css_grid::{
    GridLayoutConfig, HorizontalConfig, ItemConfig, StyleMapping, VerticalConfig,
    resolve_horizontal, resolve_item, resolve_layout, resolve_vertical,
};
use css_style_attr::class_selector;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::{from_str, to_string_pretty};
use std::fs::read_to_string;
use std::io::{Read as _, stdin};
use std::path::Path;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Which resolver to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Explicit columns and rows.
    Layout,
    /// Items flowing as columns, optionally responsive.
    Horizontal,
    /// Items flowing as rows.
    Vertical,
    /// Placement of a single grid child.
    Item,
}

/// How to print the resolved mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Style sheet rule for a class.
    Css,
    /// `style` attribute text.
    Inline,
    /// `camelCase` JSON object.
    Json,
}

/// Read configuration text from `path`, standard input for `-`, or `{}` when absent.
///
/// # Errors
/// Returns an error if the file or standard input cannot be read.
pub fn read_config(path: Option<&Path>) -> Result<String> {
    match path {
        None => Ok("{}".to_owned()),
        Some(file) if file.as_os_str() == STDIN_PATH => {
            let mut text = String::new();
            stdin()
                .read_to_string(&mut text)
                .context("failed to read configuration from stdin")?;
            Ok(text)
        }
        Some(file) => read_to_string(file)
            .with_context(|| format!("failed to read configuration {}", file.display())),
    }
}

/// Parse configuration JSON; blank text is an empty configuration.
///
/// # Errors
/// Returns an error if the text is not valid JSON.
fn parse_config<T: DeserializeOwned + Default>(text: &str) -> Result<T> {
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    from_str(text).context("invalid layout configuration")
}

/// Run the resolver for `mode` on configuration `text`.
///
/// `children` is the number of rendered children, used by the flow modes
/// when the configuration does not give `items`.
///
/// # Errors
/// Returns an error if the configuration is not valid JSON.
pub fn resolve(mode: Mode, text: &str, children: usize) -> Result<StyleMapping> {
    let mapping = match mode {
        Mode::Layout => resolve_layout(&parse_config::<GridLayoutConfig>(text)?),
        Mode::Horizontal => resolve_horizontal(&parse_config::<HorizontalConfig>(text)?, children),
        Mode::Vertical => resolve_vertical(&parse_config::<VerticalConfig>(text)?, children),
        Mode::Item => resolve_item(&parse_config::<ItemConfig>(text)?),
    };
    debug!("{mode:?} resolved to {} declarations", mapping.len());
    Ok(mapping)
}

/// Render `mapping` in `format`; `class_name` names the rule for CSS output.
///
/// # Errors
/// Returns an error if JSON serialization or selector escaping fails.
pub fn render(mapping: &StyleMapping, format: OutputFormat, class_name: &str) -> Result<String> {
    let rendered = match format {
        OutputFormat::Css => mapping.to_rule(&class_selector(class_name)?),
        OutputFormat::Inline => mapping.to_inline(),
        OutputFormat::Json => to_string_pretty(mapping)?,
    };
    info!("rendered {format:?} output ({} bytes)", rendered.len());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_grid::Property;

    #[test]
    fn blank_config_is_default() {
        let mapping = resolve(Mode::Vertical, "  \n", 2).unwrap_or_default();
        assert_eq!(
            mapping.get(Property::GridTemplateRows),
            Some("repeat(2, 1fr)")
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let message = resolve(Mode::Layout, "{ columns: 3", 1)
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert_eq!(message, "invalid layout configuration");
    }

    #[test]
    fn missing_path_reads_empty_object() {
        assert_eq!(read_config(None).unwrap_or_default(), "{}");
    }
}
