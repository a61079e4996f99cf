//! CSS Values & Units Level 3 — §6 Dimensions (author-supplied lengths)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use log::trace;
use serde::{Deserialize, Serialize};

/// Unit appended to a bare number when the author gives none.
pub const DEFAULT_UNITS: &str = "px";

/// A length as written in a layout configuration.
///
/// A `Number` is a bare magnitude that still needs a unit. A `Token` is an
/// already complete CSS value (`"50%"`, `"auto"`, `"1fr"`) and is emitted
/// verbatim, whatever units the configuration asks for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Bare magnitude, formatted with the configured units.
    Number(f64),
    /// Pre-formatted CSS token.
    Token(String),
}

impl Dimension {
    /// Whether this value counts as "given".
    ///
    /// Zero, `NaN` and the empty token are treated as absent, so a `gap: 0`
    /// never emits a gap declaration and a `columnSize: 0` falls back to the
    /// shared item size.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Token(token) => !token.is_empty(),
        }
    }

    /// Format as a CSS length token (§6.1).
    ///
    /// Numbers get `units` appended (`px` when `None`); tokens pass through.
    pub fn to_css(&self, units: Option<&str>) -> String {
        match self {
            Self::Number(value) => format_number(*value, units),
            Self::Token(token) => token.clone(),
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Dimension {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for Dimension {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

/// Format an optional dimension into a CSS length token.
///
/// A missing value is the number `0`, so `format_dimension(None, None)` is `"0px"`.
pub fn format_dimension(value: Option<&Dimension>, units: Option<&str>) -> String {
    let formatted = value.map_or_else(
        || format_number(0.0, units),
        |dimension| dimension.to_css(units),
    );
    trace!("format_dimension({value:?}, {units:?}) -> {formatted}");
    formatted
}

/// Shortest decimal form of `value` followed by `units`.
fn format_number(value: f64, units: Option<&str>) -> String {
    // -0 prints as "-0" otherwise
    let magnitude = if value == 0.0 { 0.0 } else { value };
    format!("{magnitude}{}", units.unwrap_or(DEFAULT_UNITS))
}
