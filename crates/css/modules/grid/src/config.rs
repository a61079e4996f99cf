//! Layout configuration records.
//!
//! Field names follow the `camelCase` props of the layout components
//! (`itemSize`, `breakAt`, `centerItems`, ...). Loading is lenient: a field
//! whose value has the wrong shape is dropped with a warning and behaves as
//! if it had been omitted.

use css_values_units::Dimension;
use log::warn;
use serde::de::{Deserializer, Error as _, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Default per-item track size.
pub const DEFAULT_ITEM_SIZE: &str = "1fr";
/// Column count above the breakpoint.
pub const DEFAULT_MIN_COLS: u32 = 2;
/// Column count below the breakpoint.
pub const DEFAULT_MAX_COLS: u32 = 4;

/// Alignment of items inside their grid area.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-items>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementItems {
    Start,
    End,
    Center,
    Stretch,
}

impl PlacementItems {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
        }
    }
}

/// Distribution of the grid tracks inside the container.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-content>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementContent {
    Start,
    End,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl PlacementContent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

/// Options shared by every container mode.
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent boolean layout prop"
)]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Units for numeric dimensions; `px` when absent.
    #[serde(deserialize_with = "field::units", skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(deserialize_with = "field::gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<Dimension>,
    /// `inline-grid` instead of `grid`.
    #[serde(deserialize_with = "flag::inline")]
    pub inline: bool,
    /// Explicit template; always wins over a computed one.
    #[serde(deserialize_with = "field::template", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(deserialize_with = "flag::full_width")]
    pub full_width: bool,
    #[serde(deserialize_with = "flag::full_height")]
    pub full_height: bool,
    #[serde(deserialize_with = "field::justify_items", skip_serializing_if = "Option::is_none")]
    pub justify_items: Option<PlacementItems>,
    #[serde(deserialize_with = "field::align_items", skip_serializing_if = "Option::is_none")]
    pub align_items: Option<PlacementItems>,
    /// Shorthand for centered `justifyItems` and `alignItems`; beats both.
    #[serde(deserialize_with = "flag::center_items")]
    pub center_items: bool,
    #[serde(deserialize_with = "field::justify_content", skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<PlacementContent>,
    #[serde(deserialize_with = "field::align_content", skip_serializing_if = "Option::is_none")]
    pub align_content: Option<PlacementContent>,
    /// Outline the container and its children.
    #[serde(deserialize_with = "flag::debug")]
    pub debug: bool,
}

impl LayoutConfig {
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// The explicit template, unless absent or empty.
    pub fn explicit_template(&self) -> Option<&str> {
        self.template.as_deref().filter(|template| !template.is_empty())
    }
}

/// Single-row flow of items laid out as columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalConfig {
    #[serde(flatten)]
    pub base: LayoutConfig,
    /// Item count; the caller's child count when absent or zero.
    #[serde(deserialize_with = "count::items", skip_serializing_if = "Option::is_none")]
    pub items: Option<u32>,
    #[serde(deserialize_with = "field::item_size", skip_serializing_if = "Option::is_none")]
    pub item_size: Option<Dimension>,
    #[serde(deserialize_with = "count::min_cols", skip_serializing_if = "Option::is_none")]
    pub min_cols: Option<u32>,
    #[serde(deserialize_with = "count::max_cols", skip_serializing_if = "Option::is_none")]
    pub max_cols: Option<u32>,
    /// Container width at which the column count switches.
    #[serde(deserialize_with = "field::break_at", skip_serializing_if = "Option::is_none")]
    pub break_at: Option<Dimension>,
}

impl HorizontalConfig {
    pub fn min_cols(&self) -> u32 {
        self.min_cols.unwrap_or(DEFAULT_MIN_COLS)
    }

    pub fn max_cols(&self) -> u32 {
        self.max_cols.unwrap_or(DEFAULT_MAX_COLS)
    }
}

/// Single-column flow of items laid out as rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerticalConfig {
    #[serde(flatten)]
    pub base: LayoutConfig,
    /// Item count; the caller's child count when absent or zero.
    #[serde(deserialize_with = "count::items", skip_serializing_if = "Option::is_none")]
    pub items: Option<u32>,
    #[serde(deserialize_with = "field::item_size", skip_serializing_if = "Option::is_none")]
    pub item_size: Option<Dimension>,
}

/// Explicit two-axis grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridLayoutConfig {
    #[serde(flatten)]
    pub base: LayoutConfig,
    #[serde(deserialize_with = "count::columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(deserialize_with = "count::rows", skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Size shared by both axes unless overridden per axis.
    #[serde(deserialize_with = "field::item_size", skip_serializing_if = "Option::is_none")]
    pub item_size: Option<Dimension>,
    #[serde(deserialize_with = "field::column_size", skip_serializing_if = "Option::is_none")]
    pub column_size: Option<Dimension>,
    #[serde(deserialize_with = "field::row_size", skip_serializing_if = "Option::is_none")]
    pub row_size: Option<Dimension>,
}

/// Placement of one child inside a grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemConfig {
    /// `grid-column` value such as `"1 / 3"`.
    #[serde(deserialize_with = "field::column", skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(deserialize_with = "field::row", skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(deserialize_with = "field::justify_self", skip_serializing_if = "Option::is_none")]
    pub justify_self: Option<PlacementItems>,
    #[serde(deserialize_with = "field::align_self", skip_serializing_if = "Option::is_none")]
    pub align_self: Option<PlacementItems>,
    /// `place-self: center`; beats `justifySelf`/`alignSelf`.
    #[serde(deserialize_with = "flag::center_self")]
    pub center_self: bool,
    /// Make the item a flex container centering its own content.
    #[serde(deserialize_with = "flag::center_content")]
    pub center_content: bool,
}

/// The item size to use when none is configured.
pub fn default_item_size() -> Dimension {
    Dimension::from(DEFAULT_ITEM_SIZE)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Deserialize an optional field, mapping values of the wrong shape to `None`.
fn lenient<'de, D, T>(deserializer: D, key: &str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(
        match Option::<Lenient<T>>::deserialize(deserializer)? {
            Some(Lenient::Valid(value)) => Some(value),
            Some(Lenient::Invalid(_)) => {
                warn!("ignoring layout option `{key}` with an unexpected value");
                None
            }
            None => None,
        },
    )
}

/// A count written as a whole number; `3.0` reads as `3`.
struct WholeCount(u32);

impl<'de> Deserialize<'de> for WholeCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(D::Error::custom(format_args!("{value} is not a whole count")))
        }
    }
}

/// Named lenient deserializers, one per option, so a dropped value is
/// reported by its key.
macro_rules! lenient_fields {
    (options: $($field:ident => $key:literal),* $(,)?) => {$(
        pub(super) fn $field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            lenient(deserializer, $key)
        }
    )*};
    (counts: $($field:ident => $key:literal),* $(,)?) => {$(
        pub(super) fn $field<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(lenient::<D, WholeCount>(deserializer, $key)?.map(|count| count.0))
        }
    )*};
    // Anything that is not a boolean reads as `false`.
    (flags: $($field:ident => $key:literal),* $(,)?) => {$(
        pub(super) fn $field<'de, D>(deserializer: D) -> Result<bool, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(lenient::<D, bool>(deserializer, $key)?.unwrap_or(false))
        }
    )*};
}

mod field {
    use super::{Deserialize, Deserializer, lenient};

    lenient_fields!(options:
        units => "units",
        gap => "gap",
        template => "template",
        justify_items => "justifyItems",
        align_items => "alignItems",
        justify_content => "justifyContent",
        align_content => "alignContent",
        item_size => "itemSize",
        break_at => "breakAt",
        column_size => "columnSize",
        row_size => "rowSize",
        column => "column",
        row => "row",
        justify_self => "justifySelf",
        align_self => "alignSelf",
    );
}

mod count {
    use super::{Deserializer, WholeCount, lenient};

    lenient_fields!(counts:
        items => "items",
        min_cols => "minCols",
        max_cols => "maxCols",
        columns => "columns",
        rows => "rows",
    );
}

mod flag {
    use super::{Deserializer, lenient};

    lenient_fields!(flags:
        inline => "inline",
        full_width => "fullWidth",
        full_height => "fullHeight",
        center_items => "centerItems",
        debug => "debug",
        center_self => "centerSelf",
        center_content => "centerContent",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record, set_logger, set_max_level};
    use serde_json::from_str;
    use std::sync::Mutex;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct WarningLog;

    impl Log for WarningLog {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut warnings) = WARNINGS.lock() {
                warnings.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static WARNING_LOG: WarningLog = WarningLog;

    fn captured_warnings() -> Vec<String> {
        WARNINGS
            .lock()
            .map(|warnings| warnings.to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn reads_camel_case_fields() {
        let config: HorizontalConfig = from_str(
            r#"{ "gap": 10, "minCols": 3, "breakAt": "40em", "centerItems": true, "units": "rem" }"#,
        )
        .unwrap_or_default();
        assert_eq!(config.base.gap, Some(Dimension::from(10)));
        assert_eq!(config.base.units(), Some("rem"));
        assert!(config.base.center_items);
        assert_eq!(config.min_cols(), 3);
        assert_eq!(config.max_cols(), DEFAULT_MAX_COLS);
        assert_eq!(config.break_at, Some(Dimension::from("40em")));
    }

    #[test]
    fn wrong_shapes_behave_as_omitted() {
        let config: VerticalConfig = from_str(
            r#"{ "items": -2, "debug": "yes", "justifyItems": "sideways", "alignItems": "end" }"#,
        )
        .unwrap_or_default();
        assert_eq!(config.items, None);
        assert!(!config.base.debug);
        assert_eq!(config.base.justify_items, None);
        assert_eq!(config.base.align_items, Some(PlacementItems::End));
    }

    #[test]
    fn null_is_omitted() {
        let config: ItemConfig =
            from_str(r#"{ "column": null, "centerSelf": null }"#).unwrap_or_default();
        assert_eq!(config, ItemConfig::default());
    }

    #[test]
    fn content_keywords_are_kebab_case() {
        let config: GridLayoutConfig =
            from_str(r#"{ "justifyContent": "space-between", "columns": 3 }"#).unwrap_or_default();
        assert_eq!(
            config.base.justify_content,
            Some(PlacementContent::SpaceBetween)
        );
        assert_eq!(config.columns, Some(3));
    }

    #[test]
    fn empty_template_is_not_explicit() {
        let config = LayoutConfig {
            template: Some(String::new()),
            ..LayoutConfig::default()
        };
        assert_eq!(config.explicit_template(), None);
    }

    #[test]
    fn whole_floats_are_counts() {
        let config: HorizontalConfig =
            from_str(r#"{ "items": 3.0, "minCols": 1, "maxCols": 2.5 }"#).unwrap_or_default();
        assert_eq!(config.items, Some(3));
        assert_eq!(config.min_cols, Some(1));
        assert_eq!(config.max_cols, None);
    }

    #[test]
    fn dropped_option_is_named_in_warning() {
        let _installed = set_logger(&WARNING_LOG);
        set_max_level(LevelFilter::Warn);

        let config: GridLayoutConfig =
            from_str(r#"{ "fullWidth": "wide", "rowSize": [1] }"#).unwrap_or_default();
        assert!(!config.base.full_width);
        assert_eq!(config.row_size, None);

        let warnings = captured_warnings();
        assert!(warnings.iter().any(|message| message.contains("`fullWidth`")));
        assert!(warnings.iter().any(|message| message.contains("`rowSize`")));
    }
}
