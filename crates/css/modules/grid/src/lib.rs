//! CSS Grid Layout Module Level 2 — layout configuration to grid properties.
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! Each resolver maps one configuration record to one [`StyleMapping`]. They
//! are total, deterministic functions: missing or zero values fall back to
//! defaults and nothing can fail.

// Configuration records
mod config;
pub use config::{
    DEFAULT_ITEM_SIZE, DEFAULT_MAX_COLS, DEFAULT_MIN_COLS, GridLayoutConfig, HorizontalConfig,
    ItemConfig, LayoutConfig, PlacementContent, PlacementItems, VerticalConfig, default_item_size,
};

// Axis templates
mod template;
pub use template::{ResponsiveColumns, axis_template, effective_item_count, repeat_tracks};

// Container properties shared by every mode
mod common;
pub use common::{DEBUG_CHILD_OUTLINE, DEBUG_CONTAINER_OUTLINE, resolve_common};

// Container modes
mod horizontal;
mod layout;
mod vertical;
pub use horizontal::{resolve_horizontal, responsive_columns};
pub use layout::resolve_layout;
pub use vertical::resolve_vertical;

// Grid items
mod item;
pub use item::resolve_item;

pub use css_style_attr::{Property, StyleMapping};
pub use css_values_units::Dimension;
