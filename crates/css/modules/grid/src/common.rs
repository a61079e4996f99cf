//! Properties shared by every grid container mode.

use crate::config::LayoutConfig;
use css_style_attr::{CHILDREN_SELECTOR, Property, StyleMapping};
use css_values_units::format_dimension;

/// Outline drawn around a container in debug mode.
pub const DEBUG_CONTAINER_OUTLINE: &str = "1px solid red";
/// Outline drawn around each direct child in debug mode.
pub const DEBUG_CHILD_OUTLINE: &str = "1px dotted green";

/// One-declaration mapping.
pub fn single(property: Property, value: impl Into<String>) -> StyleMapping {
    StyleMapping::new().set(property, value)
}

/// Resolve the container properties every mode shares.
///
/// Layers, lowest precedence first:
/// 1. `display`
/// 2. `fullWidth` / `fullHeight` minimum sizes
/// 3. debug outlines
/// 4. gap
/// 5. explicit `justifyItems` / `alignItems`
/// 6. `centerItems`, overriding both of the above
/// 7. `justifyContent` / `alignContent`
pub fn resolve_common(config: &LayoutConfig) -> StyleMapping {
    let display = if config.inline { "inline-grid" } else { "grid" };
    let gap = config.gap.as_ref().filter(|length| length.is_set());

    let mapping = StyleMapping::layered([
        Some(single(Property::Display, display)),
        config
            .full_width
            .then(|| single(Property::MinWidth, "100%")),
        config
            .full_height
            .then(|| single(Property::MinHeight, "100%")),
        config.debug.then(|| {
            single(Property::Outline, DEBUG_CONTAINER_OUTLINE).with_rule(
                CHILDREN_SELECTOR,
                single(Property::Outline, DEBUG_CHILD_OUTLINE),
            )
        }),
        gap.map(|length| single(Property::GridGap, format_dimension(Some(length), config.units()))),
        config
            .justify_items
            .map(|placement| single(Property::JustifyItems, placement.as_str())),
        config
            .align_items
            .map(|placement| single(Property::AlignItems, placement.as_str())),
        config.center_items.then(|| {
            single(Property::JustifyItems, "center").set(Property::AlignItems, "center")
        }),
        config
            .justify_content
            .map(|placement| single(Property::JustifyContent, placement.as_str())),
        config
            .align_content
            .map(|placement| single(Property::AlignContent, placement.as_str())),
    ]);
    tracing::debug!("resolve_common: {mapping}");
    mapping
}
