//! Grid item placement.
//!
//! Spec: §8 Placing Grid Items
//! <https://www.w3.org/TR/css-grid-2/#placement>

use crate::common::single;
use crate::config::ItemConfig;
use css_style_attr::{Property, StyleMapping};

/// Resolve the properties of one child of a grid container.
///
/// Every field is independent. `centerSelf` overrides `justifySelf` and
/// `alignSelf` through `place-self`; `centerContent` turns the item into a
/// flex container that centers its own content and can be combined with it.
pub fn resolve_item(config: &ItemConfig) -> StyleMapping {
    let mapping = StyleMapping::layered([
        config
            .column
            .as_deref()
            .filter(|column| !column.is_empty())
            .map(|column| single(Property::GridColumn, column)),
        config
            .row
            .as_deref()
            .filter(|row| !row.is_empty())
            .map(|row| single(Property::GridRow, row)),
        config
            .justify_self
            .map(|placement| single(Property::JustifySelf, placement.as_str())),
        config
            .align_self
            .map(|placement| single(Property::AlignSelf, placement.as_str())),
        config
            .center_self
            .then(|| single(Property::PlaceSelf, "center")),
        config.center_content.then(|| {
            single(Property::Display, "flex")
                .set(Property::JustifyContent, "center")
                .set(Property::AlignItems, "center")
        }),
    ]);
    tracing::debug!("resolve_item: {mapping}");
    mapping
}
