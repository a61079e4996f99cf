//! Horizontal container: items side by side, one column each, optionally
//! responsive around a breakpoint.

use crate::common::{resolve_common, single};
use crate::config::{HorizontalConfig, default_item_size};
use crate::template::{ResponsiveColumns, axis_template, effective_item_count};
use css_style_attr::{Property, StyleMapping};
use css_values_units::format_dimension;
use log::warn;

/// Responsive column formula for `config`, if it sets a breakpoint.
pub fn responsive_columns(config: &HorizontalConfig) -> Option<ResponsiveColumns> {
    let units = config.base.units();
    let break_at = config.break_at.as_ref().filter(|length| length.is_set())?;
    Some(ResponsiveColumns {
        min_cols: config.min_cols(),
        max_cols: config.max_cols(),
        gap: format_dimension(config.base.gap.as_ref(), units),
        break_at: break_at.to_css(units),
    })
}

/// Resolve a horizontal container holding `child_count` children.
///
/// Without `breakAt`, columns come from `items` (or `child_count`) repeated
/// at `itemSize` and auto-flow is `column`. With `breakAt`, the column
/// template is the [`ResponsiveColumns`] formula and auto-flow is `dense`.
/// An explicit `template` replaces either column template.
pub fn resolve_horizontal(config: &HorizontalConfig, child_count: usize) -> StyleMapping {
    let base = &config.base;
    let items = effective_item_count(config.items, child_count);
    let size = config.item_size.clone().unwrap_or_else(default_item_size);
    let responsive = responsive_columns(config);

    if let Some(formula) = responsive.as_ref()
        && formula.is_inverted()
    {
        warn!(
            "minCols ({}) is greater than maxCols ({}); the responsive column range is inverted",
            formula.min_cols, formula.max_cols
        );
    }

    let fixed_columns = responsive
        .is_none()
        .then(|| axis_template(items, &size, base.units()))
        .flatten();
    let auto_flow = if responsive.is_some() { "dense" } else { "column" };

    let mapping = StyleMapping::layered([
        Some(resolve_common(base)),
        fixed_columns.map(|template| single(Property::GridTemplateColumns, template)),
        responsive
            .as_ref()
            .map(|formula| single(Property::GridTemplateColumns, formula.to_css())),
        base.explicit_template()
            .map(|template| single(Property::GridTemplateColumns, template)),
        Some(single(Property::GridAutoFlow, auto_flow)),
    ]);
    tracing::debug!("resolve_horizontal(items = {items}): {mapping}");
    mapping
}
