//! Explicit grid: fixed column and row counts.
//!
//! Spec: §7.2 Explicit Track Sizing
//! <https://www.w3.org/TR/css-grid-2/#explicit-grids>

use crate::common::{resolve_common, single};
use crate::config::{GridLayoutConfig, default_item_size};
use crate::template::axis_template;
use css_style_attr::{Property, StyleMapping};
use css_values_units::Dimension;

/// Per-axis size, falling back to the shared item size when unset or zero.
fn axis_size(axis: Option<&Dimension>, shared: &Dimension) -> Dimension {
    axis.filter(|size| size.is_set())
        .unwrap_or(shared)
        .clone()
}

/// Resolve an explicit grid container.
///
/// `columns` and `rows` each produce a `repeat()` template at `columnSize` /
/// `rowSize` (both default to `itemSize`, itself `1fr` by default). An
/// explicit `template` is emitted as the `grid-template` shorthand alongside
/// them.
pub fn resolve_layout(config: &GridLayoutConfig) -> StyleMapping {
    let base = &config.base;
    let units = base.units();
    let shared = config.item_size.clone().unwrap_or_else(default_item_size);
    let column_size = axis_size(config.column_size.as_ref(), &shared);
    let row_size = axis_size(config.row_size.as_ref(), &shared);
    let columns = config.columns.unwrap_or(0) as usize;
    let rows = config.rows.unwrap_or(0) as usize;

    let mapping = StyleMapping::layered([
        Some(resolve_common(base)),
        axis_template(columns, &column_size, units)
            .map(|template| single(Property::GridTemplateColumns, template)),
        axis_template(rows, &row_size, units)
            .map(|template| single(Property::GridTemplateRows, template)),
        base.explicit_template()
            .map(|template| single(Property::GridTemplate, template)),
    ]);
    tracing::debug!("resolve_layout({columns} x {rows}): {mapping}");
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn shared_item_size_applies_to_both_axes() {
        let config = GridLayoutConfig {
            columns: Some(3),
            rows: Some(2),
            item_size: Some(Dimension::from("2fr")),
            ..GridLayoutConfig::default()
        };
        let mapping = resolve_layout(&config);
        assert_eq!(
            mapping.get(Property::GridTemplateColumns),
            Some("repeat(3, 2fr)")
        );
        assert_eq!(
            mapping.get(Property::GridTemplateRows),
            Some("repeat(2, 2fr)")
        );
        assert_eq!(mapping.get(Property::GridAutoFlow), None);
    }

    #[test]
    fn axis_sizes_override_item_size() {
        let config = GridLayoutConfig {
            columns: Some(2),
            rows: Some(4),
            column_size: Some(Dimension::from(120)),
            row_size: Some(Dimension::from(0)),
            ..GridLayoutConfig::default()
        };
        let mapping = resolve_layout(&config);
        assert_eq!(
            mapping.get(Property::GridTemplateColumns),
            Some("repeat(2, 120px)")
        );
        assert_eq!(
            mapping.get(Property::GridTemplateRows),
            Some("repeat(4, 1fr)")
        );
    }

    #[test]
    fn missing_axes_are_omitted() {
        let mapping = resolve_layout(&GridLayoutConfig {
            rows: Some(0),
            ..GridLayoutConfig::default()
        });
        assert!(!mapping.contains(Property::GridTemplateColumns));
        assert!(!mapping.contains(Property::GridTemplateRows));
        assert_eq!(mapping.get(Property::Display), Some("grid"));
    }

    #[test]
    fn explicit_template_sets_shorthand() {
        let config = GridLayoutConfig {
            base: LayoutConfig {
                template: Some("\"head head\" auto \"nav main\" 1fr / 200px 1fr".to_owned()),
                ..LayoutConfig::default()
            },
            columns: Some(2),
            ..GridLayoutConfig::default()
        };
        let mapping = resolve_layout(&config);
        assert_eq!(
            mapping.get(Property::GridTemplate),
            Some("\"head head\" auto \"nav main\" 1fr / 200px 1fr")
        );
        assert_eq!(
            mapping.get(Property::GridTemplateColumns),
            Some("repeat(2, 1fr)")
        );
    }

    #[test]
    fn units_apply_to_numeric_sizes() {
        let config = GridLayoutConfig {
            base: LayoutConfig {
                units: Some("vw".to_owned()),
                ..LayoutConfig::default()
            },
            columns: Some(4),
            item_size: Some(Dimension::from(25)),
            ..GridLayoutConfig::default()
        };
        assert_eq!(
            resolve_layout(&config).get(Property::GridTemplateColumns),
            Some("repeat(4, 25vw)")
        );
    }
}
