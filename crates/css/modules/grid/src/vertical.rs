//! Vertical container: items stacked in a single column, one row each.

use crate::common::{resolve_common, single};
use crate::config::{VerticalConfig, default_item_size};
use crate::template::{axis_template, effective_item_count};
use css_style_attr::{Property, StyleMapping};

/// Resolve a vertical container holding `child_count` children.
///
/// Rows come from `items` (or `child_count`) repeated at `itemSize`; an
/// explicit `template` replaces them. Auto-flow is always `row`.
pub fn resolve_vertical(config: &VerticalConfig, child_count: usize) -> StyleMapping {
    let base = &config.base;
    let items = effective_item_count(config.items, child_count);
    let size = config.item_size.clone().unwrap_or_else(default_item_size);

    let mapping = StyleMapping::layered([
        Some(resolve_common(base)),
        axis_template(items, &size, base.units())
            .map(|template| single(Property::GridTemplateRows, template)),
        base.explicit_template()
            .map(|template| single(Property::GridTemplateRows, template)),
        Some(single(Property::GridAutoFlow, "row")),
    ]);
    tracing::debug!("resolve_vertical(items = {items}): {mapping}");
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use css_values_units::Dimension;

    #[test]
    fn three_items_with_defaults() {
        let config = VerticalConfig {
            items: Some(3),
            ..VerticalConfig::default()
        };
        let expected: StyleMapping = [
            (Property::Display, "grid"),
            (Property::GridTemplateRows, "repeat(3, 1fr)"),
            (Property::GridAutoFlow, "row"),
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve_vertical(&config, 0), expected);
    }

    #[test]
    fn child_count_fills_in_for_items() {
        let mapping = resolve_vertical(&VerticalConfig::default(), 5);
        assert_eq!(
            mapping.get(Property::GridTemplateRows),
            Some("repeat(5, 1fr)")
        );
    }

    #[test]
    fn no_items_no_template() {
        let mapping = resolve_vertical(&VerticalConfig::default(), 0);
        assert!(!mapping.contains(Property::GridTemplateRows));
        assert_eq!(mapping.get(Property::GridAutoFlow), Some("row"));
    }

    #[test]
    fn numeric_item_size_takes_units() {
        let config = VerticalConfig {
            base: LayoutConfig {
                units: Some("em".to_owned()),
                ..LayoutConfig::default()
            },
            item_size: Some(Dimension::from(4)),
            ..VerticalConfig::default()
        };
        assert_eq!(
            resolve_vertical(&config, 2).get(Property::GridTemplateRows),
            Some("repeat(2, 4em)")
        );
    }

    #[test]
    fn explicit_template_wins() {
        let config = VerticalConfig {
            base: LayoutConfig {
                template: Some("auto 1fr auto".to_owned()),
                ..LayoutConfig::default()
            },
            items: Some(3),
            ..VerticalConfig::default()
        };
        assert_eq!(
            resolve_vertical(&config, 3).get(Property::GridTemplateRows),
            Some("auto 1fr auto")
        );
    }
}
