//! Text and JSON forms of a [`StyleMapping`].

use crate::mapping::StyleMapping;
use core::fmt::{Display, Error as FmtError, Formatter, Result as FmtResult, Write};
use cssparser::serialize_identifier;
use serde::ser::{Serialize, SerializeMap as _, Serializer};

/// Placeholder for the enclosing selector inside nested rule selectors.
const PARENT_MARKER: char = '&';

/// Class selector for `class_name`, escaped as a CSS identifier.
///
/// # Errors
/// Returns an error only if writing into the output buffer fails.
pub fn class_selector(class_name: &str) -> Result<String, FmtError> {
    let mut selector = String::from(".");
    serialize_identifier(class_name, &mut selector)?;
    Ok(selector)
}

/// Expand a nested selector against its parent.
///
/// `&` is replaced by the parent; a selector without `&` becomes a descendant
/// of the parent.
pub fn resolve_nested_selector(parent: &str, nested: &str) -> String {
    if nested.contains(PARENT_MARKER) {
        nested.replace(PARENT_MARKER, parent)
    } else {
        format!("{parent} {nested}")
    }
}

impl StyleMapping {
    /// Declarations as a `style` attribute value. Nested rules are dropped.
    pub fn to_inline(&self) -> String {
        self.declarations()
            .map(|declaration| format!("{}: {};", declaration.property, declaration.value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Style sheet text for `selector`, followed by one block per nested rule.
    pub fn to_rule(&self, selector: &str) -> String {
        let mut css = String::new();
        self.write_rule(selector, &mut css);
        css
    }

    fn write_rule(&self, selector: &str, css: &mut String) {
        if self.declarations().next().is_some() {
            css.push_str(selector);
            css.push_str(" {\n");
            for declaration in self.declarations() {
                css.push_str("    ");
                css.push_str(declaration.property.css_name());
                css.push_str(": ");
                css.push_str(declaration.value);
                css.push_str(";\n");
            }
            css.push_str("}\n");
        }
        for (nested, rule) in self.rules() {
            rule.write_rule(&resolve_nested_selector(selector, nested), css);
        }
    }
}

impl Display for StyleMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_inline())
    }
}

/// Object form: `camelCase` keys, nested rules as nested objects.
impl Serialize for StyleMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for declaration in self.declarations() {
            map.serialize_entry(declaration.property.name(), declaration.value)?;
        }
        for (selector, rule) in self.rules() {
            map.serialize_entry(selector, rule)?;
        }
        map.end()
    }
}

/// Write `mapping` as a rule for the class `class_name`.
///
/// # Errors
/// Returns an error if `out` rejects the write.
pub fn write_class_rule(
    out: &mut impl Write,
    class_name: &str,
    mapping: &StyleMapping,
) -> FmtResult {
    let selector = class_selector(class_name)?;
    out.write_str(&mapping.to_rule(&selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::CHILDREN_SELECTOR;
    use crate::property::Property;

    fn debug_grid() -> StyleMapping {
        StyleMapping::new()
            .set(Property::Display, "grid")
            .set(Property::Outline, "1px solid red")
            .with_rule(
                CHILDREN_SELECTOR,
                StyleMapping::new().set(Property::Outline, "1px dotted green"),
            )
            .set(Property::GridAutoFlow, "row")
    }

    #[test]
    fn inline_uses_css_names_in_order() {
        assert_eq!(
            debug_grid().to_inline(),
            "display: grid; outline: 1px solid red; grid-auto-flow: row;"
        );
    }

    #[test]
    fn rule_expands_nested_selector() {
        let expected = ".grid {\n    display: grid;\n    outline: 1px solid red;\n    grid-auto-flow: row;\n}\n.grid > * {\n    outline: 1px dotted green;\n}\n";
        assert_eq!(debug_grid().to_rule(".grid"), expected);
    }

    #[test]
    fn nested_selector_without_marker_is_descendant() {
        assert_eq!(resolve_nested_selector(".grid", "p"), ".grid p");
        assert_eq!(resolve_nested_selector(".grid", "&:hover"), ".grid:hover");
    }

    #[test]
    fn class_names_are_escaped() {
        assert_eq!(class_selector("cards").ok().as_deref(), Some(".cards"));
        assert_eq!(class_selector("2col").ok().as_deref(), Some(".\\32 col"));
    }

    #[test]
    fn empty_mapping_writes_nothing() {
        let mut out = String::new();
        let written = write_class_rule(&mut out, "grid", &StyleMapping::new());
        assert_eq!(written, Ok(()));
        assert!(out.is_empty());
    }
}
