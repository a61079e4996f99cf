//! Ordered property/value mapping handed to the styling layer.

use crate::property::Property;
use indexmap::IndexMap;

/// Selector for a container's direct children, relative to the container.
pub const CHILDREN_SELECTOR: &str = "& > *";

/// A single `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration<'map> {
    pub property: Property,
    pub value: &'map str,
}

/// CSS properties produced for one element, plus nested rules for related
/// selectors (such as [`CHILDREN_SELECTOR`]).
///
/// A key is present only when some input produced a value for it, so an
/// absent key leaves inherited or default behavior alone downstream.
/// Insertion order is kept for serialization; overwriting a key keeps its
/// original position. Equality ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMapping {
    declarations: IndexMap<Property, String>,
    rules: IndexMap<String, Self>,
}

impl StyleMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn set(mut self, property: Property, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Builder form of [`Self::insert_rule`].
    #[must_use]
    pub fn with_rule(mut self, selector: impl Into<String>, rule: Self) -> Self {
        self.insert_rule(selector, rule);
        self
    }

    /// Set `property`, replacing any earlier value.
    pub fn insert(&mut self, property: Property, value: impl Into<String>) {
        self.declarations.insert(property, value.into());
    }

    /// Set the nested rule for `selector`, replacing any earlier one whole.
    pub fn insert_rule(&mut self, selector: impl Into<String>, rule: Self) {
        self.rules.insert(selector.into(), rule);
    }

    /// Value of `property`, if any input produced one.
    pub fn get(&self, property: Property) -> Option<&str> {
        self.declarations.get(&property).map(String::as_str)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.declarations.contains_key(&property)
    }

    /// Nested rule for `selector`.
    pub fn rule(&self, selector: &str) -> Option<&Self> {
        self.rules.get(selector)
    }

    /// Number of top-level declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.rules.is_empty()
    }

    /// Declarations in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'_>> {
        self.declarations
            .iter()
            .map(|(property, value)| Declaration {
                property: *property,
                value: value.as_str(),
            })
    }

    /// Nested rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.rules
            .iter()
            .map(|(selector, rule)| (selector.as_str(), rule))
    }

    /// Overlay `later` on top of `self`: keys set in both take `later`'s value.
    pub fn merge(&mut self, later: Self) {
        self.declarations.extend(later.declarations);
        self.rules.extend(later.rules);
    }

    /// Fold layers left to right with [`Self::merge`]. `None` layers are skipped.
    ///
    /// Each resolver lists its rules as `condition.then(|| mapping)` layers in
    /// precedence order, lowest first.
    pub fn layered(layers: impl IntoIterator<Item = Option<Self>>) -> Self {
        layers
            .into_iter()
            .flatten()
            .fold(Self::new(), |mut acc, layer| {
                acc.merge(layer);
                acc
            })
    }
}

impl FromIterator<(Property, String)> for StyleMapping {
    fn from_iter<I: IntoIterator<Item = (Property, String)>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
            rules: IndexMap::new(),
        }
    }
}

impl<'value> FromIterator<(Property, &'value str)> for StyleMapping {
    fn from_iter<I: IntoIterator<Item = (Property, &'value str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(property, value)| (property, value.to_owned()))
            .collect()
    }
}
