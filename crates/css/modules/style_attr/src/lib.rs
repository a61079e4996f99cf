//! CSS Style Attributes — the declaration mapping a layout resolver hands to
//! the styling layer, and its inline, style sheet and object serializations.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

mod mapping;
mod property;
mod serialize;

pub use mapping::{CHILDREN_SELECTOR, Declaration, StyleMapping};
pub use property::Property;
pub use serialize::{class_selector, resolve_nested_selector, write_class_rule};
