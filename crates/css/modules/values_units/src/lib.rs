//! CSS Values and Units — author lengths and the math functions used to build
//! grid track formulas.
//! Spec: <https://www.w3.org/TR/css-values-3/>, <https://drafts.csswg.org/css-values-4/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the CSS Values table of contents.
pub mod chapter_10_math_functions;
pub mod chapter_6_dimensions;

pub use chapter_10_math_functions::{Clamp, SNAP_FACTOR, percentage_share, snap_term};
pub use chapter_6_dimensions::{DEFAULT_UNITS, Dimension, format_dimension};
