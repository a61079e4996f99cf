//! CSS Values & Units Level 4 — §10 Mathematical Expressions
//! Spec: <https://drafts.csswg.org/css-values-4/#math>
//!
//! Only serialization is provided: the operands are assembled as text and the
//! browser evaluates them.

use core::fmt::{Display, Formatter, Result as FmtResult};

/// Multiplier that turns a small signed length into one far outside any real
/// container size.
pub const SNAP_FACTOR: u32 = 999;

/// `clamp(MIN, VAL, MAX)` (§10.2).
///
/// Operands are kept in authored order; nothing checks `lower <= upper`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clamp {
    /// Minimum, first argument.
    pub lower: String,
    /// Central value, second argument.
    pub preferred: String,
    /// Maximum, third argument.
    pub upper: String,
}

impl Clamp {
    /// Build a clamp from its three operands.
    pub fn new(
        lower: impl Into<String>,
        preferred: impl Into<String>,
        upper: impl Into<String>,
    ) -> Self {
        Self {
            lower: lower.into(),
            preferred: preferred.into(),
            upper: upper.into(),
        }
    }
}

impl Display for Clamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "clamp({}, {}, {})",
            self.lower, self.preferred, self.upper
        )
    }
}

/// `100% / count - gap`: one of `count` equal shares of the container, less a gap.
pub fn percentage_share(count: u32, gap: &str) -> String {
    format!("100% / {count} - {gap}")
}

/// `(threshold - 100%) * 999`.
///
/// Positive and huge while the container is narrower than `threshold`,
/// negative and huge once it is wider. As the central operand of a
/// [`Clamp`] it never survives: the clamp always resolves to one of its bounds.
pub fn snap_term(threshold: &str) -> String {
    format!("({threshold} - 100%) * {SNAP_FACTOR}")
}
