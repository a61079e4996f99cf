//! Axis templates: `repeat()` track lists and the responsive column formula.
//!
//! Spec: §7.2.3 Repeating Rows and Columns
//! <https://www.w3.org/TR/css-grid-2/#repeat-notation>

use css_values_units::{Clamp, Dimension, percentage_share, snap_term};

/// Flex track used as the `minmax()` maximum of responsive columns.
const FLEXIBLE_MAX: &str = "1fr";

/// `repeat(<count>, <size>)`, with `size` formatted in `units`.
///
/// Callers decide whether a template is wanted at all; see [`axis_template`].
pub fn repeat_tracks(count: usize, size: &Dimension, units: Option<&str>) -> String {
    format!("repeat({count}, {})", size.to_css(units))
}

/// Template for an axis with `count` items, or `None` when there are no items.
///
/// An empty axis leaves the template property out entirely rather than
/// emitting `repeat(0, ...)`.
pub fn axis_template(count: usize, size: &Dimension, units: Option<&str>) -> Option<String> {
    (count > 0).then(|| repeat_tracks(count, size, units))
}

/// Number of tracks for a flow of items: the configured count when non-zero,
/// otherwise the number of children the caller renders.
pub fn effective_item_count(items: Option<u32>, child_count: usize) -> usize {
    items
        .filter(|&count| count > 0)
        .map_or(child_count, |count| count as usize)
}

/// Column template that switches between two column counts at a container
/// width, without media queries.
///
/// Each column's minimum width is clamped to
/// `[100% / max_cols - gap, 100% / min_cols - gap]`. The clamp's central
/// operand is a snap term that is hugely positive below `break_at` and hugely
/// negative above it, so below the breakpoint columns take the `max_cols` bound
/// and above it the `min_cols` bound. `auto-fill` then packs as many columns
/// as fit. `min_cols > max_cols` inverts the range and is emitted as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsiveColumns {
    pub min_cols: u32,
    pub max_cols: u32,
    /// Formatted gap length.
    pub gap: String,
    /// Formatted breakpoint length.
    pub break_at: String,
}

impl ResponsiveColumns {
    /// First clamp operand: the share taken when showing `max_cols` columns.
    pub fn lower_bound(&self) -> String {
        percentage_share(self.max_cols, &self.gap)
    }

    /// Third clamp operand: the share taken when showing `min_cols` columns.
    pub fn upper_bound(&self) -> String {
        percentage_share(self.min_cols, &self.gap)
    }

    /// Second clamp operand; never a real width.
    pub fn snap(&self) -> String {
        snap_term(&self.break_at)
    }

    pub fn clamp(&self) -> Clamp {
        Clamp::new(self.lower_bound(), self.snap(), self.upper_bound())
    }

    /// `repeat(auto-fill, minmax(<clamp>, 1fr))`.
    pub fn to_css(&self) -> String {
        format!(
            "repeat(auto-fill, minmax({}, {FLEXIBLE_MAX}))",
            self.clamp()
        )
    }

    /// Whether the bounds are the wrong way round.
    pub fn is_inverted(&self) -> bool {
        self.min_cols > self.max_cols
    }
}
