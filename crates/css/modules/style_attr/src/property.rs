//! Property names a layout mapping may carry.

use core::fmt::{Display, Formatter, Result as FmtResult};

/// A CSS property emitted by the grid resolvers.
///
/// Each property has two spellings: the `camelCase` key used by object-style
/// consumers (`gridTemplateColumns`) and the CSS name used in style sheets
/// (`grid-template-columns`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Display,
    MinWidth,
    MinHeight,
    Outline,
    GridGap,
    GridTemplate,
    GridTemplateColumns,
    GridTemplateRows,
    GridAutoFlow,
    GridColumn,
    GridRow,
    JustifyItems,
    AlignItems,
    JustifyContent,
    AlignContent,
    JustifySelf,
    AlignSelf,
    PlaceSelf,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Display,
        Self::MinWidth,
        Self::MinHeight,
        Self::Outline,
        Self::GridGap,
        Self::GridTemplate,
        Self::GridTemplateColumns,
        Self::GridTemplateRows,
        Self::GridAutoFlow,
        Self::GridColumn,
        Self::GridRow,
        Self::JustifyItems,
        Self::AlignItems,
        Self::JustifyContent,
        Self::AlignContent,
        Self::JustifySelf,
        Self::AlignSelf,
        Self::PlaceSelf,
    ];

    /// `camelCase` key, as used by object-style consumers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::MinWidth => "minWidth",
            Self::MinHeight => "minHeight",
            Self::Outline => "outline",
            Self::GridGap => "gridGap",
            Self::GridTemplate => "gridTemplate",
            Self::GridTemplateColumns => "gridTemplateColumns",
            Self::GridTemplateRows => "gridTemplateRows",
            Self::GridAutoFlow => "gridAutoFlow",
            Self::GridColumn => "gridColumn",
            Self::GridRow => "gridRow",
            Self::JustifyItems => "justifyItems",
            Self::AlignItems => "alignItems",
            Self::JustifyContent => "justifyContent",
            Self::AlignContent => "alignContent",
            Self::JustifySelf => "justifySelf",
            Self::AlignSelf => "alignSelf",
            Self::PlaceSelf => "placeSelf",
        }
    }

    /// Property name as written in a style sheet.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::Outline => "outline",
            Self::GridGap => "grid-gap",
            Self::GridTemplate => "grid-template",
            Self::GridTemplateColumns => "grid-template-columns",
            Self::GridTemplateRows => "grid-template-rows",
            Self::GridAutoFlow => "grid-auto-flow",
            Self::GridColumn => "grid-column",
            Self::GridRow => "grid-row",
            Self::JustifyItems => "justify-items",
            Self::AlignItems => "align-items",
            Self::JustifyContent => "justify-content",
            Self::AlignContent => "align-content",
            Self::JustifySelf => "justify-self",
            Self::AlignSelf => "align-self",
            Self::PlaceSelf => "place-self",
        }
    }

    /// Look a property up by either spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.name() == name || property.css_name() == name)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.css_name())
    }
}
