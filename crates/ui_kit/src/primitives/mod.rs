//! Shared control, data-display, and overlay primitives.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;
mod recipes;

pub use controls::{Button, NumberInput, Switch, TextField};
pub use data_display::{
    avatar_initials, Avatar, Badge, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, DataTable,
};
pub use overlays::Tooltip;
pub use recipes::{resolve_classes, ClassRecipe, VariantAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Filled primary action.
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered action on a transparent surface.
    Outline,
    /// Muted secondary action.
    Secondary,
    /// Borderless action that only shows a surface on hover.
    Ghost,
    /// Inline text link styling.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Default button.
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge emphasis variants.
pub enum BadgeVariant {
    /// Filled primary badge.
    Default,
    /// Muted badge.
    Secondary,
    /// Error or destructive status.
    Destructive,
    /// Bordered badge without fill.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar diameter tokens.
pub enum AvatarSize {
    /// Compact avatar.
    Sm,
    /// Default avatar.
    Md,
    /// Large avatar.
    Lg,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl AvatarSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels for card surfaces.
pub enum Elevation {
    /// Flat surface.
    Flat,
    /// Raised surface.
    Raised,
}

impl Default for Elevation {
    fn default() -> Self {
        Self::Raised
    }
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Switch sizing tokens.
pub enum SwitchSize {
    /// Dense switch.
    Sm,
    /// Default switch.
    Md,
}

impl Default for SwitchSize {
    fn default() -> Self {
        Self::Md
    }
}

impl SwitchSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    Standard,
    /// Inset/editor input.
    Inset,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side of the trigger a tooltip is placed on.
pub enum TooltipSide {
    /// Above the trigger.
    Top,
    /// Right of the trigger.
    Right,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
}

impl Default for TooltipSide {
    fn default() -> Self {
        Self::Top
    }
}

impl TooltipSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

static NEXT_DOM_ID: AtomicUsize = AtomicUsize::new(1);

/// Document-unique id for ARIA relationships.
pub(crate) fn next_dom_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique_per_call() {
        let first = next_dom_id("ui-tooltip");
        let second = next_dom_id("ui-tooltip");
        assert_ne!(first, second);
        assert!(first.starts_with("ui-tooltip-"));
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
