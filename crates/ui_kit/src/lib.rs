//! Presentational Leptos primitives: buttons, badges, avatars, cards,
//! switches, tooltips, inputs, and a searchable data table.
//!
//! Every primitive resolves its variant props through a static
//! [`ClassRecipe`], emits the `data-ui-*` DOM contract, and forwards extra
//! attributes and a `NodeRef` to its root element. Stateful behavior (number
//! stepping, table search/pagination) lives in [`ui_core_headless`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    avatar_initials, resolve_classes, Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonSize,
    ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    ClassRecipe, DataTable, Elevation, FieldVariant, NumberInput, Switch, SwitchSize, TextField,
    Tooltip, TooltipSide, VariantAxis,
};
pub use ui_core_headless::{Column, DataViewConfig, Row, SequenceFieldConfig, SequenceMode};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
        CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Column, DataTable,
        DataViewConfig, Elevation, FieldVariant, NumberInput, Row, SequenceFieldConfig,
        SequenceMode, Switch, SwitchSize, TextField, Tooltip, TooltipSide,
    };
}
