//! Static variant-to-class tables for each primitive.

/// One variant dimension of a [`ClassRecipe`] (for example `size`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantAxis {
    /// Axis name used in selections.
    pub name: &'static str,
    /// Option used when the selection is missing or unknown.
    pub default: &'static str,
    /// `(option token, class tokens)` pairs.
    pub options: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    fn lookup(&self, token: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(option, _)| *option == token)
            .map(|(_, classes)| *classes)
    }

    fn classes_for(&self, token: &str) -> Option<&'static str> {
        self.lookup(token).or_else(|| self.lookup(self.default))
    }
}

/// Base class plus variant axes for one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRecipe {
    /// Class tokens always present.
    pub base: &'static str,
    /// Axes resolved in declaration order.
    pub axes: &'static [VariantAxis],
}

impl ClassRecipe {
    /// Resolves `(axis, option)` selections into a class string.
    pub fn resolve(&self, selections: &[(&str, &str)]) -> String {
        let mut classes = vec![self.base];
        for axis in self.axes {
            let token = selections
                .iter()
                .rev()
                .find(|(name, _)| *name == axis.name)
                .map_or(axis.default, |(_, token)| *token);
            if let Some(resolved) = axis.classes_for(token).filter(|c| !c.is_empty()) {
                classes.push(resolved);
            }
        }
        classes.join(" ")
    }
}

/// Resolves a recipe and appends the caller's layout class.
///
/// Pure and deterministic: the same inputs always produce the same string.
pub fn resolve_classes(
    recipe: &ClassRecipe,
    selections: &[(&str, &str)],
    layout_class: Option<&str>,
) -> String {
    let resolved = recipe.resolve(selections);
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{resolved} {layout_class}"),
        _ => resolved,
    }
}

pub(crate) const BUTTON: ClassRecipe = ClassRecipe {
    base: "ui-button",
    axes: &[
        VariantAxis {
            name: "variant",
            default: "default",
            options: &[
                ("default", "ui-button--default"),
                ("destructive", "ui-button--destructive"),
                ("outline", "ui-button--outline"),
                ("secondary", "ui-button--secondary"),
                ("ghost", "ui-button--ghost"),
                ("link", "ui-button--link"),
            ],
        },
        VariantAxis {
            name: "size",
            default: "default",
            options: &[
                ("default", "ui-button--size-default"),
                ("sm", "ui-button--size-sm"),
                ("lg", "ui-button--size-lg"),
                ("icon", "ui-button--size-icon"),
            ],
        },
    ],
};

pub(crate) const BADGE: ClassRecipe = ClassRecipe {
    base: "ui-badge",
    axes: &[VariantAxis {
        name: "variant",
        default: "default",
        options: &[
            ("default", "ui-badge--default"),
            ("secondary", "ui-badge--secondary"),
            ("destructive", "ui-badge--destructive"),
            ("outline", "ui-badge--outline"),
        ],
    }],
};

pub(crate) const AVATAR: ClassRecipe = ClassRecipe {
    base: "ui-avatar",
    axes: &[VariantAxis {
        name: "size",
        default: "md",
        options: &[
            ("sm", "ui-avatar--sm"),
            ("md", "ui-avatar--md"),
            ("lg", "ui-avatar--lg"),
        ],
    }],
};

pub(crate) const CARD: ClassRecipe = ClassRecipe {
    base: "ui-card",
    axes: &[VariantAxis {
        name: "elevation",
        default: "raised",
        options: &[("flat", "ui-card--flat"), ("raised", "ui-card--raised")],
    }],
};

pub(crate) const CARD_HEADER: ClassRecipe = ClassRecipe {
    base: "ui-card-header",
    axes: &[],
};

pub(crate) const CARD_TITLE: ClassRecipe = ClassRecipe {
    base: "ui-card-title",
    axes: &[],
};

pub(crate) const CARD_DESCRIPTION: ClassRecipe = ClassRecipe {
    base: "ui-card-description",
    axes: &[],
};

pub(crate) const CARD_CONTENT: ClassRecipe = ClassRecipe {
    base: "ui-card-content",
    axes: &[],
};

pub(crate) const CARD_FOOTER: ClassRecipe = ClassRecipe {
    base: "ui-card-footer",
    axes: &[],
};

pub(crate) const SWITCH: ClassRecipe = ClassRecipe {
    base: "ui-switch",
    axes: &[
        VariantAxis {
            name: "size",
            default: "md",
            options: &[("sm", "ui-switch--sm"), ("md", "ui-switch--md")],
        },
        VariantAxis {
            name: "checked",
            default: "false",
            options: &[("true", "ui-switch--on"), ("false", "ui-switch--off")],
        },
    ],
};

pub(crate) const TOOLTIP: ClassRecipe = ClassRecipe {
    base: "ui-tooltip",
    axes: &[VariantAxis {
        name: "side",
        default: "top",
        options: &[
            ("top", "ui-tooltip--top"),
            ("right", "ui-tooltip--right"),
            ("bottom", "ui-tooltip--bottom"),
            ("left", "ui-tooltip--left"),
        ],
    }],
};

pub(crate) const FIELD: ClassRecipe = ClassRecipe {
    base: "ui-field",
    axes: &[VariantAxis {
        name: "variant",
        default: "standard",
        options: &[("standard", ""), ("inset", "ui-field--inset")],
    }],
};

pub(crate) const NUMBER_INPUT: ClassRecipe = ClassRecipe {
    base: "ui-number-input",
    axes: &[VariantAxis {
        name: "mode",
        default: "numeric",
        options: &[
            ("numeric", "ui-number-input--numeric"),
            ("alpha", "ui-number-input--alpha"),
            ("alphanumeric", "ui-number-input--alphanumeric"),
        ],
    }],
};

pub(crate) const DATA_TABLE: ClassRecipe = ClassRecipe {
    base: "ui-data-table",
    axes: &[],
};
