//! Variant-to-class resolution for presentational components.
//!
//! DESIGN
//! ======
//! Each component exposes closed enums for its visual variants and sizes.
//! Props may arrive as free-form strings (markup, persisted settings), so every
//! enum also parses by name and falls back to its `Default` variant instead of
//! failing. Resolution is pure and allocation happens only in the final join.

#[cfg(test)]
#[path = "variants_test.rs"]
mod variants_test;

const BADGE_BASE: &str = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";
const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";
const CARD_BASE: &str = "rounded-lg text-card-foreground";

/// Join class fragments with single spaces, skipping empty fragments.
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for word in parts.into_iter().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Visual style of a `Badge`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub const ALL: [Self; 4] = [Self::Default, Self::Secondary, Self::Destructive, Self::Outline];

    /// Parse a variant name, falling back to `Default` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "secondary" => Self::Secondary,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            _ => Self::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary text-primary-foreground hover:bg-primary/80",
            Self::Secondary => "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Destructive => "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80",
            Self::Outline => "text-foreground",
        }
    }
}

/// Visual style of a `Button`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Parse a variant name, falling back to `Default` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            "secondary" => Self::Secondary,
            "ghost" => Self::Ghost,
            "link" => Self::Link,
            _ => Self::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
            Self::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Footprint of a `Button`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Parse a size name, falling back to `Default` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "icon" => Self::Icon,
            _ => Self::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Surface treatment of a `Card`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardVariant {
    #[default]
    Default,
    Outline,
    Elevated,
    Ghost,
}

impl CardVariant {
    pub const ALL: [Self; 4] = [Self::Default, Self::Outline, Self::Elevated, Self::Ghost];

    /// Parse a variant name, falling back to `Default` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "outline" => Self::Outline,
            "elevated" => Self::Elevated,
            "ghost" => Self::Ghost,
            _ => Self::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Elevated => "elevated",
            Self::Ghost => "ghost",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border bg-card shadow-sm",
            Self::Outline => "border-2 border-border bg-transparent",
            Self::Elevated => "border bg-card shadow-lg",
            Self::Ghost => "border-transparent bg-transparent shadow-none",
        }
    }
}

/// Full class string for a badge.
pub fn badge_classes(variant: BadgeVariant, extra: Option<&str>) -> String {
    join_classes([BADGE_BASE, variant.class(), extra.unwrap_or_default()])
}

/// Full class string for a button.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    join_classes([BUTTON_BASE, variant.class(), size.class(), extra.unwrap_or_default()])
}

/// Full class string for a card.
pub fn card_classes(variant: CardVariant, extra: Option<&str>) -> String {
    join_classes([CARD_BASE, variant.class(), extra.unwrap_or_default()])
}

macro_rules! impl_from_name {
    ($($ty:ty),+) => {
        $(
            impl From<&str> for $ty {
                fn from(name: &str) -> Self {
                    Self::from_name(name)
                }
            }
        )+
    };
}

impl_from_name!(BadgeVariant, ButtonVariant, ButtonSize, CardVariant);
