//! Small status pill.

use leptos::prelude::*;

use crate::util::variants::{BadgeVariant, badge_classes};

/// Inline badge; `variant` accepts the enum or its name (`variant="outline"`).
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = badge_classes(variant, class.as_deref());
    view! {
        <span class=classes data-variant=variant.name()>
            {children()}
        </span>
    }
}
