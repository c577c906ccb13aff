//! Card surface and its layout parts.

use leptos::prelude::*;

use crate::util::variants::{CardVariant, card_classes, join_classes};

/// Card container.
#[component]
pub fn Card(
    #[prop(optional, into)] variant: CardVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = card_classes(variant, class.as_deref());
    view! {
        <div class=classes data-variant=variant.name()>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = join_classes(["flex flex-col space-y-1.5 p-6", class.as_deref().unwrap_or_default()]);
    view! { <div class=classes>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = join_classes([
        "text-2xl font-semibold leading-none tracking-tight",
        class.as_deref().unwrap_or_default(),
    ]);
    view! { <h3 class=classes>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = join_classes(["text-sm text-muted-foreground", class.as_deref().unwrap_or_default()]);
    view! { <p class=classes>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = join_classes(["p-6 pt-0", class.as_deref().unwrap_or_default()]);
    view! { <div class=classes>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = join_classes(["flex items-center p-6 pt-0", class.as_deref().unwrap_or_default()]);
    view! { <div class=classes>{children()}</div> }
}
