//! Variant-driven button.
//!
//! DESIGN
//! ======
//! Classes are resolved once at render time from the variant/size props.
//! Standard element attributes pass through with `attr:` at the call site,
//! e.g. `<Button attr:r#type="submit">`.

use leptos::prelude::*;

use crate::util::variants::{ButtonSize, ButtonVariant, button_classes};

/// Themed `<button>`.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class.as_deref());
    view! {
        <button
            class=classes
            title=title
            data-variant=variant.name()
            data-size=size.name()
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
