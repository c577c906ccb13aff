//! Studio top bar: pane toggles, fullscreen, preview detach, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces session identity and the layout controls that stay visible while
//! editing, mirroring the reference board toolbar.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::config::StudioConfig;
use crate::state::panels::{PanelSide, PanelState};
use crate::util::auth::{logout_and_leave, use_auth};
use crate::util::panels::{toggle_fullscreen, toggle_panel, toggle_preview_detached, use_panels};
use crate::util::variants::ButtonVariant;

/// Toggle buttons read as "active" (secondary) while their feature is on.
pub fn toggle_variant(active: bool) -> ButtonVariant {
    if active { ButtonVariant::Secondary } else { ButtonVariant::Ghost }
}

/// Label for the preview detach control.
pub fn detach_label(state: &PanelState) -> &'static str {
    if state.preview_detached { "Dock preview" } else { "Pop out preview" }
}

/// Top toolbar for the studio page.
#[component]
pub fn StudioToolbar() -> impl IntoView {
    let auth = use_auth();
    let panels = use_panels();
    let config = expect_context::<StudioConfig>();
    let navigate = use_navigate();

    let display_name = move || auth.with(|a| a.user().map_or_else(String::new, |u| u.name.clone()));
    let initials = move || auth.with(|a| a.user().map(crate::state::auth::User::initials).unwrap_or_default());
    let panel_state = move || panels.with(|p| p.state);

    let on_left = Callback::new({
        let config = config.clone();
        move |()| toggle_panel(panels, PanelSide::Left, &config)
    });
    let on_right = Callback::new({
        let config = config.clone();
        move |()| toggle_panel(panels, PanelSide::Right, &config)
    });
    let on_detach = Callback::new({
        let config = config.clone();
        move |()| toggle_preview_detached(panels, &config)
    });
    let on_fullscreen = Callback::new(move |()| toggle_fullscreen(panels));
    let on_logout = Callback::new(move |()| logout_and_leave(auth, &config, &navigate));

    view! {
        <header class="studio-toolbar">
            <a href="/dashboard" class="studio-toolbar__back" title="Back to dashboard">"←"</a>
            <span class="studio-toolbar__title">"Studio"</span>
            <span class="studio-toolbar__spacer"></span>

            {move || {
                let state = panel_state();
                view! {
                    <Button variant=toggle_variant(!state.left_collapsed) size="sm" title="Toggle tools" on_click=on_left>
                        "Tools"
                    </Button>
                    <Button variant=toggle_variant(!state.right_collapsed) size="sm" title="Toggle preview" on_click=on_right>
                        "Preview"
                    </Button>
                    <Button variant=toggle_variant(state.preview_detached) size="sm" on_click=on_detach>
                        {detach_label(&state)}
                    </Button>
                    <Button variant=toggle_variant(state.fullscreen) size="icon" title="Fullscreen" on_click=on_fullscreen>
                        "⛶"
                    </Button>
                }
            }}

            <span class="studio-toolbar__divider"></span>
            <Badge variant="secondary">{initials}</Badge>
            <span class="studio-toolbar__self">{display_name}</span>
            <Button variant="outline" size="sm" on_click=on_logout>
                "Logout"
            </Button>
        </header>
    }
}
