//! Studio page: toolbar over the three-pane editor row.
//!
//! ARCHITECTURE
//! ============
//! The page only composes. Layout state lives in the `PanelLayout` context
//! and is driven by `StudioToolbar` and `PanelFrame`; the breakpoint readout
//! in the status line comes from the same signal.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::badge::Badge;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::panel_frame::PanelFrame;
use crate::components::toolbar::StudioToolbar;
use crate::state::panels::Breakpoint;
use crate::util::auth::{install_unauth_redirect, use_auth};
use crate::util::panels::use_panels;

fn breakpoint_label(breakpoint: Breakpoint) -> &'static str {
    match breakpoint {
        Breakpoint::Mobile => "mobile",
        Breakpoint::Tablet => "tablet",
        Breakpoint::Desktop => "desktop",
    }
}

#[component]
pub fn StudioPage() -> impl IntoView {
    let auth = use_auth();
    let panels = use_panels();
    install_unauth_redirect(auth, use_navigate());

    let breakpoint = move || panels.with(|p| breakpoint_label(p.breakpoint()));
    let detached = move || panels.with(|p| p.state.preview_detached);

    view! {
        <div class="studio-page">
            <StudioToolbar/>
            <PanelFrame
                left=|| view! {
                    <Card variant="ghost" class="studio-tools">
                        <CardHeader><CardTitle>"Tools"</CardTitle></CardHeader>
                        <CardContent>"Assets, layers, and scenes."</CardContent>
                    </Card>
                }
                center=|| view! { <div class="studio-editor" id="studio-editor"></div> }
                right=|| view! {
                    <Card variant="outline" class="studio-preview">
                        <CardHeader><CardTitle>"Preview"</CardTitle></CardHeader>
                        <CardContent><div class="studio-preview__surface"></div></CardContent>
                    </Card>
                }
            />
            <footer class="studio-status">
                <Badge variant="outline">{breakpoint}</Badge>
                <Show when=detached>
                    <Badge variant="secondary">"Preview detached"</Badge>
                </Show>
            </footer>
        </div>
    }
}
