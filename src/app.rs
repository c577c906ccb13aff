//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::StudioConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, studio::StudioPage};
use crate::util::auth::provide_auth;
use crate::util::panels::provide_panels;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration, the auth session, and the studio layout as
/// contexts, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StudioConfig::default();
    provide_context(config.clone());
    provide_auth(&config);
    provide_panels(&config);

    view! {
        <Stylesheet id="leptos" href="/pkg/studio-ui.css"/>
        <Title text="Creator Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("studio") view=StudioPage/>
            </Routes>
        </Router>
    }
}
