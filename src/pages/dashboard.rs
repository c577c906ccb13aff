//! Signed-in landing page: account summary and linked platforms.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::platform_list::PlatformList;
use crate::config::StudioConfig;
use crate::state::auth::User;
use crate::util::auth::{install_unauth_redirect, logout_and_leave, use_auth};

/// "N platforms connected" summary line.
pub fn connected_summary(user: &User) -> String {
    let linked = user.connected_platforms.count();
    let noun = if linked == 1 { "platform" } else { "platforms" };
    format!("{linked} {noun} connected")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<StudioConfig>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let name = move || auth.with(|a| a.user().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || auth.with(|a| a.user().map(|u| u.email.clone()).unwrap_or_default());
    let summary = move || auth.with(|a| a.user().map(connected_summary).unwrap_or_default());

    let on_logout = Callback::new(move |()| logout_and_leave(auth, &config, &navigate));

    view! {
        <div class="dashboard-page">
            <Show when=move || auth.with(|a| a.is_authenticated()) fallback=|| view! { <p class="dashboard-page__loading">"Loading..."</p> }>
                <Card class="dashboard-card">
                    <CardHeader>
                        <CardTitle>{name}</CardTitle>
                        <CardDescription>{email}</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Badge variant="secondary">{summary}</Badge>
                        <PlatformList/>
                    </CardContent>
                    <CardFooter class="dashboard-card__actions">
                        <a href="/studio" class="dashboard-card__open">"Open studio"</a>
                        <Button variant="ghost" on_click=on_logout>"Logout"</Button>
                    </CardFooter>
                </Card>
            </Show>
        </div>
    }
}
