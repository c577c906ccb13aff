//! Entry page: simulated provider sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::config::StudioConfig;
use crate::state::auth::{AuthState, PendingKind, Platform};
use crate::util::auth::{install_entry_redirect, spawn_login, use_auth};

/// Providers offered on the sign-in card.
pub const LOGIN_PROVIDERS: [Platform; 3] = [Platform::Google, Platform::Github, Platform::Discord];

/// Status line under the provider buttons.
pub fn login_status_message(state: &AuthState) -> Option<String> {
    state.pending.iter().find_map(|op| match op.kind {
        PendingKind::Login(platform) => Some(format!("Connecting to {}...", platform.label())),
        PendingKind::Connect(_) => None,
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<StudioConfig>();
    let navigate = use_navigate();
    let location = use_location();

    install_entry_redirect(auth, move || location.pathname.get_untracked(), navigate.clone());

    let busy = move || auth.with(AuthState::is_logging_in);
    // The in-flight login completes as superseded and is ignored.
    let on_cancel = Callback::new(move |()| auth.update(AuthState::cancel_pending));
    let status = move || auth.with(login_status_message);

    let buttons = LOGIN_PROVIDERS
        .into_iter()
        .map(|platform| {
            let config = config.clone();
            let navigate = navigate.clone();
            let on_click = Callback::new(move |()| {
                spawn_login(auth, platform.label().to_owned(), config.clone(), navigate.clone());
            });
            view! {
                <Button variant="outline" class="w-full" disabled=Signal::derive(busy) on_click=on_click>
                    {format!("Continue with {}", platform.label())}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <Card variant="elevated" class="login-card">
                <CardHeader>
                    <CardTitle>"Creator Studio"</CardTitle>
                    <CardDescription>"Sign in to open your workspace."</CardDescription>
                </CardHeader>
                <CardContent class="login-card__providers">{buttons}</CardContent>
                <CardFooter>
                    <Show when=move || status().is_some()>
                        <p class="login-message">{move || status().unwrap_or_default()}</p>
                        <Button variant="link" size="sm" on_click=on_cancel>"Cancel"</Button>
                    </Show>
                </CardFooter>
            </Card>
        </div>
    }
}
