//! Auth flows and shared redirect behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components call these helpers instead of mutating `AuthState`
//! directly, so simulated latency, persistence, and route redirects behave
//! identically wherever sign-in controls appear.
//!
//! TRADE-OFFS
//! ==========
//! Latency is only simulated in the browser (`hydrate`). Other builds resolve
//! immediately, which keeps server rendering and native tests deterministic.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::StudioConfig;
use crate::state::auth::{AuthError, AuthState, User};
use crate::util::ui_persistence::{LocalStorageStore, SnapshotStore};

/// Route shown to anonymous visitors.
pub const ENTRY_ROUTE: &str = "/";
/// Route a fresh sign-in lands on.
pub const HOME_ROUTE: &str = "/dashboard";

/// Shared auth signal from context.
///
/// # Panics
///
/// Panics when called outside the tree under `App`, which provides the signal.
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Store for the signed-in user snapshot.
pub fn user_store(config: &StudioConfig) -> LocalStorageStore<User> {
    LocalStorageStore::new(config.user_storage_key)
}

/// Create the auth signal and restore the persisted session on the client.
pub fn provide_auth(config: &StudioConfig) -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    let store = user_store(config);
    // Effects only run in the browser; SSR leaves the session uninitialized.
    Effect::new(move || {
        auth.update(|a| a.hydrate(&store));
    });
    provide_context(auth);
    auth
}

/// Anonymous visitors on guarded routes go back to the entry route.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.is_resolved() && !state.is_authenticated()
}

/// An existing session opened on the entry route skips straight to home.
pub fn should_redirect_from_entry(state: &AuthState, pathname: &str) -> bool {
    state.is_authenticated() && pathname == ENTRY_ROUTE
}

/// Redirect to the entry route whenever the session resolves as anonymous.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(ENTRY_ROUTE, NavigateOptions::default());
        }
    });
}

/// One-shot redirect off the entry route.
///
/// Decides on the first run after the session resolves and never again, so a
/// later sign-in made on the entry page is left to the login flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryRedirect {
    fired: bool,
}

impl EntryRedirect {
    /// Navigate home if this is the deciding run and `state` warrants it.
    pub fn run<F>(&mut self, state: &AuthState, pathname: &str, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        if self.fired || !state.is_resolved() {
            return;
        }
        self.fired = true;
        if should_redirect_from_entry(state, pathname) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    }
}

/// Redirect once from the entry route when a restored session is present.
pub fn install_entry_redirect<F, P>(auth: RwSignal<AuthState>, pathname: P, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    P: Fn() -> String + 'static,
{
    let guard = StoredValue::new(EntryRedirect::default());
    Effect::new(move || {
        let path = pathname();
        auth.with(|state| guard.update_value(|g| g.run(state, &path, &navigate)));
    });
}

async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = delay;
}

/// Sign in with `provider` after the simulated provider round-trip.
///
/// # Errors
///
/// Returns `UnknownPlatform` immediately for unsupported providers,
/// `Superseded` if another login or a logout happened while waiting, or
/// `Storage` if the session could not be persisted (the session still holds).
pub async fn login<S>(auth: RwSignal<AuthState>, provider: &str, config: &StudioConfig, store: &S) -> Result<User, AuthError>
where
    S: SnapshotStore<User>,
{
    let op = auth
        .try_update(|a| a.begin_login(provider))
        .unwrap_or(Err(AuthError::Superseded))?;
    simulate_latency(config.login_delay).await;
    auth.try_update(|a| {
        a.complete_login(op, store)?;
        a.user().cloned().ok_or(AuthError::NotAuthenticated)
    })
    .unwrap_or(Err(AuthError::Superseded))
}

/// Sign out and forget the persisted session.
///
/// # Errors
///
/// Returns `Storage` if the persisted record could not be removed.
pub fn logout<S>(auth: RwSignal<AuthState>, store: &S) -> Result<(), AuthError>
where
    S: SnapshotStore<User>,
{
    auth.try_update(|a| a.logout(store)).unwrap_or(Ok(()))
}

/// Link `platform` to the signed-in user after a simulated delay.
///
/// # Errors
///
/// Returns `NotAuthenticated` without waiting when nobody is signed in.
pub async fn connect_platform<S>(
    auth: RwSignal<AuthState>,
    platform: &str,
    config: &StudioConfig,
    store: &S,
) -> Result<(), AuthError>
where
    S: SnapshotStore<User>,
{
    let op = auth
        .try_update(|a| a.begin_connect(platform))
        .unwrap_or(Err(AuthError::Superseded))?;
    simulate_latency(config.connect_delay).await;
    auth.try_update(|a| a.complete_connect(op, store))
        .unwrap_or(Err(AuthError::Superseded))
}

/// Unlink `platform` from the signed-in user.
///
/// # Errors
///
/// Returns `NotAuthenticated` when nobody is signed in.
pub fn disconnect_platform<S>(auth: RwSignal<AuthState>, platform: &str, store: &S) -> Result<(), AuthError>
where
    S: SnapshotStore<User>,
{
    auth.try_update(|a| a.disconnect_platform(platform, store))
        .unwrap_or(Err(AuthError::NotAuthenticated))
}

/// Fire-and-forget login from a click handler; navigates home on success.
pub fn spawn_login<F>(auth: RwSignal<AuthState>, provider: String, config: StudioConfig, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        let store = user_store(&config);
        match login(auth, &provider, &config, &store).await {
            Ok(user) => {
                leptos::logging::log!("signed in as {} via {provider}", user.email);
                navigate(HOME_ROUTE, NavigateOptions::default());
            }
            Err(AuthError::Superseded) => {}
            Err(AuthError::Storage(e)) => {
                leptos::logging::warn!("signed in but session not persisted: {e}");
                navigate(HOME_ROUTE, NavigateOptions::default());
            }
            Err(e) => leptos::logging::warn!("login failed: {e}"),
        }
    });
}

/// Fire-and-forget platform link from a click handler.
pub fn spawn_connect(auth: RwSignal<AuthState>, platform: String, config: StudioConfig) {
    leptos::task::spawn_local(async move {
        let store = user_store(&config);
        if let Err(e) = connect_platform(auth, &platform, &config, &store).await {
            leptos::logging::warn!("connect {platform} failed: {e}");
        }
    });
}

/// Sign out from a click handler and return to the entry route.
pub fn logout_and_leave<F>(auth: RwSignal<AuthState>, config: &StudioConfig, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    let store = user_store(config);
    if let Err(e) = logout(auth, &store) {
        leptos::logging::warn!("logout: {} not cleared: {e}", store.key());
    }
    navigate(ENTRY_ROUTE, NavigateOptions::default());
}
