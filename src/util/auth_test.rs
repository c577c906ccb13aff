#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;

use super::*;
use crate::state::auth::{Platform, Session};
use crate::util::ui_persistence::MemoryStore;
use futures::executor::block_on;

fn store() -> MemoryStore<User> {
    MemoryStore::new("studio_ui_user")
}

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    state.hydrate(&store());
    state
}

fn signed_in() -> AuthState {
    let store = store();
    store.save(&User::demo(Platform::Google)).expect("seed");
    let mut state = AuthState::default();
    state.hydrate(&store);
    state
}

// =============================================================
// Redirect predicates
// =============================================================

#[test]
fn should_not_redirect_before_session_resolves() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_redirect_unauth_when_anonymous() {
    assert!(should_redirect_unauth(&anonymous()));
}

#[test]
fn should_not_redirect_unauth_when_signed_in() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn entry_redirect_only_from_entry_route_with_session() {
    let state = signed_in();
    assert!(should_redirect_from_entry(&state, "/"));
    assert!(!should_redirect_from_entry(&state, "/studio"));
    assert!(!should_redirect_from_entry(&anonymous(), "/"));
}

// =============================================================
// EntryRedirect
// =============================================================

fn counting_navigate(calls: &RefCell<Vec<String>>) -> impl Fn(&str, NavigateOptions) + '_ {
    move |path, _| calls.borrow_mut().push(path.to_owned())
}

#[test]
fn entry_redirect_waits_for_session_then_fires_once() {
    let calls = RefCell::new(Vec::new());
    let navigate = counting_navigate(&calls);
    let mut guard = EntryRedirect::default();

    guard.run(&AuthState::default(), "/", &navigate);
    assert!(calls.borrow().is_empty());

    let state = signed_in();
    guard.run(&state, "/", &navigate);
    guard.run(&state, "/", &navigate);
    assert_eq!(*calls.borrow(), vec![HOME_ROUTE.to_owned()]);
}

#[test]
fn entry_redirect_ignores_sign_in_after_anonymous_resolution() {
    let calls = RefCell::new(Vec::new());
    let navigate = counting_navigate(&calls);
    let mut guard = EntryRedirect::default();

    guard.run(&anonymous(), "/", &navigate);
    guard.run(&signed_in(), "/", &navigate);
    assert!(calls.borrow().is_empty());
}

#[test]
fn entry_redirect_stays_put_off_the_entry_route() {
    let calls = RefCell::new(Vec::new());
    let mut guard = EntryRedirect::default();
    guard.run(&signed_in(), "/studio", &counting_navigate(&calls));
    assert!(calls.borrow().is_empty());
}

// =============================================================
// Async flows (latency skipped outside the browser)
// =============================================================

#[test]
fn login_then_logout_round_trip() {
    let auth = RwSignal::new(anonymous());
    let store = store();
    let config = StudioConfig::default();

    let user = block_on(login(auth, "Google", &config, &store)).expect("login");
    assert!(user.connected_platforms.google);
    assert!(auth.with_untracked(AuthState::is_authenticated));
    assert!(store.raw().is_some());

    logout(auth, &store).expect("logout");
    assert_eq!(auth.with_untracked(|a| a.session.clone()), Session::Anonymous);
    assert!(store.raw().is_none());
}

#[test]
fn login_with_unknown_provider_leaves_session_alone() {
    let auth = RwSignal::new(anonymous());
    let store = store();
    let result = block_on(login(auth, "Orkut", &StudioConfig::default(), &store));
    assert!(matches!(result, Err(AuthError::UnknownPlatform(_))));
    assert!(!auth.with_untracked(AuthState::is_authenticated));
    assert!(store.raw().is_none());
}

#[test]
fn connect_and_disconnect_platform_flow() {
    let auth = RwSignal::new(anonymous());
    let store = store();
    let config = StudioConfig::default();
    block_on(login(auth, "google", &config, &store)).expect("login");

    block_on(connect_platform(auth, "discord", &config, &store)).expect("connect");
    assert_eq!(store.load().map(|u| u.connected_platforms.discord), Some(true));

    disconnect_platform(auth, "google", &store).expect("disconnect");
    let persisted = store.load().expect("persisted");
    assert!(!persisted.connected_platforms.google);
    assert!(persisted.connected_platforms.discord);
}

#[test]
fn connect_without_session_is_rejected() {
    let auth = RwSignal::new(anonymous());
    let result = block_on(connect_platform(auth, "github", &StudioConfig::default(), &store()));
    assert!(matches!(result, Err(AuthError::NotAuthenticated)));
}
