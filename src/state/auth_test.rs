use super::*;
use crate::util::ui_persistence::MemoryStore;

fn store() -> MemoryStore<User> {
    MemoryStore::new("studio_ui_user")
}

fn signed_in(store: &MemoryStore<User>, provider: &str) -> AuthState {
    let mut state = AuthState::default();
    let op = state.begin_login(provider).expect("begin login");
    state.complete_login(op, store).expect("complete login");
    state
}

struct FailingStore;

impl SnapshotStore<User> for FailingStore {
    fn load(&self) -> Option<User> {
        None
    }

    fn save(&self, _value: &User) -> Result<(), PersistError> {
        Err(PersistError::Unavailable)
    }

    fn clear(&self) -> Result<(), PersistError> {
        Err(PersistError::Unavailable)
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_uninitialized() {
    let state = AuthState::default();
    assert_eq!(state.session, Session::Uninitialized);
    assert!(!state.is_resolved());
    assert!(state.user().is_none());
    assert!(state.pending.is_empty());
}

// =============================================================
// Platform
// =============================================================

#[test]
fn platform_from_name_is_case_insensitive() {
    assert_eq!(Platform::from_name("Google"), Some(Platform::Google));
    assert_eq!(Platform::from_name("GITHUB"), Some(Platform::Github));
    assert_eq!(Platform::from_name(" discord "), Some(Platform::Discord));
    assert_eq!(Platform::from_name("myspace"), None);
}

#[test]
fn connected_platforms_only_sets_one_flag() {
    for platform in Platform::ALL {
        let flags = ConnectedPlatforms::only(platform);
        assert_eq!(flags.count(), 1);
        assert!(flags.get(platform));
    }
}

#[test]
fn user_initials_use_first_two_words() {
    let user = User::demo(Platform::Google);
    assert_eq!(user.initials(), "DC");
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_without_snapshot_is_anonymous() {
    let mut state = AuthState::default();
    state.hydrate(&store());
    assert_eq!(state.session, Session::Anonymous);
    assert!(state.is_resolved());
}

#[test]
fn hydrate_restores_persisted_user() {
    let store = store();
    store.save(&User::demo(Platform::Twitter)).expect("seed");
    let mut state = AuthState::default();
    state.hydrate(&store);
    assert_eq!(state.user().map(|u| u.connected_platforms.twitter), Some(true));
}

#[test]
fn hydrate_with_malformed_snapshot_is_anonymous() {
    let store = MemoryStore::<User>::with_raw("studio_ui_user", "{\"id\": 4");
    let mut state = AuthState::default();
    state.hydrate(&store);
    assert_eq!(state.session, Session::Anonymous);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_google_persists_only_google_connected() {
    let store = store();
    let state = signed_in(&store, "Google");
    assert!(state.is_authenticated());

    let raw = store.raw().expect("persisted user");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["connectedPlatforms"]["google"], true);
    assert_eq!(json["connectedPlatforms"]["github"], false);
    assert_eq!(json["connectedPlatforms"]["twitter"], false);
    assert_eq!(json["connectedPlatforms"]["discord"], false);
}

#[test]
fn login_marks_pending_until_completed() {
    let mut state = AuthState::default();
    let op = state.begin_login("github").expect("begin");
    assert!(state.is_logging_in());
    assert_eq!(op.kind, PendingKind::Login(Platform::Github));
    state.complete_login(op, &store()).expect("complete");
    assert!(!state.is_logging_in());
}

#[test]
fn login_with_unknown_provider_fails_before_starting() {
    let mut state = AuthState::default();
    let err = state.begin_login("Friendster").expect_err("unknown");
    assert!(matches!(err, AuthError::UnknownPlatform(name) if name == "Friendster"));
    assert!(state.pending.is_empty());
}

#[test]
fn newer_login_supersedes_older_one() {
    let store = store();
    let mut state = AuthState::default();
    let first = state.begin_login("google").expect("first");
    let second = state.begin_login("discord").expect("second");
    assert!(second.seq > first.seq);

    assert!(matches!(state.complete_login(first, &store), Err(AuthError::Superseded)));
    assert!(!state.is_authenticated());
    assert!(store.raw().is_none());

    state.complete_login(second, &store).expect("second completes");
    assert_eq!(state.user().map(|u| u.connected_platforms), Some(ConnectedPlatforms::only(Platform::Discord)));
}

#[test]
fn cancel_pending_drops_in_flight_login() {
    let mut state = AuthState::default();
    let op = state.begin_login("google").expect("begin");
    state.cancel_pending();
    assert!(matches!(state.complete_login(op, &store()), Err(AuthError::Superseded)));
    assert!(!state.is_authenticated());
}

#[test]
fn logout_clears_memory_and_storage() {
    let store = store();
    let mut state = signed_in(&store, "Google");
    state.logout(&store).expect("logout");
    assert_eq!(state.session, Session::Anonymous);
    assert!(store.raw().is_none());
}

#[test]
fn logout_is_idempotent() {
    let store = store();
    let mut state = AuthState::default();
    state.logout(&store).expect("first");
    state.logout(&store).expect("second");
    assert_eq!(state.session, Session::Anonymous);
}

#[test]
fn logout_supersedes_in_flight_login() {
    let store = store();
    let mut state = AuthState::default();
    let op = state.begin_login("google").expect("begin");
    state.logout(&store).expect("logout");
    assert!(matches!(state.complete_login(op, &store), Err(AuthError::Superseded)));
    assert!(!state.is_authenticated());
}

#[test]
fn login_storage_failure_keeps_session() {
    let mut state = AuthState::default();
    let op = state.begin_login("google").expect("begin");
    let result = state.complete_login(op, &FailingStore);
    assert!(matches!(result, Err(AuthError::Storage(PersistError::Unavailable))));
    assert!(state.is_authenticated());
}

// =============================================================
// Platform connect / disconnect
// =============================================================

#[test]
fn connect_platform_sets_flag_and_repersists() {
    let store = store();
    let mut state = signed_in(&store, "google");
    let op = state.begin_connect("GitHub").expect("begin");
    assert!(state.is_connecting(Platform::Github));
    state.complete_connect(op, &store).expect("complete");

    assert!(!state.is_connecting(Platform::Github));
    let persisted = store.load().expect("persisted");
    assert!(persisted.connected_platforms.google);
    assert!(persisted.connected_platforms.github);
}

#[test]
fn connect_requires_signed_in_user() {
    let store = store();
    let mut state = AuthState::default();
    state.hydrate(&store);
    assert!(matches!(state.begin_connect("github"), Err(AuthError::NotAuthenticated)));
    assert!(state.pending.is_empty());
    assert!(store.raw().is_none());
}

#[test]
fn connect_completion_after_logout_is_superseded() {
    let store = store();
    let mut state = signed_in(&store, "google");
    let op = state.begin_connect("twitter").expect("begin");
    state.logout(&store).expect("logout");
    assert!(matches!(state.complete_connect(op, &store), Err(AuthError::Superseded)));
    assert!(store.raw().is_none());
}

#[test]
fn disconnect_platform_clears_flag() {
    let store = store();
    let mut state = signed_in(&store, "google");
    state.disconnect_platform("google", &store).expect("disconnect");
    assert_eq!(state.user().map(|u| u.connected_platforms.count()), Some(0));
    assert_eq!(store.load().map(|u| u.connected_platforms.google), Some(false));
}

#[test]
fn disconnect_without_user_changes_nothing() {
    let store = store();
    let mut state = AuthState::default();
    assert!(matches!(state.disconnect_platform("google", &store), Err(AuthError::NotAuthenticated)));
    assert!(store.raw().is_none());
}

#[test]
fn disconnect_cancels_pending_connect_for_same_platform() {
    let store = store();
    let mut state = signed_in(&store, "google");
    let op = state.begin_connect("discord").expect("begin");
    state.disconnect_platform("discord", &store).expect("disconnect");
    assert!(matches!(state.complete_connect(op, &store), Err(AuthError::Superseded)));
    assert_eq!(state.user().map(|u| u.connected_platforms.discord), Some(false));
}

#[test]
fn repeated_connect_of_same_platform_supersedes_earlier_ticket() {
    let store = store();
    let mut state = signed_in(&store, "google");

    let first = state.begin_connect("github").expect("begin first");
    let second = state.begin_connect("github").expect("begin second");
    assert_ne!(first.seq, second.seq);
    assert_eq!(state.pending, vec![second]);

    assert!(matches!(state.complete_connect(first, &store), Err(AuthError::Superseded)));
    assert!(!state.user().expect("user").connected_platforms.github);
    assert!(state.is_connecting(Platform::Github));

    state.complete_connect(second, &store).expect("complete second");
    assert!(state.user().expect("user").connected_platforms.github);
    assert!(!state.is_connecting(Platform::Github));
}

#[test]
fn connects_to_different_platforms_do_not_supersede_each_other() {
    let store = store();
    let mut state = signed_in(&store, "google");

    let github = state.begin_connect("github").expect("begin github");
    let discord = state.begin_connect("discord").expect("begin discord");
    assert_eq!(state.pending.len(), 2);

    state.complete_connect(discord, &store).expect("complete discord");
    state.complete_connect(github, &store).expect("complete github");

    let persisted = store.load().expect("persisted");
    assert!(persisted.connected_platforms.github);
    assert!(persisted.connected_platforms.discord);
    assert!(state.pending.is_empty());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn user_snapshot_uses_camel_case_and_omits_missing_avatar() {
    let json = serde_json::to_value(User::demo(Platform::Google)).expect("json");
    assert!(json.get("connectedPlatforms").is_some());
    assert!(json.get("avatar").is_none());
    assert_eq!(json["email"], "demo@studio.local");
}

#[test]
fn user_snapshot_without_platforms_defaults_to_none_linked() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"A","email":"a@b.c"}"#).expect("parse");
    assert_eq!(user.connected_platforms.count(), 0);
}
