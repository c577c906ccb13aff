use super::*;
use crate::state::auth::User;
use crate::util::ui_persistence::{MemoryStore, SnapshotStore};

fn signed_in_with(platform: Platform) -> AuthState {
    let store = MemoryStore::new("k");
    store.save(&User::demo(platform)).expect("seed");
    let mut state = AuthState::default();
    state.hydrate(&store);
    state
}

#[test]
fn link_status_reports_linked_platforms() {
    let state = signed_in_with(Platform::Google);
    assert_eq!(LinkStatus::of(&state, Platform::Google), LinkStatus::Linked);
    assert_eq!(LinkStatus::of(&state, Platform::Github), LinkStatus::Unlinked);
}

#[test]
fn link_status_prefers_in_flight_connect() {
    let mut state = signed_in_with(Platform::Google);
    state.begin_connect("github").expect("begin");
    assert_eq!(LinkStatus::of(&state, Platform::Github), LinkStatus::Linking);
}

#[test]
fn link_status_without_session_is_unlinked() {
    let mut state = AuthState::default();
    state.hydrate(&MemoryStore::<User>::new("k"));
    for platform in Platform::ALL {
        assert_eq!(LinkStatus::of(&state, platform), LinkStatus::Unlinked);
    }
}

#[test]
fn link_status_badges_use_distinct_variants() {
    let variants = [LinkStatus::Linked, LinkStatus::Linking, LinkStatus::Unlinked].map(|s| s.badge().0);
    assert_ne!(variants[0], variants[1]);
    assert_ne!(variants[1], variants[2]);
    assert_ne!(variants[0], variants[2]);
}
