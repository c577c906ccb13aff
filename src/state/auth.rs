//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is simulated: a provider login produces a fixed demo user and the
//! record is mirrored to a `SnapshotStore`. Route guards and user-aware
//! components read the `Session` to decide redirects and rendering.
//!
//! DESIGN
//! ======
//! Long-running operations are split into `begin_*` (returns a `PendingOp`
//! ticket) and `complete_*` (applies the result). A ticket only applies while
//! it is still listed in `pending`; a newer login, a logout, or
//! `cancel_pending` drops older tickets, so overlapping calls resolve to the
//! most recent request instead of racing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::ui_persistence::{PersistError, SnapshotStore};

/// External identity platforms a user can link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Google,
    Github,
    Twitter,
    Discord,
}

impl Platform {
    pub const ALL: [Self; 4] = [Self::Google, Self::Github, Self::Twitter, Self::Discord];

    /// Parse a provider name case-insensitively (`"Google"`, `"github"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase key used in persisted snapshots.
    pub fn name(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Discord => "discord",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Discord => "Discord",
        }
    }
}

/// Which platforms are linked to the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedPlatforms {
    pub google: bool,
    pub github: bool,
    pub twitter: bool,
    pub discord: bool,
}

impl ConnectedPlatforms {
    /// Only `platform` linked.
    pub fn only(platform: Platform) -> Self {
        let mut out = Self::default();
        out.set(platform, true);
        out
    }

    pub fn get(&self, platform: Platform) -> bool {
        match platform {
            Platform::Google => self.google,
            Platform::Github => self.github,
            Platform::Twitter => self.twitter,
            Platform::Discord => self.discord,
        }
    }

    pub fn set(&mut self, platform: Platform, linked: bool) {
        let slot = match platform {
            Platform::Google => &mut self.google,
            Platform::Github => &mut self.github,
            Platform::Twitter => &mut self.twitter,
            Platform::Discord => &mut self.discord,
        };
        *slot = linked;
    }

    pub fn count(&self) -> usize {
        Platform::ALL.into_iter().filter(|p| self.get(*p)).count()
    }
}

/// Signed-in user record as persisted in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub connected_platforms: ConnectedPlatforms,
}

impl User {
    /// Fixed demo account returned by every simulated provider login.
    pub fn demo(provider: Platform) -> Self {
        Self {
            id: "demo-user".to_owned(),
            name: "Demo Creator".to_owned(),
            email: "demo@studio.local".to_owned(),
            avatar: None,
            connected_platforms: ConnectedPlatforms::only(provider),
        }
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Where the session stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Storage has not been read yet (server render, first client frame).
    #[default]
    Uninitialized,
    Anonymous,
    Authenticated(User),
}

/// What a pending ticket will do when it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingKind {
    Login(Platform),
    Connect(Platform),
}

/// Ticket for an in-flight simulated operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingOp {
    pub seq: u64,
    pub kind: PendingKind,
}

/// Failure of an auth operation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("not signed in")]
    NotAuthenticated,
    #[error("operation superseded by a newer request")]
    Superseded,
    #[error("session not persisted: {0}")]
    Storage(#[from] PersistError),
}

/// Authentication state tracking the session and in-flight operations.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub pending: Vec<PendingOp>,
    next_seq: u64,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            Session::Uninitialized | Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated(_))
    }

    /// `true` once storage has been consulted.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.session, Session::Uninitialized)
    }

    /// `true` while a login is in flight.
    pub fn is_logging_in(&self) -> bool {
        self.pending.iter().any(|op| matches!(op.kind, PendingKind::Login(_)))
    }

    /// `true` while linking `platform` is in flight.
    pub fn is_connecting(&self, platform: Platform) -> bool {
        self.pending.iter().any(|op| op.kind == PendingKind::Connect(platform))
    }

    /// Restore the session from `store`.
    pub fn hydrate(&mut self, store: &impl SnapshotStore<User>) {
        self.session = match store.load() {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        };
    }

    /// Start a provider login, superseding every earlier in-flight operation.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlatform` if `provider` names no supported platform.
    pub fn begin_login(&mut self, provider: &str) -> Result<PendingOp, AuthError> {
        let platform =
            Platform::from_name(provider).ok_or_else(|| AuthError::UnknownPlatform(provider.to_owned()))?;
        self.pending.clear();
        Ok(self.issue(PendingKind::Login(platform)))
    }

    /// Finish a login started with `begin_login`.
    ///
    /// # Errors
    ///
    /// Returns `Superseded` if the ticket is stale (state untouched), or
    /// `Storage` if the new session could not be persisted (state kept).
    pub fn complete_login(&mut self, op: PendingOp, store: &impl SnapshotStore<User>) -> Result<(), AuthError> {
        let PendingKind::Login(platform) = op.kind else {
            return Err(AuthError::Superseded);
        };
        self.retire(op)?;
        let user = User::demo(platform);
        let saved = store.save(&user);
        self.session = Session::Authenticated(user);
        Ok(saved?)
    }

    /// Sign out. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the persisted record could not be removed; the
    /// in-memory session is cleared regardless.
    pub fn logout(&mut self, store: &impl SnapshotStore<User>) -> Result<(), AuthError> {
        self.pending.clear();
        self.session = Session::Anonymous;
        store.clear()?;
        Ok(())
    }

    /// Drop every in-flight ticket.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }

    /// Start linking `name`, superseding an earlier link of the same platform.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlatform` or `NotAuthenticated`.
    pub fn begin_connect(&mut self, name: &str) -> Result<PendingOp, AuthError> {
        let platform = Platform::from_name(name).ok_or_else(|| AuthError::UnknownPlatform(name.to_owned()))?;
        if !self.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }
        self.pending.retain(|op| op.kind != PendingKind::Connect(platform));
        Ok(self.issue(PendingKind::Connect(platform)))
    }

    /// Finish a link started with `begin_connect`.
    ///
    /// # Errors
    ///
    /// Returns `Superseded` for stale tickets, `NotAuthenticated` if the user
    /// signed out meanwhile, or `Storage` if re-persisting failed.
    pub fn complete_connect(&mut self, op: PendingOp, store: &impl SnapshotStore<User>) -> Result<(), AuthError> {
        let PendingKind::Connect(platform) = op.kind else {
            return Err(AuthError::Superseded);
        };
        self.retire(op)?;
        self.set_platform(platform, true, store)
    }

    /// Unlink `name` immediately.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlatform`, `NotAuthenticated`, or `Storage`.
    pub fn disconnect_platform(&mut self, name: &str, store: &impl SnapshotStore<User>) -> Result<(), AuthError> {
        let platform = Platform::from_name(name).ok_or_else(|| AuthError::UnknownPlatform(name.to_owned()))?;
        self.pending.retain(|op| op.kind != PendingKind::Connect(platform));
        self.set_platform(platform, false, store)
    }

    fn set_platform(
        &mut self,
        platform: Platform,
        linked: bool,
        store: &impl SnapshotStore<User>,
    ) -> Result<(), AuthError> {
        let Session::Authenticated(user) = &mut self.session else {
            return Err(AuthError::NotAuthenticated);
        };
        user.connected_platforms.set(platform, linked);
        store.save(user)?;
        Ok(())
    }

    fn issue(&mut self, kind: PendingKind) -> PendingOp {
        self.next_seq += 1;
        let op = PendingOp { seq: self.next_seq, kind };
        self.pending.push(op);
        op
    }

    fn retire(&mut self, op: PendingOp) -> Result<(), AuthError> {
        let Some(index) = self.pending.iter().position(|p| *p == op) else {
            return Err(AuthError::Superseded);
        };
        self.pending.remove(index);
        Ok(())
    }
}
