//! Linked-platform list with connect/disconnect controls.

#[cfg(test)]
#[path = "platform_list_test.rs"]
mod platform_list_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::config::StudioConfig;
use crate::state::auth::{AuthState, Platform};
use crate::util::auth::{disconnect_platform, spawn_connect, use_auth, user_store};
use crate::util::variants::{BadgeVariant, ButtonVariant};

/// Display status of one platform row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    Linked,
    Linking,
    Unlinked,
}

impl LinkStatus {
    pub fn of(state: &AuthState, platform: Platform) -> Self {
        if state.is_connecting(platform) {
            Self::Linking
        } else if state.user().is_some_and(|u| u.connected_platforms.get(platform)) {
            Self::Linked
        } else {
            Self::Unlinked
        }
    }

    pub fn badge(self) -> (BadgeVariant, &'static str) {
        match self {
            Self::Linked => (BadgeVariant::Default, "Connected"),
            Self::Linking => (BadgeVariant::Secondary, "Connecting…"),
            Self::Unlinked => (BadgeVariant::Outline, "Not connected"),
        }
    }
}

/// One row per platform.
#[component]
pub fn PlatformList() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<StudioConfig>();

    let rows = Platform::ALL
        .into_iter()
        .map(|platform| {
            let config = config.clone();
            let status = Memo::new(move |_| auth.with(|a| LinkStatus::of(a, platform)));
            let on_toggle = Callback::new(move |()| match status.get_untracked() {
                LinkStatus::Linked => {
                    if let Err(e) = disconnect_platform(auth, platform.name(), &user_store(&config)) {
                        leptos::logging::warn!("disconnect {}: {e}", platform.name());
                    }
                }
                LinkStatus::Unlinked => spawn_connect(auth, platform.name().to_owned(), config.clone()),
                LinkStatus::Linking => {}
            });
            view! {
                <li class="platform-list__row">
                    <span class="platform-list__name">{platform.label()}</span>
                    {move || {
                        let (variant, text) = status.get().badge();
                        view! { <Badge variant=variant>{text}</Badge> }
                    }}
                    {move || {
                        let current = status.get();
                        let (variant, text) = if current == LinkStatus::Linked {
                            (ButtonVariant::Ghost, "Disconnect")
                        } else {
                            (ButtonVariant::Outline, "Connect")
                        };
                        view! {
                            <Button
                                variant=variant
                                size="sm"
                                disabled={current == LinkStatus::Linking}
                                on_click=on_toggle
                            >
                                {text}
                            </Button>
                        }
                    }}
                </li>
            }
        })
        .collect_view();

    view! { <ul class="platform-list">{rows}</ul> }
}
