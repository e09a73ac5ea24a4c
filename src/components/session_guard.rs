//! Session guard components.
//!
//! Gate management screens on the store's session flag. A single
//! synchronous check per transition: no retry, no timeout. The check
//! re-runs whenever the store revision changes (login/logout).

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_revision, use_store, use_store_ready};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Wraps management screens; redirects to login when no session is active.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let store_ready = use_store_ready();
    let revision = use_revision();
    let mut state = use_signal(|| GuardState::Checking);

    use_effect(move || {
        let _ = revision();
        if store_ready() {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                let active = guard
                    .as_ref()
                    .map(|s| s.is_session_active())
                    .unwrap_or(false);
                drop(guard);

                if active {
                    state.set(GuardState::Authenticated);
                } else {
                    state.set(GuardState::Unauthenticated);
                    navigator.push(Route::Login {});
                }
            });
        }
    });

    match state() {
        GuardState::Authenticated => rsx! { {children} },
        GuardState::Checking | GuardState::Unauthenticated => rsx! {
            div { class: "loading-state",
                div { class: "loading-spinner" }
                p { "Loading your dashboard..." }
            }
        },
    }
}

/// Wraps the auth entry points; sends logged-in users to the dashboard.
#[component]
pub fn RedirectIfSession(children: Element) -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let store_ready = use_store_ready();
    let revision = use_revision();

    use_effect(move || {
        let _ = revision();
        if store_ready() {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                let active = guard
                    .as_ref()
                    .map(|s| s.is_session_active())
                    .unwrap_or(false);
                drop(guard);

                if active {
                    navigator.push(Route::Dashboard {});
                }
            });
        }
    });

    rsx! { {children} }
}
