//! Public profile page at `/preview/:username`.
//!
//! No session required: this is the page a visitor would see. Only the
//! locally stored profile can be looked up, so any other username shows
//! the not-found view.

use dioxus::prelude::*;
use linkforest_core::ProfileBundle;

use crate::app::Route;
use crate::components::preview::RenderedPage;
use crate::context::{use_revision, use_store, use_store_ready};

enum LookupState {
    Loading,
    Found(Box<ProfileBundle>),
    NotFound,
}

#[component]
pub fn Preview(username: String) -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let revision = use_revision();

    let mut state = use_signal(|| LookupState::Loading);

    use_effect(move || {
        let _ = revision();
        let requested = username.clone();
        if store_ready() {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                match *guard {
                    Some(ref s)
                        if s.bundle().user.username.eq_ignore_ascii_case(&requested)
                            && !s.bundle().user.username.is_empty() =>
                    {
                        state.set(LookupState::Found(Box::new(s.bundle().clone())));
                    }
                    Some(_) => state.set(LookupState::NotFound),
                    None => {}
                }
            });
        }
    });

    match &*state.read() {
        LookupState::Loading => rsx! {
            div { class: "loading-state",
                div { class: "loading-spinner" }
                p { "Loading page..." }
            }
        },
        LookupState::Found(bundle) => {
            let view = linkforest_core::render(&bundle.template, bundle);
            rsx! {
                RenderedPage { view }
            }
        }
        LookupState::NotFound => rsx! {
            div { class: "not-found-page",
                h1 { "User not found" }
                p { "There is no page at this address." }
                Link { class: "btn-ghost", to: Route::Landing {}, "Back to home" }
            }
        },
    }
}
