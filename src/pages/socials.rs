//! Social accounts manager page.

use dioxus::prelude::*;
use linkforest_core::types::SocialPatch;
use linkforest_core::ProfileBundle;

use crate::components::preview::PreviewPanel;
use crate::components::socials::{SocialDraft, SocialEditor, SocialList};
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{bump_revision, use_revision, use_store, use_store_ready};

#[component]
pub fn Socials() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let mut revision = use_revision();

    let mut bundle: Signal<Option<ProfileBundle>> = use_signal(|| None);

    use_effect(move || {
        let _ = revision();
        if store_ready() {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                if let Some(ref s) = *guard {
                    bundle.set(Some(s.bundle().clone()));
                }
            });
        }
    });

    let on_add = move |draft: SocialDraft| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                let url_override = if draft.url_override.is_empty() {
                    None
                } else {
                    Some(draft.url_override.as_str())
                };
                s.add_social(draft.platform, &draft.username, url_override, draft.active);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    let on_toggle = move |id: String| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                let current = s
                    .bundle()
                    .socials
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.active);
                if let Some(active) = current {
                    s.update_social(
                        &id,
                        SocialPatch {
                            active: Some(!active),
                            ..Default::default()
                        },
                    );
                }
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    let on_remove = move |id: String| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.remove_social(&id);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    let on_move = move |(from, to): (usize, usize)| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.move_social(from, to);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Socials }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Social accounts" }
                            SocialEditor { on_save: on_add }
                            SocialList {
                                socials: b.socials.clone(),
                                on_toggle,
                                on_remove,
                                on_move,
                            }
                        }
                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading socials..." }
                    }
                }
            }
        }
    }
}
