//! Link manager page.

use dioxus::prelude::*;
use linkforest_core::types::LinkPatch;
use linkforest_core::ProfileBundle;

use crate::components::links::{LinkDraft, LinkEditor, LinkList};
use crate::components::preview::PreviewPanel;
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{bump_revision, use_revision, use_store, use_store_ready};

#[component]
pub fn Links() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let mut revision = use_revision();

    let mut bundle: Signal<Option<ProfileBundle>> = use_signal(|| None);
    let mut save_error: Signal<Option<&'static str>> = use_signal(|| None);

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

    let on_add = move |draft: LinkDraft| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            let added = match *guard {
                Some(ref mut s) => s.add_link(&draft.title, &draft.url, draft.active),
                None => None,
            };
            drop(guard);

            if added.is_some() {
                save_error.set(None);
                bump_revision(&mut revision);
            } else {
                save_error.set(Some("That URL doesn't look valid"));
            }
        });
    };

    let on_update = move |(id, draft): (String, LinkDraft)| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.update_link(
                    &id,
                    LinkPatch {
                        title: Some(draft.title),
                        target_url: Some(draft.url),
                        active: None,
                    },
                );
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
                    .links
                    .iter()
                    .find(|l| l.id == id)
                    .map(|l| l.active);
                if let Some(active) = current {
                    s.update_link(
                        &id,
                        LinkPatch {
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
                s.remove_link(&id);
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
                s.move_link(from, to);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Links }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Links" }
                            if let Some(message) = save_error() {
                                p { class: "form-error", "{message}" }
                            }
                            LinkEditor { on_save: on_add }
                            LinkList {
                                links: b.links.clone(),
                                on_toggle,
                                on_remove,
                                on_move,
                                on_update,
                            }
                        }
                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading links..." }
                    }
                }
            }
        }
    }
}
