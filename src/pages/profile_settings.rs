//! Profile settings: display name, bio, avatar.

use dioxus::prelude::*;
use linkforest_core::types::UserPatch;
use linkforest_core::ProfileBundle;

use crate::components::preview::PreviewPanel;
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{bump_revision, use_revision, use_store, use_store_ready};

#[component]
pub fn ProfileSettings() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let mut revision = use_revision();

    let mut bundle: Signal<Option<ProfileBundle>> = use_signal(|| None);

    let mut name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut avatar_url = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut saved = use_signal(|| false);

    use_effect(move || {
        let _ = revision();
        if store_ready() {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                if let Some(ref s) = *guard {
                    let b = s.bundle().clone();
                    // Seed the form once; later revisions only refresh the preview.
                    if !loaded() {
                        name.set(b.user.name.clone());
                        bio.set(b.user.bio.clone());
                        avatar_url.set(b.user.avatar_url.clone());
                        loaded.set(true);
                    }
                    bundle.set(Some(b));
                }
            });
        }
    });

    let on_save = move |_: MouseEvent| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.update_profile(UserPatch {
                    name: Some(name.read().trim().to_string()),
                    bio: Some(bio.read().clone()),
                    avatar_url: Some(avatar_url.read().trim().to_string()),
                    ..Default::default()
                });
            }
            drop(guard);
            saved.set(true);
            bump_revision(&mut revision);
        });
    };

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Profile }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Profile" }

                            div { class: "editor-card",
                                div { class: "form-row",
                                    label { "Display name" }
                                    input {
                                        r#type: "text",
                                        value: "{name}",
                                        oninput: move |e| {
                                            name.set(e.value());
                                            saved.set(false);
                                        },
                                    }
                                }
                                div { class: "form-row",
                                    label { "Bio" }
                                    textarea {
                                        rows: 3,
                                        value: "{bio}",
                                        oninput: move |e| {
                                            bio.set(e.value());
                                            saved.set(false);
                                        },
                                    }
                                }
                                div { class: "form-row",
                                    label { "Avatar URL" }
                                    input {
                                        r#type: "text",
                                        placeholder: "https://example.com/me.png",
                                        value: "{avatar_url}",
                                        oninput: move |e| {
                                            avatar_url.set(e.value());
                                            saved.set(false);
                                        },
                                    }
                                }

                                button {
                                    class: "btn-primary",
                                    onclick: on_save,
                                    if saved() { "Saved" } else { "Save changes" }
                                }
                            }

                            div { class: "editor-card",
                                h3 { "Account" }
                                div { class: "form-row",
                                    label { "Email" }
                                    p { class: "form-hint", "{b.user.email}" }
                                }
                                div { class: "form-row",
                                    label { "Username" }
                                    p { class: "form-hint", "@{b.user.username}" }
                                }
                            }
                        }

                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading profile..." }
                    }
                }
            }
        }
    }
}
