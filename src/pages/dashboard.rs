//! Dashboard overview: profile summary, quick stats, and live preview.

use dioxus::prelude::*;
use linkforest_core::ProfileBundle;

use crate::components::preview::PreviewPanel;
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{use_revision, use_store, use_store_ready};

#[component]
pub fn Dashboard() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let revision = use_revision();

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

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Dashboard }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Hi, {b.user.name}" }
                            p { class: "page-subtitle",
                                "Your page lives at /preview/{b.user.username}"
                            }

                            div { class: "stat-cards",
                                div { class: "stat-card",
                                    span { class: "stat-value", "{b.links.len()}" }
                                    span { class: "stat-label", "links" }
                                }
                                div { class: "stat-card",
                                    span { class: "stat-value",
                                        "{b.links.iter().filter(|l| l.active).count()}"
                                    }
                                    span { class: "stat-label", "visible" }
                                }
                                div { class: "stat-card",
                                    span { class: "stat-value", "{b.socials.len()}" }
                                    span { class: "stat-label", "socials" }
                                }
                                div { class: "stat-card",
                                    span { class: "stat-value", "{b.template.as_str()}" }
                                    span { class: "stat-label", "template" }
                                }
                            }

                            if b.links.is_empty() {
                                p { class: "empty-note",
                                    "Your page has no links yet. Head to the Links tab to add your first one."
                                }
                            }
                        }

                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading your page..." }
                    }
                }
            }
        }
    }
}
