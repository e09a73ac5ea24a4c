//! Template gallery page.

use dioxus::prelude::*;
use linkforest_core::types::TemplateId;
use linkforest_core::ProfileBundle;

use crate::components::preview::PreviewPanel;
use crate::components::templates::TemplateGallery;
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{bump_revision, use_revision, use_store, use_store_ready};

#[component]
pub fn Templates() -> Element {
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

    let on_select = move |id: TemplateId| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.select_template(id);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Templates }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Templates" }
                            p { class: "page-subtitle",
                                "Pick a layout for your public page. Your links and theme carry over."
                            }
                            TemplateGallery {
                                selected: b.template.clone(),
                                on_select,
                            }
                        }
                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading templates..." }
                    }
                }
            }
        }
    }
}
