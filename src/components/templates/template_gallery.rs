//! Template gallery: metadata cards with category filtering.

use dioxus::prelude::*;
use linkforest_core::templates::{self, TemplateCategory};
use linkforest_core::TemplateId;

#[derive(Props, Clone, PartialEq)]
pub struct TemplateGalleryProps {
    /// Currently selected template id
    pub selected: TemplateId,
    pub on_select: EventHandler<TemplateId>,
}

/// Filterable grid of template metadata cards.
///
/// Selection is unconditional: picking any card stores its id even though
/// cosmetic variants all render through one of the five structural
/// strategies.
#[component]
pub fn TemplateGallery(props: TemplateGalleryProps) -> Element {
    let mut category: Signal<Option<TemplateCategory>> = use_signal(|| None);
    let mut query = use_signal(String::new);

    let entries: Vec<_> = {
        let query = query.read();
        let hits = templates::search(&query);
        match category() {
            Some(cat) => hits
                .into_iter()
                .filter(|t| t.categories.contains(&cat))
                .collect(),
            None => hits,
        }
    };

    rsx! {
        div { class: "template-gallery",
            div { class: "gallery-controls",
                input {
                    r#type: "text",
                    class: "gallery-search",
                    placeholder: "Search templates...",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                div { class: "category-pills",
                    button {
                        class: if category().is_none() { "pill active" } else { "pill" },
                        onclick: move |_| category.set(None),
                        "All"
                    }
                    for cat in TemplateCategory::all() {
                        button {
                            class: if category() == Some(*cat) { "pill active" } else { "pill" },
                            onclick: {
                                let cat = *cat;
                                move |_| category.set(Some(cat))
                            },
                            "{cat.as_str()}"
                        }
                    }
                }
            }

            div { class: "gallery-grid",
                for meta in entries {
                    {
                        let is_selected = props.selected.as_str() == meta.id;
                        rsx! {
                            div {
                                key: "{meta.id}",
                                class: if is_selected { "template-card selected" } else { "template-card" },
                                div { class: "template-card-header",
                                    h4 { "{meta.name}" }
                                    if meta.is_new {
                                        span { class: "badge new", "New" }
                                    }
                                    if meta.is_premium {
                                        span { class: "badge premium", "Premium" }
                                    }
                                }
                                p { class: "template-card-desc", "{meta.description}" }
                                ul { class: "template-card-features",
                                    for feature in meta.features {
                                        li { "{feature}" }
                                    }
                                }
                                button {
                                    class: if is_selected { "btn-ghost small" } else { "btn-primary small" },
                                    disabled: is_selected,
                                    onclick: {
                                        let on_select = props.on_select;
                                        let id = meta.template_id();
                                        move |_| on_select.call(id.clone())
                                    },
                                    if is_selected { "Selected" } else { "Use template" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
