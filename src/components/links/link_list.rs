//! Reorderable list of link entries with inline editing.

use dioxus::prelude::*;
use linkforest_core::LinkEntry;

use super::LinkDraft;

#[derive(Props, Clone, PartialEq)]
pub struct LinkListProps {
    pub links: Vec<LinkEntry>,
    /// Toggle the active flag of the given id
    pub on_toggle: EventHandler<String>,
    pub on_remove: EventHandler<String>,
    /// (from, to) index pair, same contract as a drag-and-drop drop event
    pub on_move: EventHandler<(usize, usize)>,
    /// (id, edited values)
    pub on_update: EventHandler<(String, LinkDraft)>,
}

/// List of links with move up/down, visibility toggle, edit, and remove.
#[component]
pub fn LinkList(props: LinkListProps) -> Element {
    let mut editing_id: Signal<Option<String>> = use_signal(|| None);
    let mut edit_title = use_signal(String::new);
    let mut edit_url = use_signal(String::new);

    let count = props.links.len();

    rsx! {
        div { class: "entry-list",
            if props.links.is_empty() {
                p { class: "empty-note", "No links yet. Add your first one above." }
            }
            for (index, link) in props.links.iter().enumerate() {
                {
                    let link = link.clone();
                    let id = link.id.clone();
                    let is_editing = editing_id().as_deref() == Some(id.as_str());
                    rsx! {
                        div {
                            key: "{id}",
                            class: if link.active { "entry-row" } else { "entry-row inactive" },

                            div { class: "entry-reorder",
                                button {
                                    class: "btn-icon",
                                    disabled: index == 0,
                                    onclick: {
                                        let on_move = props.on_move;
                                        move |_| on_move.call((index, index.saturating_sub(1)))
                                    },
                                    "↑"
                                }
                                button {
                                    class: "btn-icon",
                                    disabled: index + 1 >= count,
                                    onclick: {
                                        let on_move = props.on_move;
                                        move |_| on_move.call((index, index + 1))
                                    },
                                    "↓"
                                }
                            }

                            if is_editing {
                                div { class: "entry-edit",
                                    input {
                                        r#type: "text",
                                        value: "{edit_title}",
                                        oninput: move |e| edit_title.set(e.value()),
                                    }
                                    input {
                                        r#type: "text",
                                        value: "{edit_url}",
                                        oninput: move |e| edit_url.set(e.value()),
                                    }
                                    button {
                                        class: "btn-primary small",
                                        onclick: {
                                            let on_update = props.on_update;
                                            let id = id.clone();
                                            let active = link.active;
                                            move |_| {
                                                on_update.call((
                                                    id.clone(),
                                                    LinkDraft {
                                                        title: edit_title.read().trim().to_string(),
                                                        url: edit_url.read().trim().to_string(),
                                                        active,
                                                    },
                                                ));
                                                editing_id.set(None);
                                            }
                                        },
                                        "Save"
                                    }
                                    button {
                                        class: "btn-ghost small",
                                        onclick: move |_| editing_id.set(None),
                                        "Cancel"
                                    }
                                }
                            } else {
                                div { class: "entry-main",
                                    span { class: "entry-title", "{link.title}" }
                                    span { class: "entry-subtitle", "{link.target_url}" }
                                }
                                div { class: "entry-actions",
                                    button {
                                        class: "btn-ghost small",
                                        onclick: {
                                            let title = link.title.clone();
                                            let url = link.target_url.clone();
                                            let id = id.clone();
                                            move |_| {
                                                edit_title.set(title.clone());
                                                edit_url.set(url.clone());
                                                editing_id.set(Some(id.clone()));
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn-ghost small",
                                        onclick: {
                                            let on_toggle = props.on_toggle;
                                            let id = id.clone();
                                            move |_| on_toggle.call(id.clone())
                                        },
                                        if link.active { "Hide" } else { "Show" }
                                    }
                                    button {
                                        class: "btn-danger small",
                                        onclick: {
                                            let on_remove = props.on_remove;
                                            let id = id.clone();
                                            move |_| on_remove.call(id.clone())
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
