//! Reorderable list of social accounts.

use dioxus::prelude::*;
use linkforest_core::{catalog, SocialAccountEntry};

use super::PlatformIcon;

#[derive(Props, Clone, PartialEq)]
pub struct SocialListProps {
    pub socials: Vec<SocialAccountEntry>,
    pub on_toggle: EventHandler<String>,
    pub on_remove: EventHandler<String>,
    /// (from, to) index pair, same contract as a drag-and-drop drop event
    pub on_move: EventHandler<(usize, usize)>,
}

/// List of social accounts with move up/down, visibility toggle, and remove.
#[component]
pub fn SocialList(props: SocialListProps) -> Element {
    let count = props.socials.len();

    rsx! {
        div { class: "entry-list",
            if props.socials.is_empty() {
                p { class: "empty-note", "No social accounts yet." }
            }
            for (index, social) in props.socials.iter().enumerate() {
                {
                    let social = social.clone();
                    let id = social.id.clone();
                    rsx! {
                        div {
                            key: "{id}",
                            class: if social.active { "entry-row" } else { "entry-row inactive" },

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

                            PlatformIcon { platform: social.platform.clone() }

                            div { class: "entry-main",
                                span { class: "entry-title",
                                    "{catalog::display_name_for(&social.platform)}"
                                }
                                span { class: "entry-subtitle", "@{social.username}" }
                                span { class: "entry-subtitle", "{social.profile_url}" }
                            }

                            div { class: "entry-actions",
                                button {
                                    class: "btn-ghost small",
                                    onclick: {
                                        let on_toggle = props.on_toggle;
                                        let id = id.clone();
                                        move |_| on_toggle.call(id.clone())
                                    },
                                    if social.active { "Hide" } else { "Show" }
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
