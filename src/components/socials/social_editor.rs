//! Form for adding a social account.

use dioxus::prelude::*;
use linkforest_core::{catalog, SocialPlatform};

/// Values collected by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialDraft {
    pub platform: SocialPlatform,
    pub username: String,
    /// Manual URL override; empty means derive from the catalog
    pub url_override: String,
    pub active: bool,
}

#[derive(Props, Clone, PartialEq)]
pub struct SocialEditorProps {
    pub on_save: EventHandler<SocialDraft>,
}

/// Add-social form: platform picker, handle, derived-URL preview, and an
/// optional manual override.
#[component]
pub fn SocialEditor(props: SocialEditorProps) -> Element {
    let mut platform = use_signal(|| SocialPlatform::Instagram);
    let mut username = use_signal(String::new);
    let mut url_override = use_signal(String::new);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    let derived_url = catalog::url_for(&platform(), username.read().trim());

    let on_submit = move |_: MouseEvent| {
        let username_val = username.read().trim().to_string();
        if username_val.is_empty() {
            error.set(Some("Username is required"));
            return;
        }
        error.set(None);

        props.on_save.call(SocialDraft {
            platform: platform(),
            username: username_val,
            url_override: url_override.read().trim().to_string(),
            active: true,
        });
        username.set(String::new());
        url_override.set(String::new());
    };

    rsx! {
        div { class: "editor-card",
            h3 { "Add social account" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            div { class: "form-row",
                label { "Platform" }
                select {
                    onchange: move |e| platform.set(SocialPlatform::from(e.value())),
                    for (group, platforms) in catalog::platform_groups() {
                        optgroup { label: "{group}",
                            for known in platforms.iter() {
                                option {
                                    value: "{known.as_str()}",
                                    selected: *known == platform(),
                                    "{catalog::display_name_for(known)}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "form-row",
                label { "Username" }
                input {
                    r#type: "text",
                    placeholder: "yourhandle",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
            }
            if !derived_url.is_empty() && url_override.read().is_empty() {
                p { class: "form-hint", "Will link to {derived_url}" }
            }
            div { class: "form-row",
                label { "Custom URL (optional)" }
                input {
                    r#type: "text",
                    placeholder: "https://...",
                    value: "{url_override}",
                    oninput: move |e| url_override.set(e.value()),
                }
            }
            button { class: "btn-primary", onclick: on_submit, "Add account" }
        }
    }
}
