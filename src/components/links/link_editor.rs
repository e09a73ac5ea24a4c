//! Form for adding a new link.

use dioxus::prelude::*;

/// Values collected by the editor; the page owns the store call.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub active: bool,
}

#[derive(Props, Clone, PartialEq)]
pub struct LinkEditorProps {
    pub on_save: EventHandler<LinkDraft>,
}

/// Add-link form with per-field validation messages.
///
/// The scheme is defaulted to https:// by the store, so "example.com" is
/// fine here; full URL validation also happens in the store and is surfaced
/// by the page.
#[component]
pub fn LinkEditor(props: LinkEditorProps) -> Element {
    let mut title = use_signal(String::new);
    let mut url = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    let on_submit = move |_: MouseEvent| {
        let title_val = title.read().trim().to_string();
        let url_val = url.read().trim().to_string();

        if title_val.is_empty() {
            error.set(Some("Title is required"));
            return;
        }
        if url_val.is_empty() {
            error.set(Some("URL is required"));
            return;
        }
        error.set(None);

        props.on_save.call(LinkDraft {
            title: title_val,
            url: url_val,
            active: active(),
        });
        title.set(String::new());
        url.set(String::new());
        active.set(true);
    };

    rsx! {
        div { class: "editor-card",
            h3 { "Add link" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            div { class: "form-row",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "My Website",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
            }
            div { class: "form-row",
                label { "URL" }
                input {
                    r#type: "text",
                    placeholder: "example.com",
                    value: "{url}",
                    oninput: move |e| url.set(e.value()),
                }
            }
            div { class: "form-row inline",
                label { "Visible" }
                input {
                    r#type: "checkbox",
                    checked: active(),
                    onchange: move |e| active.set(e.checked()),
                }
            }
            button { class: "btn-primary", onclick: on_submit, "Add link" }
        }
    }
}
