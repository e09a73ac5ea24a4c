//! Registration page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::RedirectIfSession;
use crate::context::{bump_revision, use_revision, use_store};

/// Registration form.
///
/// The store only reports pass/fail; per-rule messages live here so each
/// validation failure can be explained to the user.
#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let mut revision = use_revision();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_: MouseEvent| {
        let name_val = name.read().trim().to_string();
        let email_val = email.read().trim().to_string();
        let password_val = password.read().to_string();

        if name_val.is_empty() {
            error.set(Some("Name is required"));
            return;
        }
        if !email_val.contains('@') {
            error.set(Some("Enter a valid email address"));
            return;
        }
        if password_val.len() <= 5 {
            error.set(Some("Password must be at least 6 characters"));
            return;
        }

        submitting.set(true);
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            let ok = match *guard {
                Some(ref mut s) => {
                    s.create_account(&name_val, &email_val, &password_val).await
                }
                None => false,
            };
            drop(guard);
            submitting.set(false);

            if ok {
                bump_revision(&mut revision);
                navigator.push(Route::Dashboard {});
            } else {
                // Local checks already passed, so the remaining rule is
                // the duplicate-registration one.
                error.set(Some("That email is already registered"));
            }
        });
    };

    rsx! {
        RedirectIfSession {
            main { class: "auth-page",
                div { class: "auth-card",
                    h1 { "Create your page" }

                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }

                    div { class: "form-row",
                        label { "Name" }
                        input {
                            r#type: "text",
                            placeholder: "Jane Doe",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button {
                        class: "btn-primary",
                        disabled: submitting(),
                        onclick: on_submit,
                        if submitting() { "Creating..." } else { "Create account" }
                    }

                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Log in" }
                    }
                }
            }
        }
    }
}
