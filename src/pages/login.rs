//! Login page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::RedirectIfSession;
use crate::context::{bump_revision, use_revision, use_store};

/// Login form backed by the store's credential verifier.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let mut revision = use_revision();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_: MouseEvent| {
        let email_val = email.read().trim().to_string();
        let password_val = password.read().to_string();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Enter your email and password"));
            return;
        }

        submitting.set(true);
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            let ok = match *guard {
                Some(ref mut s) => s.authenticate(&email_val, &password_val).await,
                None => false,
            };
            drop(guard);
            submitting.set(false);

            if ok {
                bump_revision(&mut revision);
                navigator.push(Route::Dashboard {});
            } else {
                error.set(Some("Invalid email or password"));
            }
        });
    };

    rsx! {
        RedirectIfSession {
            main { class: "auth-page",
                div { class: "auth-card",
                    h1 { "Welcome back" }
                    p { class: "auth-hint", "Demo account: demo@example.com / password123" }

                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
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
                        if submitting() { "Logging in..." } else { "Log in" }
                    }

                    p { class: "auth-switch",
                        "No account yet? "
                        Link { to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    }
}
