//! Landing page - entry point to LinkForest.

use dioxus::prelude::*;

use crate::app::Route;

/// Marketing-style landing page with login/register entry points.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "LinkForest" }
                p { class: "tagline", "One link for everything you make" }

                div { class: "landing-actions",
                    button {
                        class: "btn-primary large",
                        onclick: move |_| { navigator.push(Route::Register {}); },
                        "Get started"
                    }
                    button {
                        class: "btn-ghost large",
                        onclick: move |_| { navigator.push(Route::Login {}); },
                        "Log in"
                    }
                }
            }

            section { class: "landing-features",
                div { class: "feature-card",
                    h3 { "Your links, your order" }
                    p { "Collect every profile, project, and post behind a single page, and reorder them any time." }
                }
                div { class: "feature-card",
                    h3 { "Make it yours" }
                    p { "Solid, gradient, or image backgrounds, four button styles, and a gallery of templates." }
                }
                div { class: "feature-card",
                    h3 { "Preview as you build" }
                    p { "Every edit shows up instantly in the live preview, exactly as visitors will see it." }
                }
            }
        }
    }
}
