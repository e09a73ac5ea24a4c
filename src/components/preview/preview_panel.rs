//! Live preview panel shown beside the management screens.

use dioxus::prelude::*;
use linkforest_core::ProfileBundle;

use super::RenderedPage;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PreviewPanelProps {
    pub bundle: ProfileBundle,
}

/// Phone-framed live preview of the current bundle.
///
/// Renders through the same `render` path as the public preview route, so
/// what you see here is exactly what visitors get.
#[component]
pub fn PreviewPanel(props: PreviewPanelProps) -> Element {
    let view = linkforest_core::render(&props.bundle.template, &props.bundle);
    let username = props.bundle.user.username.clone();

    rsx! {
        aside { class: "preview-panel",
            div { class: "preview-panel-header",
                h2 { "Live Preview" }
                if !username.is_empty() {
                    Link {
                        class: "preview-open-link",
                        to: Route::Preview { username },
                        "Open public page"
                    }
                }
            }
            div { class: "preview-frame",
                div { class: "preview-frame-notch" }
                div { class: "preview-frame-screen",
                    RenderedPage { view }
                }
            }
        }
    }
}
