//! Appearance editor: background, text, buttons, fonts, icon style.

use dioxus::prelude::*;
use linkforest_core::types::{BackgroundMode, ButtonStyle, SocialIconStyle, ThemePatch};
use linkforest_core::ProfileBundle;

use crate::components::preview::PreviewPanel;
use crate::components::{NavHeader, NavLocation, RequireSession};
use crate::context::{bump_revision, use_revision, use_store, use_store_ready};

const FONT_CHOICES: &[&str] = &["Inter", "Georgia", "Courier New", "Verdana", "Trebuchet MS"];

#[component]
pub fn Appearance() -> Element {
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

    let apply = move |patch: ThemePatch| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.update_theme(patch);
            }
            drop(guard);
            bump_revision(&mut revision);
        });
    };

    rsx! {
        RequireSession {
            div { class: "admin-page",
                NavHeader { current: NavLocation::Appearance }

                if let Some(b) = bundle() {
                    div { class: "admin-content split",
                        section { class: "admin-main",
                            h1 { "Appearance" }

                            div { class: "editor-card",
                                h3 { "Background" }
                                div { class: "form-row",
                                    label { "Type" }
                                    select {
                                        onchange: move |e| apply(ThemePatch {
                                            background_mode: Some(BackgroundMode::from(e.value())),
                                            ..Default::default()
                                        }),
                                        option {
                                            value: "solid",
                                            selected: b.theme.background_mode == BackgroundMode::Solid,
                                            "Solid color"
                                        }
                                        option {
                                            value: "gradient",
                                            selected: b.theme.background_mode == BackgroundMode::Gradient,
                                            "Gradient"
                                        }
                                        option {
                                            value: "image",
                                            selected: b.theme.background_mode == BackgroundMode::Image,
                                            "Image"
                                        }
                                    }
                                }
                                match b.theme.background_mode {
                                    BackgroundMode::Solid => rsx! {
                                        div { class: "form-row",
                                            label { "Color" }
                                            input {
                                                r#type: "color",
                                                value: "{b.theme.background_color}",
                                                oninput: move |e| apply(ThemePatch {
                                                    background_color: Some(e.value()),
                                                    ..Default::default()
                                                }),
                                            }
                                        }
                                    },
                                    BackgroundMode::Gradient => rsx! {
                                        div { class: "form-row",
                                            label { "CSS gradient" }
                                            input {
                                                r#type: "text",
                                                placeholder: "linear-gradient(to bottom, #16a34a, #064e3b)",
                                                value: "{b.theme.background_gradient}",
                                                onchange: move |e| apply(ThemePatch {
                                                    background_gradient: Some(e.value()),
                                                    ..Default::default()
                                                }),
                                            }
                                            p { class: "form-hint",
                                                "Left empty, the solid color is used instead."
                                            }
                                        }
                                    },
                                    BackgroundMode::Image => rsx! {
                                        div { class: "form-row",
                                            label { "Image URL" }
                                            input {
                                                r#type: "text",
                                                placeholder: "https://... or data URI (max 5MB source)",
                                                value: "{b.theme.background_image}",
                                                onchange: move |e| apply(ThemePatch {
                                                    background_image: Some(e.value()),
                                                    ..Default::default()
                                                }),
                                            }
                                            p { class: "form-hint",
                                                "Left empty, the solid color is used instead."
                                            }
                                        }
                                    },
                                }
                            }

                            div { class: "editor-card",
                                h3 { "Text" }
                                div { class: "form-row",
                                    label { "Text color" }
                                    input {
                                        r#type: "color",
                                        value: "{b.theme.text_color}",
                                        oninput: move |e| apply(ThemePatch {
                                            text_color: Some(e.value()),
                                            ..Default::default()
                                        }),
                                    }
                                }
                                div { class: "form-row",
                                    label { "Font" }
                                    select {
                                        onchange: move |e| apply(ThemePatch {
                                            font_family: Some(e.value()),
                                            ..Default::default()
                                        }),
                                        for font in FONT_CHOICES {
                                            option {
                                                value: "{font}",
                                                selected: b.theme.font_family == *font,
                                                "{font}"
                                            }
                                        }
                                    }
                                }
                            }

                            div { class: "editor-card",
                                h3 { "Buttons" }
                                div { class: "form-row",
                                    label { "Style" }
                                    div { class: "category-pills",
                                        for style in ButtonStyle::all() {
                                            button {
                                                class: if b.theme.button_style == *style { "pill active" } else { "pill" },
                                                onclick: {
                                                    let style = *style;
                                                    move |_| apply(ThemePatch {
                                                        button_style: Some(style),
                                                        ..Default::default()
                                                    })
                                                },
                                                "{style.as_str()}"
                                            }
                                        }
                                    }
                                }
                                div { class: "form-row",
                                    label { "Button color" }
                                    input {
                                        r#type: "color",
                                        value: "{b.theme.button_color}",
                                        oninput: move |e| apply(ThemePatch {
                                            button_color: Some(e.value()),
                                            ..Default::default()
                                        }),
                                    }
                                }
                                div { class: "form-row",
                                    label { "Button text color" }
                                    input {
                                        r#type: "color",
                                        value: "{b.theme.button_text_color}",
                                        oninput: move |e| apply(ThemePatch {
                                            button_text_color: Some(e.value()),
                                            ..Default::default()
                                        }),
                                    }
                                }
                            }

                            div { class: "editor-card",
                                h3 { "Social icons" }
                                div { class: "category-pills",
                                    for style in SocialIconStyle::all() {
                                        button {
                                            class: if b.theme.social_icon_style == *style { "pill active" } else { "pill" },
                                            onclick: {
                                                let style = *style;
                                                move |_| apply(ThemePatch {
                                                    social_icon_style: Some(style),
                                                    ..Default::default()
                                                })
                                            },
                                            "{style.as_str()}"
                                        }
                                    }
                                }
                            }
                        }

                        PreviewPanel { bundle: b.clone() }
                    }
                } else {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading theme..." }
                    }
                }
            }
        }
    }
}
