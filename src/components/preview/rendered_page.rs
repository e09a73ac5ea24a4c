//! Maps a resolved [`RenderedProfile`] to markup.
//!
//! All paints and filtering are decided in linkforest-core; this component
//! only translates the view description into elements and inline styles.

use dioxus::prelude::*;
use linkforest_core::catalog::IconGlyph;
use linkforest_core::render::{LinkButtonView, LinkTreatment, RenderedProfile, TrailingMarker};
use linkforest_core::TemplateStrategy;

#[derive(Props, Clone, PartialEq)]
pub struct RenderedPageProps {
    pub view: RenderedProfile,
}

/// Draw a rendered profile view.
#[component]
pub fn RenderedPage(props: RenderedPageProps) -> Element {
    let view = &props.view;

    let root_style = format!(
        "{} color: {}; font-family: '{}', sans-serif;",
        view.background.css(),
        view.text_color,
        view.font_family,
    );

    let links_class = match view.strategy {
        TemplateStrategy::Classic => "rendered-links classic",
        TemplateStrategy::Cards => "rendered-links cards",
        TemplateStrategy::Grid => "rendered-links grid",
        TemplateStrategy::Minimal => "rendered-links minimal",
        TemplateStrategy::Horizontal => "rendered-links horizontal",
    };

    let container_class = if view.strategy == TemplateStrategy::Horizontal {
        "rendered-container wide"
    } else {
        "rendered-container"
    };

    rsx! {
        div { class: "rendered-page", style: "{root_style}",
            div { class: "{container_class}",
                // Header: avatar, name, handle, bio
                if let Some(avatar) = &view.header.avatar_url {
                    img { class: "rendered-avatar", src: "{avatar}", alt: "{view.header.name}" }
                } else {
                    div { class: "rendered-avatar placeholder" }
                }
                h1 { class: "rendered-name", "{view.header.name}" }
                if let Some(username) = &view.header.username {
                    p { class: "rendered-handle", "@{username}" }
                }
                if let Some(bio) = &view.header.bio {
                    p { class: "rendered-bio", "{bio}" }
                }

                // Social icons
                if !view.socials.is_empty() {
                    div { class: "rendered-socials",
                        for social in &view.socials {
                            a {
                                key: "{social.id}",
                                class: "rendered-social-icon",
                                href: "{social.href}",
                                target: "_blank",
                                aria_label: "{social.label}",
                                style: "{social_icon_style(social)}",
                                span { "{glyph_char(social.glyph)}" }
                            }
                        }
                    }
                }

                // Link rows
                div { class: "{links_class}",
                    for link in &view.links {
                        a {
                            key: "{link.id}",
                            class: "rendered-link",
                            href: "{link.href}",
                            target: "_blank",
                            style: "{link_style(link)}",
                            if let Some(glyph) = link.glyph {
                                span { class: "link-glyph", "{glyph_char(glyph)}" }
                            }
                            span { class: "link-title", "{link.title}" }
                            match &link.trailing {
                                Some(TrailingMarker::Chevron(color)) => rsx! {
                                    span { class: "link-trailing", style: "color: {color};", "›" }
                                },
                                Some(TrailingMarker::Arrow) => rsx! {
                                    span { class: "link-trailing", "↗" }
                                },
                                None => rsx! {},
                            }
                        }
                    }
                }

                div { class: "rendered-attribution", "{view.attribution}" }
            }
        }
    }
}

fn social_icon_style(social: &linkforest_core::render::SocialIconView) -> String {
    let mut style = format!(
        "background-color: {}; color: {};",
        social.paint.fill, social.paint.icon
    );
    match &social.paint.border {
        Some(border) => style.push_str(&format!(" border: 2px solid {};", border)),
        None => style.push_str(" border: none;"),
    }
    style
}

fn link_style(link: &LinkButtonView) -> String {
    match &link.treatment {
        LinkTreatment::Button(paint) => {
            let mut style = format!(
                "background-color: {}; color: {}; opacity: {};",
                paint.fill, paint.text_color, paint.opacity
            );
            if let Some(border) = &paint.border {
                style.push_str(&format!(" border: {};", border));
            }
            if let Some(shadow) = &paint.shadow {
                style.push_str(&format!(" box-shadow: {};", shadow));
            }
            style
        }
        LinkTreatment::Underlined {
            text_color,
            rule_color,
        } => format!(
            "background-color: transparent; color: {}; border-bottom: 1px solid {};",
            text_color, rule_color
        ),
    }
}

/// Text stand-in for each icon glyph.
fn glyph_char(glyph: IconGlyph) -> &'static str {
    match glyph {
        IconGlyph::Facebook => "fb",
        IconGlyph::Twitter => "tw",
        IconGlyph::Instagram => "ig",
        IconGlyph::Youtube => "yt",
        IconGlyph::Linkedin => "in",
        IconGlyph::Github => "gh",
        IconGlyph::Twitch => "tv",
        IconGlyph::Music => "♪",
        IconGlyph::Message => "✉",
        IconGlyph::Hash => "#",
        IconGlyph::At => "@",
        IconGlyph::Book => "✎",
        IconGlyph::Dribbble => "◉",
        IconGlyph::Globe => "⊕",
    }
}
