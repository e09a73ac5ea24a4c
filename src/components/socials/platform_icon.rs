//! Small branded platform badge used in editors and lists.

use dioxus::prelude::*;
use linkforest_core::catalog::{self, IconGlyph};
use linkforest_core::SocialPlatform;

#[derive(Props, Clone, PartialEq)]
pub struct PlatformIconProps {
    pub platform: SocialPlatform,
}

/// Brand-colored circle with the platform's glyph.
#[component]
pub fn PlatformIcon(props: PlatformIconProps) -> Element {
    let color = catalog::brand_color_for(&props.platform);
    let glyph = badge_text(catalog::glyph_for(&props.platform));

    rsx! {
        span {
            class: "platform-icon",
            style: "background-color: {color};",
            title: "{catalog::display_name_for(&props.platform)}",
            "{glyph}"
        }
    }
}

fn badge_text(glyph: IconGlyph) -> &'static str {
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
