//! Static reference data for social platforms.
//!
//! Maps a platform to its display name, brand color, icon glyph, and
//! profile-URL template. Lookups are tolerant: a [`SocialPlatform::Custom`]
//! value degrades to the platform string as name, a neutral gray, the globe
//! glyph, and a `https://{platform}.com/{username}` guess.

use crate::types::SocialPlatform;

/// Abstract icon glyph identifiers, independent of icon paint.
///
/// The UI layer decides how each glyph is drawn; the catalog only says
/// which glyph a platform (or link) gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    Facebook,
    Twitter,
    Instagram,
    Youtube,
    Linkedin,
    Github,
    Twitch,
    Music,
    Message,
    Hash,
    At,
    Book,
    Dribbble,
    /// Fallback for anything unrecognized
    Globe,
}

/// Catalog entry for one known platform.
struct PlatformInfo {
    display_name: &'static str,
    brand_color: &'static str,
    /// Profile URL with a `{username}` placeholder
    url_template: &'static str,
    glyph: IconGlyph,
}

fn info(platform: &SocialPlatform) -> Option<&'static PlatformInfo> {
    use SocialPlatform::*;
    let info: &'static PlatformInfo = match platform {
        Facebook => &PlatformInfo {
            display_name: "Facebook",
            brand_color: "#1877F2",
            url_template: "https://facebook.com/{username}",
            glyph: IconGlyph::Facebook,
        },
        Twitter => &PlatformInfo {
            display_name: "Twitter",
            brand_color: "#1DA1F2",
            url_template: "https://twitter.com/{username}",
            glyph: IconGlyph::Twitter,
        },
        Instagram => &PlatformInfo {
            display_name: "Instagram",
            brand_color: "#E4405F",
            url_template: "https://instagram.com/{username}",
            glyph: IconGlyph::Instagram,
        },
        Youtube => &PlatformInfo {
            display_name: "YouTube",
            brand_color: "#FF0000",
            url_template: "https://youtube.com/{username}",
            glyph: IconGlyph::Youtube,
        },
        Linkedin => &PlatformInfo {
            display_name: "LinkedIn",
            brand_color: "#0A66C2",
            url_template: "https://linkedin.com/in/{username}",
            glyph: IconGlyph::Linkedin,
        },
        Tiktok => &PlatformInfo {
            display_name: "TikTok",
            brand_color: "#000000",
            url_template: "https://tiktok.com/@{username}",
            glyph: IconGlyph::Hash,
        },
        Pinterest => &PlatformInfo {
            display_name: "Pinterest",
            brand_color: "#BD081C",
            url_template: "https://pinterest.com/{username}",
            glyph: IconGlyph::At,
        },
        Snapchat => &PlatformInfo {
            display_name: "Snapchat",
            brand_color: "#FFFC00",
            url_template: "https://snapchat.com/add/{username}",
            glyph: IconGlyph::Message,
        },
        Whatsapp => &PlatformInfo {
            display_name: "WhatsApp",
            brand_color: "#25D366",
            url_template: "https://wa.me/{username}",
            glyph: IconGlyph::Message,
        },
        Reddit => &PlatformInfo {
            display_name: "Reddit",
            brand_color: "#FF4500",
            url_template: "https://reddit.com/user/{username}",
            glyph: IconGlyph::At,
        },
        Telegram => &PlatformInfo {
            display_name: "Telegram",
            brand_color: "#26A5E4",
            url_template: "https://t.me/{username}",
            glyph: IconGlyph::Message,
        },
        Discord => &PlatformInfo {
            display_name: "Discord",
            brand_color: "#5865F2",
            url_template: "https://discord.gg/{username}",
            glyph: IconGlyph::Message,
        },
        Github => &PlatformInfo {
            display_name: "GitHub",
            brand_color: "#181717",
            url_template: "https://github.com/{username}",
            glyph: IconGlyph::Github,
        },
        Twitch => &PlatformInfo {
            display_name: "Twitch",
            brand_color: "#9146FF",
            url_template: "https://twitch.tv/{username}",
            glyph: IconGlyph::Twitch,
        },
        Behance => &PlatformInfo {
            display_name: "Behance",
            brand_color: "#1769FF",
            url_template: "https://behance.net/{username}",
            glyph: IconGlyph::At,
        },
        Dribbble => &PlatformInfo {
            display_name: "Dribbble",
            brand_color: "#EA4C89",
            url_template: "https://dribbble.com/{username}",
            glyph: IconGlyph::Dribbble,
        },
        Medium => &PlatformInfo {
            display_name: "Medium",
            brand_color: "#000000",
            url_template: "https://medium.com/@{username}",
            glyph: IconGlyph::Book,
        },
        Spotify => &PlatformInfo {
            display_name: "Spotify",
            brand_color: "#1DB954",
            url_template: "https://open.spotify.com/user/{username}",
            glyph: IconGlyph::Music,
        },
        Threads => &PlatformInfo {
            display_name: "Threads",
            brand_color: "#000000",
            url_template: "https://threads.net/@{username}",
            glyph: IconGlyph::Hash,
        },
        Custom(_) => return None,
    };
    Some(info)
}

/// Fallback color for unrecognized platforms.
pub const NEUTRAL_COLOR: &str = "#808080";

/// Known platforms grouped for pickers, in display order.
///
/// Every platform in [`SocialPlatform::known`] appears in exactly one
/// group.
pub fn platform_groups() -> &'static [(&'static str, &'static [SocialPlatform])] {
    use SocialPlatform::*;
    &[
        ("Popular", &[Instagram, Twitter, Tiktok, Youtube, Facebook]),
        ("Professional", &[Linkedin, Github, Medium, Behance, Dribbble]),
        ("Messaging", &[Whatsapp, Telegram, Discord, Snapchat]),
        ("Communities", &[Reddit, Pinterest, Threads, Twitch, Spotify]),
    ]
}

/// Human-readable platform name. Custom platforms return their id verbatim.
pub fn display_name_for(platform: &SocialPlatform) -> String {
    match info(platform) {
        Some(i) => i.display_name.to_string(),
        None => platform.as_str().to_string(),
    }
}

/// Brand color for the platform; neutral gray when unrecognized.
pub fn brand_color_for(platform: &SocialPlatform) -> &'static str {
    match info(platform) {
        Some(i) => i.brand_color,
        None => NEUTRAL_COLOR,
    }
}

/// Icon glyph for the platform; globe when unrecognized.
pub fn glyph_for(platform: &SocialPlatform) -> IconGlyph {
    match info(platform) {
        Some(i) => i.glyph,
        None => IconGlyph::Globe,
    }
}

/// Derive the profile URL for a handle on the given platform.
///
/// Returns an empty string for an empty username.
pub fn url_for(platform: &SocialPlatform, username: &str) -> String {
    if username.is_empty() {
        return String::new();
    }
    match info(platform) {
        Some(i) => i.url_template.replace("{username}", username),
        None => format!("https://{}.com/{}", platform.as_str(), username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_url_derivation() {
        assert_eq!(
            url_for(&SocialPlatform::Github, "octocat"),
            "https://github.com/octocat"
        );
        assert_eq!(url_for(&SocialPlatform::Github, ""), "");
    }

    #[test]
    fn handle_prefix_platforms() {
        assert_eq!(
            url_for(&SocialPlatform::Tiktok, "dancer"),
            "https://tiktok.com/@dancer"
        );
        assert_eq!(
            url_for(&SocialPlatform::Medium, "writer"),
            "https://medium.com/@writer"
        );
        assert_eq!(
            url_for(&SocialPlatform::Linkedin, "jane"),
            "https://linkedin.com/in/jane"
        );
    }

    #[test]
    fn groups_partition_the_known_platforms() {
        let grouped: Vec<&SocialPlatform> = platform_groups()
            .iter()
            .flat_map(|(_, platforms)| platforms.iter())
            .collect();
        assert_eq!(grouped.len(), SocialPlatform::known().len());
        for platform in SocialPlatform::known() {
            assert_eq!(
                grouped.iter().filter(|p| **p == platform).count(),
                1,
                "{} must appear in exactly one group",
                platform
            );
        }
    }

    #[test]
    fn custom_platform_falls_back() {
        let p = SocialPlatform::Custom("mastodon".to_string());
        assert_eq!(display_name_for(&p), "mastodon");
        assert_eq!(brand_color_for(&p), NEUTRAL_COLOR);
        assert_eq!(glyph_for(&p), IconGlyph::Globe);
        assert_eq!(url_for(&p, "me"), "https://mastodon.com/me");
    }
}
