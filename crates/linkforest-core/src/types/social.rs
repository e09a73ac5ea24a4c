//! Social platform identifiers and account references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The known social platforms, plus a catch-all for free-text values.
///
/// Serializes as its lowercase string name; unknown strings deserialize
/// into [`SocialPlatform::Custom`] so stored bundles never fail to decode
/// on an unrecognized platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Youtube,
    Linkedin,
    Tiktok,
    Pinterest,
    Snapchat,
    Whatsapp,
    Reddit,
    Telegram,
    Discord,
    Github,
    Twitch,
    Behance,
    Dribbble,
    Medium,
    Spotify,
    Threads,
    /// Any platform outside the known set (stored verbatim)
    Custom(String),
}

impl SocialPlatform {
    /// All known platforms, in editor display order.
    pub fn known() -> &'static [SocialPlatform] {
        use SocialPlatform::*;
        &[
            Facebook, Twitter, Instagram, Youtube, Linkedin, Tiktok, Pinterest, Snapchat,
            Whatsapp, Reddit, Telegram, Discord, Github, Twitch, Behance, Dribbble, Medium,
            Spotify, Threads,
        ]
    }

    /// Lowercase wire name of this platform.
    pub fn as_str(&self) -> &str {
        use SocialPlatform::*;
        match self {
            Facebook => "facebook",
            Twitter => "twitter",
            Instagram => "instagram",
            Youtube => "youtube",
            Linkedin => "linkedin",
            Tiktok => "tiktok",
            Pinterest => "pinterest",
            Snapchat => "snapchat",
            Whatsapp => "whatsapp",
            Reddit => "reddit",
            Telegram => "telegram",
            Discord => "discord",
            Github => "github",
            Twitch => "twitch",
            Behance => "behance",
            Dribbble => "dribbble",
            Medium => "medium",
            Spotify => "spotify",
            Threads => "threads",
            Custom(name) => name,
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SocialPlatform {
    fn from(value: String) -> Self {
        use SocialPlatform::*;
        match value.as_str() {
            "facebook" => Facebook,
            "twitter" => Twitter,
            "instagram" => Instagram,
            "youtube" => Youtube,
            "linkedin" => Linkedin,
            "tiktok" => Tiktok,
            "pinterest" => Pinterest,
            "snapchat" => Snapchat,
            "whatsapp" => Whatsapp,
            "reddit" => Reddit,
            "telegram" => Telegram,
            "discord" => Discord,
            "github" => Github,
            "twitch" => Twitch,
            "behance" => Behance,
            "dribbble" => Dribbble,
            "medium" => Medium,
            "spotify" => Spotify,
            "threads" => Threads,
            _ => Custom(value),
        }
    }
}

impl From<SocialPlatform> for String {
    fn from(value: SocialPlatform) -> Self {
        value.as_str().to_string()
    }
}

/// A reference to an external social-media profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccountEntry {
    /// Unique identifier
    pub id: String,

    /// Which platform this account lives on
    pub platform: SocialPlatform,

    /// Handle on that platform (drives URL derivation)
    pub username: String,

    /// Full profile URL; derived from the catalog unless manually overridden
    pub profile_url: String,

    /// Whether the entry appears in public rendering
    pub active: bool,
}

/// Shallow-merge patch for [`SocialAccountEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialPatch {
    pub platform: Option<SocialPlatform>,
    pub username: Option<String>,
    pub profile_url: Option<String>,
    pub active: Option<bool>,
}

impl SocialAccountEntry {
    pub fn apply(&mut self, patch: SocialPatch) {
        if let Some(platform) = patch.platform {
            self.platform = platform;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(profile_url) = patch.profile_url {
            self.profile_url = profile_url;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platform_roundtrip() {
        let p = SocialPlatform::from("github".to_string());
        assert_eq!(p, SocialPlatform::Github);
        assert_eq!(p.as_str(), "github");
    }

    #[test]
    fn unknown_platform_lands_in_custom() {
        let p = SocialPlatform::from("mastodon".to_string());
        assert_eq!(p, SocialPlatform::Custom("mastodon".to_string()));
        assert_eq!(p.as_str(), "mastodon");
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&SocialPlatform::Tiktok).unwrap();
        assert_eq!(json, "\"tiktok\"");
        let back: SocialPlatform = serde_json::from_str("\"bluesky\"").unwrap();
        assert_eq!(back, SocialPlatform::Custom("bluesky".to_string()));
    }
}
