//! The aggregate root persisted as a single storage slot.

use serde::{Deserialize, Serialize};

use super::{LinkEntry, SocialAccountEntry, TemplateId, ThemeSettings, UserProfile};

/// The full state of one user's link page.
///
/// Exactly one bundle exists per running instance; it is owned by the
/// profile store and handed out to renderers as read-only snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileBundle {
    pub user: UserProfile,
    /// Display-ordered; inactive entries retained but hidden publicly
    pub links: Vec<LinkEntry>,
    /// Display-ordered; duplicates per platform permitted
    pub socials: Vec<SocialAccountEntry>,
    pub theme: ThemeSettings,
    pub template: TemplateId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_is_empty_and_classic() {
        let bundle = ProfileBundle::default();
        assert!(bundle.links.is_empty());
        assert!(bundle.socials.is_empty());
        assert_eq!(bundle.template.as_str(), "classic");
        assert!(!bundle.user.session_active);
    }

    #[test]
    fn bundle_roundtrips_through_json() {
        let bundle = ProfileBundle::default();
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ProfileBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(bundle, back);
    }
}
