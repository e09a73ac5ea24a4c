//! User identity and display information.

use serde::{Deserialize, Serialize};

/// The profile owner's identity and display info.
///
/// `username` doubles as the public URL slug (lowercase `[a-z0-9_]+`).
/// `avatar_url` may be a data URI, a remote URL, or empty (placeholder
/// rendered instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque stable identifier
    pub id: String,

    /// Display name shown on the rendered page
    pub name: String,

    /// Login identifier
    pub email: String,

    /// Public URL slug, unique per profile
    pub username: String,

    /// Avatar image reference (data URI or URL); empty means none
    pub avatar_url: String,

    /// Free-text biography (recommended <= 150 chars, not enforced)
    pub bio: String,

    /// Whether a session is currently active for this user
    pub session_active: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            username: String::new(),
            avatar_url: String::new(),
            bio: String::new(),
            session_active: false,
        }
    }
}

/// Shallow-merge patch for [`UserProfile`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

impl UserProfile {
    /// Apply a patch, overwriting only the fields it carries.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_has_no_session() {
        let user = UserProfile::default();
        assert!(!user.session_active);
        assert!(user.username.is_empty());
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut user = UserProfile {
            name: "Demo User".into(),
            bio: "hello".into(),
            ..Default::default()
        };
        user.apply(UserPatch {
            bio: Some("new bio".into()),
            ..Default::default()
        });
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.bio, "new bio");
    }
}
