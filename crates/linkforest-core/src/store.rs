//! The profile store: single source of truth for the [`ProfileBundle`].
//!
//! All reads and writes go through here. Every mutation persists the whole
//! bundle to the storage slot as a best-effort side effect; persistence
//! failures are logged and never propagated to callers.

use std::path::Path;

use ulid::Ulid;

use crate::auth::CredentialVerifier;
use crate::catalog;
use crate::error::LinkForestError;
use crate::storage::BundleStorage;
use crate::types::{
    LinkEntry, LinkPatch, ProfileBundle, SocialAccountEntry, SocialPatch, SocialPlatform,
    TemplateId, ThemePatch, UserPatch, UserProfile,
};

/// Owns the bundle and persists it after every mutation.
pub struct ProfileStore {
    bundle: ProfileBundle,
    storage: Option<BundleStorage>,
    verifier: Box<dyn CredentialVerifier>,
}

impl ProfileStore {
    /// Open the store with on-disk persistence.
    ///
    /// Loads the previously saved bundle if one exists; a missing or corrupt
    /// slot starts from the default bundle.
    pub fn open(
        path: impl AsRef<Path>,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Result<Self, LinkForestError> {
        let storage = BundleStorage::open(path)?;
        let bundle = storage.load()?.unwrap_or_default();
        Ok(Self {
            bundle,
            storage: Some(storage),
            verifier,
        })
    }

    /// Ephemeral store with no persistence (tests, previews).
    pub fn in_memory(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            bundle: ProfileBundle::default(),
            storage: None,
            verifier,
        }
    }

    /// Read-only snapshot of the current state.
    pub fn bundle(&self) -> &ProfileBundle {
        &self.bundle
    }

    pub fn is_session_active(&self) -> bool {
        self.bundle.user.session_active
    }

    // ═══════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════

    /// Verify credentials and start a session.
    ///
    /// On success the user identity is replaced and the link/social lists
    /// are seeded with sample entries. On failure nothing changes.
    ///
    /// Async only so a future real backend can slot in behind the verifier.
    pub async fn authenticate(&mut self, identifier: &str, secret: &str) -> bool {
        let Some(identity) = self.verifier.verify(identifier, secret) else {
            tracing::debug!("Authentication failed for {}", identifier);
            return false;
        };

        self.bundle.user = UserProfile {
            id: Ulid::new().to_string(),
            name: identity.name,
            email: identifier.to_string(),
            username: identity.username,
            avatar_url: String::new(),
            bio: "Your bio goes here".to_string(),
            session_active: true,
        };
        self.bundle.links = self.seed_links();
        self.bundle.socials = self.seed_socials();
        self.persist();

        tracing::info!("Session started for {}", self.bundle.user.username);
        true
    }

    /// Register a new account and start a session.
    ///
    /// Validation: non-empty name, identifier containing `@`, secret longer
    /// than 5 chars, identifier not already registered. Any failure returns
    /// `false` with no state change; the caller decides which rule to
    /// surface.
    pub async fn create_account(&mut self, name: &str, identifier: &str, secret: &str) -> bool {
        if name.is_empty() || !identifier.contains('@') || secret.len() <= 5 {
            return false;
        }
        if self.verifier.is_registered(identifier) {
            tracing::debug!("Registration rejected: {} already registered", identifier);
            return false;
        }

        let username = derive_username(identifier);
        self.bundle.user = UserProfile {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            email: identifier.to_string(),
            username,
            avatar_url: String::new(),
            bio: String::new(),
            session_active: true,
        };
        self.bundle.links = Vec::new();
        self.bundle.socials = Vec::new();
        self.persist();

        tracing::info!("Account created for {}", self.bundle.user.username);
        true
    }

    /// Clear the identity only; links, socials, theme, and template stay.
    pub fn end_session(&mut self) {
        self.bundle.user = UserProfile::default();
        self.persist();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Profile and theme
    // ═══════════════════════════════════════════════════════════════════

    pub fn update_profile(&mut self, patch: UserPatch) {
        self.bundle.user.apply(patch);
        self.persist();
    }

    pub fn update_theme(&mut self, patch: ThemePatch) {
        self.bundle.theme.apply(patch);
        self.persist();
    }

    /// Set the selected template unconditionally.
    ///
    /// Unknown ids are accepted; they resolve to the classic strategy at
    /// render time.
    pub fn select_template(&mut self, template: TemplateId) {
        self.bundle.template = template;
        self.persist();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Links
    // ═══════════════════════════════════════════════════════════════════

    /// Append a link. Returns `None` (and changes nothing) when the title
    /// is empty or the URL doesn't parse after scheme defaulting.
    pub fn add_link(&mut self, title: &str, target_url: &str, active: bool) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let target_url = normalize_target_url(target_url)?;

        let id = Ulid::new().to_string();
        self.bundle.links.push(LinkEntry {
            id: id.clone(),
            title: title.to_string(),
            target_url,
            active,
        });
        self.persist();
        Some(id)
    }

    /// Shallow-merge into the link with the given id; unknown id is a no-op.
    ///
    /// Edits obey the same rules as [`Self::add_link`]: a patched title must
    /// be non-empty after trimming and a patched URL must parse after scheme
    /// defaulting. Fields failing those rules are dropped from the patch.
    pub fn update_link(&mut self, id: &str, patch: LinkPatch) {
        let Some(link) = self.bundle.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        let patch = LinkPatch {
            title: patch
                .title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            target_url: patch.target_url.and_then(|u| normalize_target_url(&u)),
            active: patch.active,
        };
        link.apply(patch);
        self.persist();
    }

    pub fn remove_link(&mut self, id: &str) {
        let before = self.bundle.links.len();
        self.bundle.links.retain(|l| l.id != id);
        if self.bundle.links.len() != before {
            self.persist();
        }
    }

    /// Splice the link at `from` out and reinsert at `to` (clamped).
    pub fn move_link(&mut self, from: usize, to: usize) {
        if move_entry(&mut self.bundle.links, from, to) {
            self.persist();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Socials
    // ═══════════════════════════════════════════════════════════════════

    /// Append a social account. The profile URL is derived from the catalog
    /// unless a non-empty override is given.
    pub fn add_social(
        &mut self,
        platform: SocialPlatform,
        username: &str,
        profile_url: Option<&str>,
        active: bool,
    ) -> String {
        let profile_url = match profile_url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => catalog::url_for(&platform, username),
        };

        let id = Ulid::new().to_string();
        self.bundle.socials.push(SocialAccountEntry {
            id: id.clone(),
            platform,
            username: username.to_string(),
            profile_url,
            active,
        });
        self.persist();
        id
    }

    pub fn update_social(&mut self, id: &str, patch: SocialPatch) {
        if let Some(social) = self.bundle.socials.iter_mut().find(|s| s.id == id) {
            social.apply(patch);
            self.persist();
        }
    }

    pub fn remove_social(&mut self, id: &str) {
        let before = self.bundle.socials.len();
        self.bundle.socials.retain(|s| s.id != id);
        if self.bundle.socials.len() != before {
            self.persist();
        }
    }

    pub fn move_social(&mut self, from: usize, to: usize) {
        if move_entry(&mut self.bundle.socials, from, to) {
            self.persist();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Persistence
    // ═══════════════════════════════════════════════════════════════════

    fn persist(&self) {
        if let Some(ref storage) = self.storage {
            if let Err(e) = storage.save(&self.bundle) {
                tracing::warn!("Failed to persist bundle: {}", e);
            }
        }
    }

    fn seed_links(&self) -> Vec<LinkEntry> {
        [
            ("My Website", "https://example.com"),
            ("Twitter / X", "https://twitter.com"),
            ("Instagram", "https://instagram.com"),
        ]
        .into_iter()
        .map(|(title, url)| LinkEntry {
            id: Ulid::new().to_string(),
            title: title.to_string(),
            target_url: url.to_string(),
            active: true,
        })
        .collect()
    }

    fn seed_socials(&self) -> Vec<SocialAccountEntry> {
        [
            (SocialPlatform::Instagram, "yourhandle"),
            (SocialPlatform::Github, "yourname"),
        ]
        .into_iter()
        .map(|(platform, username)| SocialAccountEntry {
            id: Ulid::new().to_string(),
            profile_url: catalog::url_for(&platform, username),
            platform,
            username: username.to_string(),
            active: true,
        })
        .collect()
    }
}

/// Splice-and-reinsert. Returns whether anything moved.
fn move_entry<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let item = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, item);
    true
}

/// Trim, default the scheme to `https://`, and require a parseable URL.
fn normalize_target_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };
    url::Url::parse(&candidate).ok()?;
    Some(candidate)
}

/// Lowercased local part of the identifier, restricted to `[a-z0-9_]`.
fn derive_username(identifier: &str) -> String {
    identifier
        .split('@')
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_normalization_defaults_scheme() {
        assert_eq!(
            normalize_target_url("example.com/page").as_deref(),
            Some("https://example.com/page")
        );
        assert_eq!(
            normalize_target_url("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert!(normalize_target_url("").is_none());
        assert!(normalize_target_url("ht tp://broken").is_none());
    }

    #[test]
    fn username_derivation() {
        assert_eq!(derive_username("jane@x.com"), "jane");
        assert_eq!(derive_username("Jane.Doe+tag@x.com"), "janedoetag");
    }

    #[test]
    fn move_entry_clamps_destination() {
        let mut v = vec![1, 2, 3];
        assert!(move_entry(&mut v, 0, 99));
        assert_eq!(v, vec![2, 3, 1]);
        assert!(!move_entry(&mut v, 5, 0));
        assert_eq!(v, vec![2, 3, 1]);
    }
}
