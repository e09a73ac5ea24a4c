//! Integration tests for the profile store: sessions, collection CRUD,
//! and persistence across reopen.

use linkforest_core::types::{LinkPatch, SocialPatch, TemplateId, ThemePatch, UserPatch};
use linkforest_core::{FixtureCredentials, ProfileStore, SocialPlatform};

fn memory_store() -> ProfileStore {
    ProfileStore::in_memory(Box::new(FixtureCredentials))
}

#[tokio::test]
async fn demo_login_seeds_sample_data() {
    let mut store = memory_store();
    assert!(store.authenticate("demo@example.com", "password123").await);

    assert!(store.is_session_active());
    let bundle = store.bundle();
    assert_eq!(bundle.user.username, "demouser");
    assert_eq!(bundle.user.name, "Demo User");
    assert_eq!(bundle.links.len(), 3);
    assert_eq!(bundle.socials.len(), 2);
    assert_eq!(bundle.links[0].title, "My Website");
    assert_eq!(bundle.socials[0].platform, SocialPlatform::Instagram);
    assert_eq!(
        bundle.socials[1].profile_url,
        "https://github.com/yourname"
    );
}

#[tokio::test]
async fn failed_login_changes_nothing() {
    let mut store = memory_store();
    assert!(!store.authenticate("demo@example.com", "wrong").await);

    assert!(!store.is_session_active());
    assert!(store.bundle().links.is_empty());
    assert!(store.bundle().socials.is_empty());
}

#[tokio::test]
async fn registration_derives_username_and_starts_empty() {
    let mut store = memory_store();
    assert!(store.create_account("Jane Doe", "jane@x.com", "longpw").await);

    let bundle = store.bundle();
    assert!(bundle.user.session_active);
    assert_eq!(bundle.user.username, "jane");
    assert_eq!(bundle.user.email, "jane@x.com");
    assert!(bundle.links.is_empty());
    assert!(bundle.socials.is_empty());
}

#[tokio::test]
async fn registration_validation_rules() {
    let mut store = memory_store();
    // Empty name
    assert!(!store.create_account("", "jane@x.com", "longpw").await);
    // No @ in identifier
    assert!(!store.create_account("Jane", "janex.com", "longpw").await);
    // Secret too short (must be > 5)
    assert!(!store.create_account("Jane", "jane@x.com", "12345").await);
    // Already registered
    assert!(!store.create_account("Demo", "demo@example.com", "longpw").await);
    assert!(!store.is_session_active());
}

#[tokio::test]
async fn logout_clears_identity_but_keeps_content() {
    let mut store = memory_store();
    store.authenticate("demo@example.com", "password123").await;
    store.select_template(TemplateId::from("grid"));
    store.update_theme(ThemePatch {
        button_color: Some("#ff0000".to_string()),
        ..Default::default()
    });

    store.end_session();

    let bundle = store.bundle();
    assert!(!bundle.user.session_active);
    assert!(bundle.user.username.is_empty());
    // Content and appearance survive logout
    assert_eq!(bundle.links.len(), 3);
    assert_eq!(bundle.socials.len(), 2);
    assert_eq!(bundle.template.as_str(), "grid");
    assert_eq!(bundle.theme.button_color, "#ff0000");
}

#[test]
fn links_preserve_insertion_order_and_move() {
    let mut store = memory_store();
    let a = store.add_link("A", "https://a.example.com", true).unwrap();
    let b = store.add_link("B", "https://b.example.com", true).unwrap();
    let c = store.add_link("C", "https://c.example.com", false).unwrap();
    assert_ne!(a, b);
    assert_ne!(b, c);

    let order: Vec<_> = store.bundle().links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(order, ["A", "B", "C"]);

    store.move_link(0, 2);
    let order: Vec<_> = store.bundle().links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(order, ["B", "C", "A"]);

    // Destination clamped, source out of range is a no-op
    store.move_link(1, 99);
    let order: Vec<_> = store.bundle().links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(order, ["B", "A", "C"]);
    store.move_link(42, 0);
    let order: Vec<_> = store.bundle().links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(order, ["B", "A", "C"]);
}

#[test]
fn link_validation_and_unknown_id_noops() {
    let mut store = memory_store();
    assert!(store.add_link("", "https://a.example.com", true).is_none());
    assert!(store.add_link("A", "", true).is_none());
    assert!(store.add_link("A", "not a url", true).is_none());
    assert!(store.bundle().links.is_empty());

    // Scheme defaulting
    let id = store.add_link("A", "example.com", true).unwrap();
    assert_eq!(store.bundle().links[0].target_url, "https://example.com");

    // Unknown ids never error
    store.update_link("nope", LinkPatch { active: Some(false), ..Default::default() });
    store.remove_link("nope");
    assert_eq!(store.bundle().links.len(), 1);

    store.update_link(&id, LinkPatch { title: Some("Renamed".to_string()), ..Default::default() });
    assert_eq!(store.bundle().links[0].title, "Renamed");
    store.remove_link(&id);
    assert!(store.bundle().links.is_empty());
}

#[test]
fn link_edits_obey_add_validation() {
    let mut store = memory_store();
    let id = store.add_link("A", "example.com", true).unwrap();

    // An unparseable URL in an edit is dropped; the stored value survives
    store.update_link(
        &id,
        LinkPatch {
            target_url: Some("not a url".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.bundle().links[0].target_url, "https://example.com");

    // A blank title is dropped too
    store.update_link(
        &id,
        LinkPatch {
            title: Some("   ".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.bundle().links[0].title, "A");

    // Valid edits are trimmed and scheme-defaulted like adds
    store.update_link(
        &id,
        LinkPatch {
            title: Some(" Renamed ".to_string()),
            target_url: Some("new.example.com/page".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.bundle().links[0].title, "Renamed");
    assert_eq!(
        store.bundle().links[0].target_url,
        "https://new.example.com/page"
    );

    // A dropped field doesn't block the rest of the patch
    store.update_link(
        &id,
        LinkPatch {
            target_url: Some("".to_string()),
            active: Some(false),
            ..Default::default()
        },
    );
    assert_eq!(
        store.bundle().links[0].target_url,
        "https://new.example.com/page"
    );
    assert!(!store.bundle().links[0].active);
}

#[test]
fn socials_derive_urls_and_allow_overrides() {
    let mut store = memory_store();
    let derived = store.add_social(SocialPlatform::Github, "octocat", None, true);
    let overridden = store.add_social(
        SocialPlatform::Twitch,
        "streamer",
        Some("https://custom.example.com/me"),
        true,
    );

    let bundle = store.bundle();
    assert_eq!(bundle.socials[0].profile_url, "https://github.com/octocat");
    assert_eq!(bundle.socials[1].profile_url, "https://custom.example.com/me");

    store.update_social(&derived, SocialPatch { active: Some(false), ..Default::default() });
    assert!(!store.bundle().socials[0].active);

    store.move_social(0, 1);
    assert_eq!(store.bundle().socials[1].id, derived);

    store.remove_social(&overridden);
    assert_eq!(store.bundle().socials.len(), 1);
}

#[tokio::test]
async fn bundle_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.redb");

    let expected = {
        let mut store =
            ProfileStore::open(&path, Box::new(FixtureCredentials)).unwrap();
        store.authenticate("demo@example.com", "password123").await;
        store.add_link("Extra", "https://extra.example.com", true);
        store.select_template(TemplateId::from("horizontal"));
        store.update_profile(UserPatch {
            bio: Some("Plants and code".to_string()),
            ..Default::default()
        });
        store.bundle().clone()
    };

    let reopened = ProfileStore::open(&path, Box::new(FixtureCredentials)).unwrap();
    assert_eq!(reopened.bundle(), &expected);
}

#[test]
fn unknown_template_is_accepted_and_renders_classic() {
    let mut store = memory_store();
    store.select_template(TemplateId::from("nonexistent"));
    assert_eq!(store.bundle().template.as_str(), "nonexistent");

    let view = linkforest_core::render(&store.bundle().template, store.bundle());
    assert_eq!(view.strategy, linkforest_core::TemplateStrategy::Classic);
}
