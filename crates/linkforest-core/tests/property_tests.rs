//! Property-based tests for bundle serialization and list reordering.
//!
//! Uses proptest to verify that arbitrary valid bundles round-trip through
//! JSON and that move operations match plain splice-and-reinsert semantics.

use proptest::prelude::*;

use linkforest_core::types::{
    BackgroundMode, ButtonStyle, LinkEntry, ProfileBundle, SocialAccountEntry, SocialIconStyle,
    SocialPlatform, TemplateId, ThemeSettings, UserProfile,
};
use linkforest_core::{FixtureCredentials, ProfileStore};

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ._-]{0,40}").expect("valid regex")
}

fn color_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-f]{6}").expect("valid regex")
}

fn platform_strategy() -> impl Strategy<Value = SocialPlatform> {
    prop_oneof![
        prop::sample::select(SocialPlatform::known().to_vec()),
        "[a-z]{3,12}".prop_map(SocialPlatform::from),
    ]
}

fn link_strategy() -> impl Strategy<Value = LinkEntry> {
    (
        "[a-z0-9]{1,26}",
        text_strategy(),
        "[a-z]{3,10}\\.com(/[a-z0-9]{0,8})?",
        any::<bool>(),
    )
        .prop_map(|(id, title, host, active)| LinkEntry {
            id,
            title,
            target_url: format!("https://{}", host),
            active,
        })
}

fn social_strategy() -> impl Strategy<Value = SocialAccountEntry> {
    (
        "[a-z0-9]{1,26}",
        platform_strategy(),
        "[a-z0-9_]{0,20}",
        any::<bool>(),
    )
        .prop_map(|(id, platform, username, active)| SocialAccountEntry {
            profile_url: linkforest_core::catalog::url_for(&platform, &username),
            id,
            platform,
            username,
            active,
        })
}

fn theme_strategy() -> impl Strategy<Value = ThemeSettings> {
    (
        prop::sample::select(vec![
            BackgroundMode::Solid,
            BackgroundMode::Gradient,
            BackgroundMode::Image,
        ]),
        color_strategy(),
        text_strategy(),
        color_strategy(),
        prop::sample::select(ButtonStyle::all().to_vec()),
        color_strategy(),
        prop::sample::select(SocialIconStyle::all().to_vec()),
    )
        .prop_map(
            |(mode, bg, gradient, text, button_style, button_color, icon_style)| ThemeSettings {
                background_mode: mode,
                background_color: bg,
                background_gradient: gradient,
                background_image: String::new(),
                text_color: text,
                button_style,
                button_color,
                button_text_color: "#ffffff".to_string(),
                font_family: "Inter".to_string(),
                social_icon_style: icon_style,
            },
        )
}

fn bundle_strategy() -> impl Strategy<Value = ProfileBundle> {
    (
        (text_strategy(), text_strategy(), "[a-z0-9_]{0,16}", any::<bool>()),
        prop::collection::vec(link_strategy(), 0..8),
        prop::collection::vec(social_strategy(), 0..6),
        theme_strategy(),
        "[a-z-]{1,20}",
    )
        .prop_map(|((name, bio, username, session), links, socials, theme, template)| {
            ProfileBundle {
                user: UserProfile {
                    id: "user".to_string(),
                    name,
                    email: format!("{}@example.com", username),
                    username,
                    avatar_url: String::new(),
                    bio,
                    session_active: session,
                },
                links,
                socials,
                theme,
                template: TemplateId::new(template),
            }
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any valid bundle survives a JSON round-trip field for field.
    #[test]
    fn bundle_json_roundtrip(bundle in bundle_strategy()) {
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ProfileBundle = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(bundle, back);
    }

    /// Rendering never panics and always filters to active entries.
    #[test]
    fn render_total_and_filters(bundle in bundle_strategy()) {
        let view = linkforest_core::render(&bundle.template, &bundle);
        let active_links = bundle.links.iter().filter(|l| l.active).count();
        let active_socials = bundle.socials.iter().filter(|s| s.active).count();
        prop_assert_eq!(view.links.len(), active_links);
        prop_assert_eq!(view.socials.len(), active_socials);
    }

    /// `move_link` behaves like splice-and-reinsert on a plain vector.
    #[test]
    fn move_link_matches_splice_model(
        titles in prop::collection::vec("[a-z]{1,10}", 1..8),
        from in 0..10usize,
        to in 0..10usize,
    ) {
        let mut store = ProfileStore::in_memory(Box::new(FixtureCredentials));
        for t in &titles {
            store.add_link(t, "https://example.com", true);
        }

        let mut model: Vec<String> = titles.clone();
        if from < model.len() {
            let item = model.remove(from);
            let dest = to.min(model.len());
            model.insert(dest, item);
        }

        store.move_link(from, to);
        let actual: Vec<String> = store
            .bundle()
            .links
            .iter()
            .map(|l| l.title.clone())
            .collect();
        prop_assert_eq!(actual, model);
    }

    /// Insertion order is stable and ids are unique across rapid adds.
    #[test]
    fn add_link_preserves_order_and_id_uniqueness(
        titles in prop::collection::vec("[a-z]{1,10}", 1..12),
    ) {
        let mut store = ProfileStore::in_memory(Box::new(FixtureCredentials));
        let ids: Vec<String> = titles
            .iter()
            .map(|t| store.add_link(t, "https://example.com", true).unwrap())
            .collect();

        let stored: Vec<String> = store
            .bundle()
            .links
            .iter()
            .map(|l| l.title.clone())
            .collect();
        prop_assert_eq!(&stored, &titles);

        let unique: std::collections::HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}
