//! Template rendering: a profile bundle to a concrete view description.
//!
//! `render` is a pure function. It filters to active entries, resolves all
//! theme paints, and describes the page as data; the UI layer turns the
//! result into actual markup. Identical inputs always produce identical
//! output, and nothing here panics on empty or malformed bundles.

use crate::catalog::{self, IconGlyph};
use crate::resolver::{
    resolve_background, resolve_button, resolve_social_icon_paint, BackgroundPaint, ButtonPaint,
    SocialIconPaint,
};
use crate::types::{ProfileBundle, TemplateId, TemplateStrategy};

/// Footer line shown on every rendered page.
pub const ATTRIBUTION: &str = "Powered by LinkForest";

/// Placeholder display name for profiles without one.
const NAME_PLACEHOLDER: &str = "Your Name";

/// Fully resolved description of a rendered profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedProfile {
    pub strategy: TemplateStrategy,
    pub background: BackgroundPaint,
    pub text_color: String,
    pub font_family: String,
    pub header: ProfileHeader,
    pub socials: Vec<SocialIconView>,
    pub links: Vec<LinkButtonView>,
    pub attribution: &'static str,
}

/// Header block: avatar, name, handle, bio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    /// Display name, placeholder substituted when empty
    pub name: String,
    /// Public handle, omitted when empty
    pub username: Option<String>,
    /// Bio text, omitted when empty
    pub bio: Option<String>,
    /// Avatar reference; `None` renders the placeholder circle
    pub avatar_url: Option<String>,
}

/// One social icon with its resolved paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIconView {
    pub id: String,
    pub href: String,
    pub glyph: IconGlyph,
    pub paint: SocialIconPaint,
    /// Accessible label ("Visit GitHub")
    pub label: String,
}

/// How a link row is painted, per strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkTreatment {
    /// Solid button row (classic, cards, grid, horizontal)
    Button(ButtonPaint),
    /// Transparent row with a bottom rule (minimal)
    Underlined { text_color: String, rule_color: String },
}

/// Trailing marker on a link row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailingMarker {
    /// Chevron in the given color (minimal)
    Chevron(String),
    /// Outward arrow (horizontal)
    Arrow,
}

/// One link row ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkButtonView {
    pub id: String,
    pub title: String,
    pub href: String,
    pub treatment: LinkTreatment,
    /// Leading icon, only set by the cards strategy
    pub glyph: Option<IconGlyph>,
    pub trailing: Option<TrailingMarker>,
}

/// Render a bundle through the strategy the template id resolves to.
///
/// Unknown template ids render identically to `classic`.
pub fn render(template: &TemplateId, bundle: &ProfileBundle) -> RenderedProfile {
    let strategy = template.strategy();
    let theme = &bundle.theme;

    let header = ProfileHeader {
        name: if bundle.user.name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            bundle.user.name.clone()
        },
        username: non_empty(&bundle.user.username),
        bio: non_empty(&bundle.user.bio),
        avatar_url: non_empty(&bundle.user.avatar_url),
    };

    let socials = bundle
        .socials
        .iter()
        .filter(|s| s.active)
        .map(|s| SocialIconView {
            id: s.id.clone(),
            href: s.profile_url.clone(),
            glyph: catalog::glyph_for(&s.platform),
            paint: resolve_social_icon_paint(theme, &s.platform),
            label: format!("Visit {}", catalog::display_name_for(&s.platform)),
        })
        .collect();

    let links = bundle
        .links
        .iter()
        .filter(|l| l.active)
        .map(|l| {
            let (treatment, glyph, trailing) = match strategy {
                TemplateStrategy::Minimal => (
                    LinkTreatment::Underlined {
                        text_color: theme.text_color.clone(),
                        rule_color: theme.button_color.clone(),
                    },
                    None,
                    Some(TrailingMarker::Chevron(theme.button_color.clone())),
                ),
                TemplateStrategy::Cards => (
                    LinkTreatment::Button(resolve_button(theme)),
                    Some(glyph_for_url(&l.target_url)),
                    None,
                ),
                TemplateStrategy::Horizontal => (
                    LinkTreatment::Button(resolve_button(theme)),
                    None,
                    Some(TrailingMarker::Arrow),
                ),
                TemplateStrategy::Classic | TemplateStrategy::Grid => {
                    (LinkTreatment::Button(resolve_button(theme)), None, None)
                }
            };
            LinkButtonView {
                id: l.id.clone(),
                title: l.title.clone(),
                href: l.target_url.clone(),
                treatment,
                glyph,
                trailing,
            }
        })
        .collect();

    RenderedProfile {
        strategy,
        background: resolve_background(theme),
        text_color: theme.text_color.clone(),
        font_family: theme.font_family.clone(),
        header,
        socials,
        links,
        attribution: ATTRIBUTION,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Infer a leading glyph for a link from its URL host (cards strategy).
///
/// A URL that fails to parse degrades to the globe glyph.
fn glyph_for_url(target_url: &str) -> IconGlyph {
    let host = match url::Url::parse(target_url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_ascii_lowercase(),
            None => return IconGlyph::Globe,
        },
        Err(_) => return IconGlyph::Globe,
    };

    if host.contains("instagram") {
        IconGlyph::Instagram
    } else if host.contains("twitter") || host.contains("x.com") {
        IconGlyph::Twitter
    } else if host.contains("facebook") {
        IconGlyph::Facebook
    } else if host.contains("youtube") {
        IconGlyph::Youtube
    } else if host.contains("linkedin") {
        IconGlyph::Linkedin
    } else if host.contains("github") {
        IconGlyph::Github
    } else if host.contains("spotify") {
        IconGlyph::Music
    } else {
        IconGlyph::Globe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkEntry, SocialAccountEntry, SocialPlatform};

    fn sample_bundle() -> ProfileBundle {
        let mut bundle = ProfileBundle::default();
        bundle.user.name = "Demo User".to_string();
        bundle.user.username = "demouser".to_string();
        bundle.links = vec![
            LinkEntry {
                id: "a".into(),
                title: "My Website".into(),
                target_url: "https://example.com".into(),
                active: true,
            },
            LinkEntry {
                id: "b".into(),
                title: "Hidden".into(),
                target_url: "https://hidden.example.com".into(),
                active: false,
            },
            LinkEntry {
                id: "c".into(),
                title: "Code".into(),
                target_url: "https://github.com/demouser".into(),
                active: true,
            },
        ];
        bundle.socials = vec![
            SocialAccountEntry {
                id: "s1".into(),
                platform: SocialPlatform::Github,
                username: "demouser".into(),
                profile_url: "https://github.com/demouser".into(),
                active: true,
            },
            SocialAccountEntry {
                id: "s2".into(),
                platform: SocialPlatform::Instagram,
                username: "demouser".into(),
                profile_url: "https://instagram.com/demouser".into(),
                active: false,
            },
        ];
        bundle
    }

    const ALL_IDS: &[&str] = &["classic", "cards", "grid", "minimal", "horizontal"];

    #[test]
    fn inactive_entries_hidden_in_every_strategy() {
        let bundle = sample_bundle();
        for id in ALL_IDS {
            let view = render(&TemplateId::from(*id), &bundle);
            assert_eq!(view.links.len(), 2, "strategy {}", id);
            assert!(view.links.iter().all(|l| l.id != "b"));
            assert_eq!(view.socials.len(), 1);
            assert_eq!(view.socials[0].id, "s1");
        }
    }

    #[test]
    fn render_is_deterministic() {
        let bundle = sample_bundle();
        let template = TemplateId::from("cards");
        assert_eq!(render(&template, &bundle), render(&template, &bundle));
    }

    #[test]
    fn unknown_template_renders_as_classic() {
        let bundle = sample_bundle();
        let unknown = render(&TemplateId::from("nonexistent"), &bundle);
        let classic = render(&TemplateId::from("classic"), &bundle);
        assert_eq!(unknown, classic);
    }

    #[test]
    fn empty_bundle_renders_placeholders() {
        let view = render(&TemplateId::default(), &ProfileBundle::default());
        assert!(view.links.is_empty());
        assert!(view.socials.is_empty());
        assert_eq!(view.header.name, NAME_PLACEHOLDER);
        assert!(view.header.avatar_url.is_none());
        assert!(view.header.bio.is_none());
    }

    #[test]
    fn cards_infers_glyphs_from_hosts() {
        let bundle = sample_bundle();
        let view = render(&TemplateId::from("cards"), &bundle);
        assert_eq!(view.links[0].glyph, Some(IconGlyph::Globe));
        assert_eq!(view.links[1].glyph, Some(IconGlyph::Github));
    }

    #[test]
    fn malformed_url_degrades_to_globe() {
        let mut bundle = sample_bundle();
        bundle.links[0].target_url = "not a url at all".to_string();
        let view = render(&TemplateId::from("cards"), &bundle);
        assert_eq!(view.links[0].glyph, Some(IconGlyph::Globe));
    }

    #[test]
    fn minimal_rows_are_underlined_with_chevrons() {
        let bundle = sample_bundle();
        let view = render(&TemplateId::from("minimal"), &bundle);
        for link in &view.links {
            assert!(matches!(link.treatment, LinkTreatment::Underlined { .. }));
            assert!(matches!(link.trailing, Some(TrailingMarker::Chevron(_))));
        }
    }

    #[test]
    fn horizontal_rows_carry_arrows() {
        let bundle = sample_bundle();
        let view = render(&TemplateId::from("horizontal"), &bundle);
        assert!(view
            .links
            .iter()
            .all(|l| l.trailing == Some(TrailingMarker::Arrow)));
    }
}
