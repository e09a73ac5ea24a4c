//! Theme resolution: abstract settings to concrete paint values.
//!
//! Pure functions only. Every template strategy paints through these so the
//! background/button/icon treatment stays identical across layouts.

use crate::catalog;
use crate::types::{ButtonStyle, SocialIconStyle, SocialPlatform, ThemeSettings};

/// Concrete fill for the page background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundPaint {
    /// Single color fill
    Solid(String),
    /// CSS gradient expression, emitted verbatim
    Gradient(String),
    /// Cover/center image fill
    Image(String),
}

impl BackgroundPaint {
    /// CSS declaration block for this paint.
    pub fn css(&self) -> String {
        match self {
            BackgroundPaint::Solid(color) => format!("background-color: {};", color),
            BackgroundPaint::Gradient(gradient) => format!("background: {};", gradient),
            BackgroundPaint::Image(url) => format!(
                "background-image: url({}); background-size: cover; background-position: center;",
                url
            ),
        }
    }
}

/// Resolve the page background from theme settings.
///
/// Gradient and image modes fall back to the solid color when their value
/// is missing; this is deliberate and keeps a half-configured theme
/// rendering something sensible.
pub fn resolve_background(theme: &ThemeSettings) -> BackgroundPaint {
    use crate::types::BackgroundMode::*;
    match theme.background_mode {
        Gradient if !theme.background_gradient.is_empty() => {
            BackgroundPaint::Gradient(theme.background_gradient.clone())
        }
        Image if !theme.background_image.is_empty() => {
            BackgroundPaint::Image(theme.background_image.clone())
        }
        _ => BackgroundPaint::Solid(theme.background_color.clone()),
    }
}

/// Concrete paint for one social icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIconPaint {
    /// Circle fill color ("transparent" for minimal style)
    pub fill: String,
    /// Glyph color
    pub icon: String,
    /// Outline color, `None` when no border is drawn
    pub border: Option<String>,
}

/// Resolve the paint for a social icon under the theme's icon style.
pub fn resolve_social_icon_paint(
    theme: &ThemeSettings,
    platform: &SocialPlatform,
) -> SocialIconPaint {
    match theme.social_icon_style {
        SocialIconStyle::Monochrome => SocialIconPaint {
            fill: "#000000".to_string(),
            icon: "#FFFFFF".to_string(),
            border: None,
        },
        SocialIconStyle::Minimal => SocialIconPaint {
            fill: "transparent".to_string(),
            icon: theme.text_color.clone(),
            border: Some(theme.text_color.clone()),
        },
        SocialIconStyle::Branded => SocialIconPaint {
            fill: catalog::brand_color_for(platform).to_string(),
            icon: "#FFFFFF".to_string(),
            border: None,
        },
    }
}

/// Concrete treatment for a link button.
///
/// All four button styles share the same button color; they differ only in
/// border, shadow, and opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPaint {
    pub fill: String,
    pub text_color: String,
    pub border: Option<String>,
    pub shadow: Option<String>,
    pub opacity: f32,
}

/// Shadow used by the shadow button style.
const BUTTON_SHADOW: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";

/// Resolve the button treatment from theme settings.
pub fn resolve_button(theme: &ThemeSettings) -> ButtonPaint {
    let base = ButtonPaint {
        fill: theme.button_color.clone(),
        text_color: theme.button_text_color.clone(),
        border: None,
        shadow: None,
        opacity: 0.9,
    };
    match theme.button_style {
        ButtonStyle::Filled => base,
        ButtonStyle::Outline => ButtonPaint {
            border: Some(format!("2px solid {}", theme.button_color)),
            ..base
        },
        ButtonStyle::Shadow => ButtonPaint {
            shadow: Some(BUTTON_SHADOW.to_string()),
            ..base
        },
        ButtonStyle::Soft => ButtonPaint {
            opacity: 0.75,
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BackgroundMode;

    #[test]
    fn solid_mode_uses_background_color() {
        let theme = ThemeSettings::default();
        assert_eq!(
            resolve_background(&theme),
            BackgroundPaint::Solid("#ffffff".to_string())
        );
    }

    #[test]
    fn gradient_mode_emits_gradient_verbatim() {
        let theme = ThemeSettings {
            background_mode: BackgroundMode::Gradient,
            background_gradient: "linear-gradient(to right, #000, #fff)".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_background(&theme),
            BackgroundPaint::Gradient("linear-gradient(to right, #000, #fff)".to_string())
        );
    }

    #[test]
    fn empty_gradient_falls_back_to_solid() {
        let theme = ThemeSettings {
            background_mode: BackgroundMode::Gradient,
            ..Default::default()
        };
        assert_eq!(
            resolve_background(&theme),
            BackgroundPaint::Solid("#ffffff".to_string())
        );
    }

    #[test]
    fn empty_image_falls_back_to_solid() {
        let theme = ThemeSettings {
            background_mode: BackgroundMode::Image,
            background_color: "#123456".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_background(&theme),
            BackgroundPaint::Solid("#123456".to_string())
        );
    }

    #[test]
    fn monochrome_icons_ignore_platform() {
        let theme = ThemeSettings {
            social_icon_style: crate::types::SocialIconStyle::Monochrome,
            ..Default::default()
        };
        let a = resolve_social_icon_paint(&theme, &SocialPlatform::Github);
        let b = resolve_social_icon_paint(&theme, &SocialPlatform::Spotify);
        assert_eq!(a, b);
        assert_eq!(a.fill, "#000000");
    }

    #[test]
    fn minimal_icons_follow_text_color() {
        let theme = ThemeSettings {
            social_icon_style: crate::types::SocialIconStyle::Minimal,
            text_color: "#222222".to_string(),
            ..Default::default()
        };
        let paint = resolve_social_icon_paint(&theme, &SocialPlatform::Twitch);
        assert_eq!(paint.fill, "transparent");
        assert_eq!(paint.icon, "#222222");
        assert_eq!(paint.border.as_deref(), Some("#222222"));
    }

    #[test]
    fn branded_unknown_platform_is_neutral_gray() {
        let theme = ThemeSettings::default();
        let paint = resolve_social_icon_paint(
            &theme,
            &SocialPlatform::Custom("mastodon".to_string()),
        );
        assert_eq!(paint.fill, catalog::NEUTRAL_COLOR);
    }

    #[test]
    fn button_styles_share_fill() {
        for style in crate::types::ButtonStyle::all() {
            let theme = ThemeSettings {
                button_style: *style,
                ..Default::default()
            };
            let paint = resolve_button(&theme);
            assert_eq!(paint.fill, "#16a34a");
            assert_eq!(paint.text_color, "#ffffff");
        }
    }

    #[test]
    fn outline_and_shadow_are_decoration_only() {
        let outline = resolve_button(&ThemeSettings {
            button_style: ButtonStyle::Outline,
            ..Default::default()
        });
        assert!(outline.border.is_some());
        assert!(outline.shadow.is_none());

        let shadow = resolve_button(&ThemeSettings {
            button_style: ButtonStyle::Shadow,
            ..Default::default()
        });
        assert!(shadow.border.is_none());
        assert_eq!(shadow.shadow.as_deref(), Some(BUTTON_SHADOW));
    }
}
