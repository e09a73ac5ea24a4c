//! Theme settings: background, text, button, and icon styling.

use serde::{Deserialize, Serialize};

/// Which background source field is authoritative.
///
/// The non-authoritative fields may stay populated; they are simply ignored
/// (no defensive clearing when the mode changes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundMode {
    #[default]
    Solid,
    Gradient,
    Image,
}

impl BackgroundMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Solid => "solid",
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Image => "image",
        }
    }
}

impl From<String> for BackgroundMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gradient" => BackgroundMode::Gradient,
            "image" => BackgroundMode::Image,
            // "solid" and anything unrecognized
            _ => BackgroundMode::Solid,
        }
    }
}

impl From<BackgroundMode> for String {
    fn from(value: BackgroundMode) -> Self {
        value.as_str().to_string()
    }
}

/// Visual treatment applied to link buttons.
///
/// Variants differ only in border/shadow/opacity treatment of the same
/// button color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonStyle {
    #[default]
    Filled,
    Outline,
    Soft,
    Shadow,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStyle::Filled => "filled",
            ButtonStyle::Outline => "outline",
            ButtonStyle::Soft => "soft",
            ButtonStyle::Shadow => "shadow",
        }
    }

    pub fn all() -> &'static [ButtonStyle] {
        &[
            ButtonStyle::Filled,
            ButtonStyle::Outline,
            ButtonStyle::Soft,
            ButtonStyle::Shadow,
        ]
    }
}

impl From<String> for ButtonStyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "outline" => ButtonStyle::Outline,
            "soft" => ButtonStyle::Soft,
            "shadow" => ButtonStyle::Shadow,
            _ => ButtonStyle::Filled,
        }
    }
}

impl From<ButtonStyle> for String {
    fn from(value: ButtonStyle) -> Self {
        value.as_str().to_string()
    }
}

/// How social icons are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialIconStyle {
    /// Per-platform brand colors
    #[default]
    Branded,
    /// Fixed dark fill for every platform
    Monochrome,
    /// Transparent fill, outlined, text-colored
    Minimal,
}

impl SocialIconStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIconStyle::Branded => "branded",
            SocialIconStyle::Monochrome => "monochrome",
            SocialIconStyle::Minimal => "minimal",
        }
    }

    pub fn all() -> &'static [SocialIconStyle] {
        &[
            SocialIconStyle::Branded,
            SocialIconStyle::Monochrome,
            SocialIconStyle::Minimal,
        ]
    }
}

impl From<String> for SocialIconStyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "monochrome" => SocialIconStyle::Monochrome,
            "minimal" => SocialIconStyle::Minimal,
            _ => SocialIconStyle::Branded,
        }
    }
}

impl From<SocialIconStyle> for String {
    fn from(value: SocialIconStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Visual configuration for the rendered profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub background_mode: BackgroundMode,
    pub background_color: String,
    /// Full CSS gradient expression, emitted verbatim when mode is gradient
    #[serde(default)]
    pub background_gradient: String,
    /// Image URL or data URI, used when mode is image
    #[serde(default)]
    pub background_image: String,
    pub text_color: String,
    pub button_style: ButtonStyle,
    pub button_color: String,
    pub button_text_color: String,
    pub font_family: String,
    pub social_icon_style: SocialIconStyle,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            background_mode: BackgroundMode::Solid,
            background_color: "#ffffff".to_string(),
            background_gradient: String::new(),
            background_image: String::new(),
            text_color: "#000000".to_string(),
            button_style: ButtonStyle::Filled,
            button_color: "#16a34a".to_string(),
            button_text_color: "#ffffff".to_string(),
            font_family: "Inter".to_string(),
            social_icon_style: SocialIconStyle::Branded,
        }
    }
}

/// Shallow-merge patch for [`ThemeSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub background_mode: Option<BackgroundMode>,
    pub background_color: Option<String>,
    pub background_gradient: Option<String>,
    pub background_image: Option<String>,
    pub text_color: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub font_family: Option<String>,
    pub social_icon_style: Option<SocialIconStyle>,
}

impl ThemeSettings {
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(v) = patch.background_mode {
            self.background_mode = v;
        }
        if let Some(v) = patch.background_color {
            self.background_color = v;
        }
        if let Some(v) = patch.background_gradient {
            self.background_gradient = v;
        }
        if let Some(v) = patch.background_image {
            self.background_image = v;
        }
        if let Some(v) = patch.text_color {
            self.text_color = v;
        }
        if let Some(v) = patch.button_style {
            self.button_style = v;
        }
        if let Some(v) = patch.button_color {
            self.button_color = v;
        }
        if let Some(v) = patch.button_text_color {
            self.button_text_color = v;
        }
        if let Some(v) = patch.font_family {
            self.font_family = v;
        }
        if let Some(v) = patch.social_icon_style {
            self.social_icon_style = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_button_style_decodes_to_filled() {
        let style: ButtonStyle = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(style, ButtonStyle::Filled);
    }

    #[test]
    fn default_theme_is_emerald_on_white() {
        let theme = ThemeSettings::default();
        assert_eq!(theme.background_color, "#ffffff");
        assert_eq!(theme.button_color, "#16a34a");
        assert_eq!(theme.background_mode, BackgroundMode::Solid);
    }

    #[test]
    fn patch_leaves_other_fields_alone() {
        let mut theme = ThemeSettings::default();
        theme.apply(ThemePatch {
            button_style: Some(ButtonStyle::Shadow),
            ..Default::default()
        });
        assert_eq!(theme.button_style, ButtonStyle::Shadow);
        assert_eq!(theme.button_color, "#16a34a");
    }
}
