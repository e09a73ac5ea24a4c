//! Template metadata catalog.
//!
//! Cosmetic metadata for the template gallery: names, descriptions,
//! category tags, and premium/new badges. Every id here still resolves
//! through [`crate::types::TemplateId::strategy`] to one of the five
//! structural strategies; catalog entries never add rendering behavior.

use crate::types::TemplateId;

/// Gallery filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Popular,
    Minimal,
    Professional,
    Creative,
    Colorful,
    Dark,
    Elegant,
    Playful,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Popular => "popular",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Professional => "professional",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Colorful => "colorful",
            TemplateCategory::Dark => "dark",
            TemplateCategory::Elegant => "elegant",
            TemplateCategory::Playful => "playful",
        }
    }

    pub fn all() -> &'static [TemplateCategory] {
        use TemplateCategory::*;
        &[
            Popular,
            Minimal,
            Professional,
            Creative,
            Colorful,
            Dark,
            Elegant,
            Playful,
        ]
    }
}

/// Static metadata for one gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [TemplateCategory],
    pub is_new: bool,
    pub is_premium: bool,
    pub features: &'static [&'static str],
}

impl TemplateMeta {
    pub fn template_id(&self) -> TemplateId {
        TemplateId::from(self.id)
    }
}

macro_rules! meta {
    ($id:literal, $name:literal, $desc:literal, [$($cat:ident),+ $(,)?],
     new: $new:literal, premium: $premium:literal, [$($feat:literal),+ $(,)?]) => {
        TemplateMeta {
            id: $id,
            name: $name,
            description: $desc,
            categories: &[$(TemplateCategory::$cat),+],
            is_new: $new,
            is_premium: $premium,
            features: &[$($feat),+],
        }
    };
}

const TEMPLATES: &[TemplateMeta] = &[
    // The five structural strategies
    meta!("classic", "Classic", "Traditional vertical list of links",
        [Popular, Minimal], new: false, premium: false,
        ["Clean design", "High click-through rate", "Simple layout"]),
    meta!("cards", "Cards", "Card-based layout with icons",
        [Popular, Professional], new: false, premium: false,
        ["Icon support", "Descriptive cards", "Professional look"]),
    meta!("grid", "Grid", "Grid layout for a modern look",
        [Popular, Creative], new: false, premium: false,
        ["Compact layout", "Visual focus", "Equal emphasis"]),
    meta!("minimal", "Minimal", "Clean layout with subtle animations",
        [Minimal, Elegant], new: false, premium: false,
        ["Minimalist design", "Subtle animations", "Focus on content"]),
    meta!("horizontal", "Horizontal", "Full-width horizontal links",
        [Professional, Elegant], new: false, premium: false,
        ["Unique layout", "Full-width design", "Desktop optimized"]),
    // Cosmetic variants
    meta!("minimal-mono", "Minimal Mono", "Monochromatic minimal design",
        [Minimal, Elegant], new: true, premium: false,
        ["Monochrome palette", "Typography focus", "Elegant spacing"]),
    meta!("minimal-dots", "Minimal Dots", "Minimal design with dot navigation",
        [Minimal], new: false, premium: false,
        ["Dot indicators", "Clean layout", "Subtle hover effects"]),
    meta!("minimal-outline", "Minimal Outline", "Clean design with outlined elements",
        [Minimal, Elegant], new: false, premium: false,
        ["Outlined elements", "Lightweight design", "Elegant typography"]),
    meta!("minimal-shadow", "Minimal Shadow", "Minimal design with subtle shadows",
        [Minimal], new: false, premium: false,
        ["Subtle shadows", "Depth effects", "Clean aesthetic"]),
    meta!("minimal-text", "Minimal Text", "Text-only minimal design",
        [Minimal], new: false, premium: false,
        ["Typography focus", "No distractions", "Text animations"]),
    meta!("business-card", "Business Card", "Professional business card layout",
        [Professional], new: false, premium: false,
        ["Contact info focus", "Professional layout", "Business-ready"]),
    meta!("corporate", "Corporate", "Corporate-style professional template",
        [Professional], new: false, premium: false,
        ["Brand-focused", "Corporate aesthetic", "Professional typography"]),
    meta!("resume", "Resume", "Resume-inspired professional layout",
        [Professional], new: false, premium: true,
        ["Skills section", "Experience layout", "Professional bio"]),
    meta!("portfolio", "Portfolio", "Showcase your work professionally",
        [Professional, Creative], new: false, premium: true,
        ["Work showcase", "Project highlights", "Professional presentation"]),
    meta!("consultant", "Consultant", "Perfect for consultants and experts",
        [Professional], new: false, premium: false,
        ["Expertise highlight", "Service focus", "Professional tone"]),
    meta!("artist", "Artist", "Showcase your creative work",
        [Creative], new: false, premium: false,
        ["Gallery layout", "Artistic design", "Visual focus"]),
    meta!("photographer", "Photographer", "Perfect for photographers",
        [Creative, Professional], new: false, premium: true,
        ["Image showcase", "Portfolio layout", "Visual emphasis"]),
    meta!("musician", "Musician", "Promote your music and events",
        [Creative], new: false, premium: false,
        ["Music links", "Event promotion", "Fan engagement"]),
    meta!("designer", "Designer", "Show off your design portfolio",
        [Creative, Professional], new: false, premium: false,
        ["Design showcase", "Visual hierarchy", "Portfolio focus"]),
    meta!("writer", "Writer", "Perfect for authors and writers",
        [Creative, Professional], new: false, premium: false,
        ["Publication links", "Book showcase", "Reader engagement"]),
    meta!("gradient", "Gradient", "Beautiful gradient backgrounds",
        [Colorful, Creative], new: true, premium: false,
        ["Vibrant gradients", "Color transitions", "Modern look"]),
    meta!("neon", "Neon", "Bright neon-inspired design",
        [Colorful, Creative], new: false, premium: false,
        ["Neon effects", "Vibrant colors", "Night mode optimized"]),
    meta!("rainbow", "Rainbow", "Colorful rainbow-themed template",
        [Colorful, Playful], new: false, premium: false,
        ["Multi-color scheme", "Playful design", "Vibrant aesthetic"]),
    meta!("pastel", "Pastel", "Soft pastel color palette",
        [Colorful, Elegant], new: false, premium: false,
        ["Soft colors", "Gentle aesthetic", "Calming design"]),
    meta!("pop-art", "Pop Art", "Bold pop art inspired design",
        [Colorful, Creative], new: false, premium: true,
        ["Bold patterns", "Artistic style", "Eye-catching design"]),
    meta!("dark-mode", "Dark Mode", "Sleek dark-mode design",
        [Dark], new: false, premium: false,
        ["Easy on the eyes", "Modern aesthetic", "OLED friendly"]),
    meta!("midnight", "Midnight", "Deep blue midnight theme",
        [Dark, Elegant], new: false, premium: false,
        ["Night sky palette", "Calm aesthetic", "Subtle contrast"]),
    meta!("hacker", "Hacker", "Terminal-inspired hacker aesthetic",
        [Dark, Creative], new: false, premium: false,
        ["Monospace type", "Terminal green", "Tech aesthetic"]),
    meta!("noir", "Noir", "High-contrast black and white",
        [Dark, Elegant], new: true, premium: false,
        ["High contrast", "Film noir feel", "Dramatic type"]),
    meta!("space", "Space", "Cosmic space-themed design",
        [Dark, Creative], new: false, premium: false,
        ["Starfield backdrop", "Cosmic colors", "Deep space feel"]),
    meta!("serif", "Serif", "Classic serif typography",
        [Elegant], new: false, premium: false,
        ["Serif type", "Editorial feel", "Timeless design"]),
    meta!("luxury", "Luxury", "Gold-accented luxury design",
        [Elegant, Professional], new: false, premium: true,
        ["Gold accents", "Premium feel", "Refined layout"]),
    meta!("terminal", "Terminal", "Command-line inspired layout",
        [Dark, Creative], new: true, premium: false,
        ["Monospace everything", "Prompt styling", "Retro computing"]),
    meta!("glassmorphism", "Glassmorphism", "Frosted glass effect design",
        [Creative, Elegant], new: true, premium: false,
        ["Frosted panels", "Depth and blur", "Modern aesthetic"]),
    meta!("retro", "Retro", "Retro-inspired vintage design",
        [Playful, Creative], new: false, premium: false,
        ["Vintage palette", "Retro type", "Nostalgic feel"]),
];

/// All catalog entries in gallery order.
pub fn all() -> &'static [TemplateMeta] {
    TEMPLATES
}

/// Look up an entry by id.
pub fn find(id: &str) -> Option<&'static TemplateMeta> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Entries carrying the given category tag.
pub fn by_category(category: TemplateCategory) -> impl Iterator<Item = &'static TemplateMeta> {
    TEMPLATES.iter().filter(move |t| t.categories.contains(&category))
}

/// Case-insensitive search over names and descriptions.
pub fn search(query: &str) -> Vec<&'static TemplateMeta> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return TEMPLATES.iter().collect();
    }
    TEMPLATES
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&term) || t.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemplateStrategy;

    #[test]
    fn canonical_ids_are_present() {
        for id in ["classic", "cards", "grid", "minimal", "horizontal"] {
            assert!(find(id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in all() {
            assert!(seen.insert(t.id), "duplicate id {}", t.id);
        }
    }

    #[test]
    fn every_entry_resolves_to_a_strategy() {
        // Cosmetic variants all fall back to classic; the point is that
        // resolution never fails.
        for t in all() {
            let _ = t.template_id().strategy();
        }
        assert_eq!(
            find("minimal-mono").unwrap().template_id().strategy(),
            TemplateStrategy::Classic
        );
    }

    #[test]
    fn category_filter_and_search() {
        assert!(by_category(TemplateCategory::Dark).count() >= 5);
        let hits = search("minimal");
        assert!(hits.iter().any(|t| t.id == "minimal-mono"));
        assert_eq!(search("").len(), all().len());
    }
}
