//! Template selection and the structural layout strategies behind it.

use serde::{Deserialize, Serialize};

/// Identifier of the selected template.
///
/// This is an open string: the store accepts any value, and unknown ids
/// resolve to the classic strategy only at render time. The extended
/// template catalog (see [`crate::templates`]) is cosmetic metadata layered
/// over the five structural strategies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

/// The structural layout strategies a template id can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStrategy {
    /// Traditional vertical list of links
    #[default]
    Classic,
    /// Card rows with a leading icon inferred from the link URL
    Cards,
    /// Two-column grid of link tiles
    Grid,
    /// Transparent rows with a trailing chevron
    Minimal,
    /// Full-width rows with a trailing arrow
    Horizontal,
}

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve this id to a layout strategy. Unknown ids fall back to
    /// [`TemplateStrategy::Classic`].
    pub fn strategy(&self) -> TemplateStrategy {
        match self.0.as_str() {
            "cards" => TemplateStrategy::Cards,
            "grid" => TemplateStrategy::Grid,
            "minimal" => TemplateStrategy::Minimal,
            "horizontal" => TemplateStrategy::Horizontal,
            _ => TemplateStrategy::Classic,
        }
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self("classic".to_string())
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(TemplateId::from("cards").strategy(), TemplateStrategy::Cards);
        assert_eq!(
            TemplateId::from("horizontal").strategy(),
            TemplateStrategy::Horizontal
        );
    }

    #[test]
    fn unknown_id_falls_back_to_classic() {
        assert_eq!(
            TemplateId::from("nonexistent").strategy(),
            TemplateStrategy::Classic
        );
        assert_eq!(TemplateId::default().strategy(), TemplateStrategy::Classic);
    }
}
