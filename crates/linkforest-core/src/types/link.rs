//! Outbound link entries.

use serde::{Deserialize, Serialize};

/// A single outbound link on the profile page.
///
/// Ordering of the containing `Vec` is display order. Inactive entries are
/// retained in storage but never appear in public rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Unique, generation-order-stable identifier
    pub id: String,

    /// Button label, non-empty
    pub title: String,

    /// Absolute URL; scheme defaulted to `https://` on entry
    pub target_url: String,

    /// Whether the entry appears in public rendering
    pub active: bool,
}

/// Shallow-merge patch for [`LinkEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub target_url: Option<String>,
    pub active: Option<bool>,
}

impl LinkEntry {
    pub fn apply(&mut self, patch: LinkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(target_url) = patch.target_url {
            self.target_url = target_url;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }
}
