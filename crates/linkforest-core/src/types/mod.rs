//! Core data types for LinkForest.
//!
//! Everything that makes up a [`ProfileBundle`]: the user's identity, the
//! ordered link and social collections, theme settings, and the selected
//! template. All types serialize to plain JSON and round-trip losslessly.

mod bundle;
mod link;
mod social;
mod template;
mod theme;
mod user;

pub use bundle::ProfileBundle;
pub use link::{LinkEntry, LinkPatch};
pub use social::{SocialAccountEntry, SocialPatch, SocialPlatform};
pub use template::{TemplateId, TemplateStrategy};
pub use theme::{BackgroundMode, ButtonStyle, SocialIconStyle, ThemePatch, ThemeSettings};
pub use user::{UserPatch, UserProfile};
