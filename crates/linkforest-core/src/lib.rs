//! LinkForest Core Library
//!
//! Domain layer for the LinkForest link-in-bio builder: the profile store
//! and its persistence, theme resolution, the social platform catalog, and
//! the template renderer.
//!
//! ## Overview
//!
//! The whole application is CRUD over a single [`ProfileBundle`] owned by
//! the [`ProfileStore`]. Mutations persist the bundle to a single storage
//! slot; rendering is a pure transform from the bundle to a
//! [`render::RenderedProfile`] that the UI layer draws.
//!
//! ## Quick Start
//!
//! ```ignore
//! use linkforest_core::{FixtureCredentials, ProfileStore, TemplateId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = ProfileStore::open(
//!         "~/.linkforest/bundle.redb",
//!         Box::new(FixtureCredentials),
//!     )?;
//!
//!     store.authenticate("demo@example.com", "password123").await;
//!     store.add_link("My Blog", "blog.example.com", true);
//!
//!     let view = linkforest_core::render::render(
//!         &TemplateId::from("cards"),
//!         store.bundle(),
//!     );
//!     println!("{} links rendered", view.links.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod error;
pub mod render;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod templates;
pub mod types;

// Re-exports
pub use auth::{CredentialVerifier, FixtureCredentials, VerifiedIdentity};
pub use error::LinkForestError;
pub use render::{render, RenderedProfile};
pub use resolver::{resolve_background, resolve_button, resolve_social_icon_paint};
pub use storage::BundleStorage;
pub use store::ProfileStore;
pub use types::{
    LinkEntry, LinkPatch, ProfileBundle, SocialAccountEntry, SocialPatch, SocialPlatform,
    TemplateId, TemplateStrategy, ThemePatch, ThemeSettings, UserPatch, UserProfile,
};
