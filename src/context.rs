//! Store context for LinkForest.
//!
//! Provides the ProfileStore instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page or component
//! let store = use_store();
//! let revision = use_revision();
//!
//! spawn(async move {
//!     let shared = store();
//!     let mut guard = shared.write().await;
//!     if let Some(ref mut s) = *guard {
//!         s.add_link("Blog", "blog.example.com", true);
//!     }
//! });
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use linkforest_core::ProfileStore;
use tokio::sync::RwLock;

/// Shared store type for context.
///
/// The store is wrapped in Arc<RwLock<>> so components can read snapshots
/// concurrently and mutate through a single writer.
pub type SharedStore = Arc<RwLock<Option<ProfileStore>>>;

/// Revision counter bumped after every mutation; pages watch it to re-read
/// their bundle snapshot.
#[derive(Clone, Copy, PartialEq)]
pub struct StoreRevision(pub Signal<u64>);

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the ProfileStore from context.
pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Hook to check whether the store finished initializing.
pub fn use_store_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the mutation revision counter.
pub fn use_revision() -> Signal<u64> {
    use_context::<StoreRevision>().0
}

/// Bump the revision counter so watchers re-read their snapshots.
pub fn bump_revision(revision: &mut Signal<u64>) {
    let next = revision() + 1;
    revision.set(next);
}
