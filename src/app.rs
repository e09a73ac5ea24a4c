use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedStore, StoreRevision};
use crate::pages::{
    Appearance, Dashboard, Landing, Links, Login, Preview, ProfileSettings, Register, Socials,
    Templates,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/auth/*` - Login and registration
/// - `/admin/*` - Management screens (session required)
/// - `/preview/:username` - Public profile view
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/admin")]
    Dashboard {},
    #[route("/admin/links")]
    Links {},
    #[route("/admin/socials")]
    Socials {},
    #[route("/admin/appearance")]
    Appearance {},
    #[route("/admin/templates")]
    Templates {},
    #[route("/admin/profile")]
    ProfileSettings {},
    #[route("/preview/:username")]
    Preview { username: String },
}

/// Root application component.
///
/// Provides global styles, store context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared store state
    let store: Signal<SharedStore> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut store_ready: Signal<bool> = use_signal(|| false);
    let revision: Signal<u64> = use_signal(|| 0);

    // Provide store context to all child components
    use_context_provider(|| store);
    use_context_provider(|| store_ready);
    use_context_provider(|| StoreRevision(revision));

    // Initialize store on mount
    use_effect(move || {
        spawn(async move {
            let path = get_data_dir().join("bundle.redb");
            match linkforest_core::ProfileStore::open(
                &path,
                Box::new(linkforest_core::FixtureCredentials),
            ) {
                Ok(s) => {
                    let shared = store();
                    let mut guard = shared.write().await;
                    *guard = Some(s);
                    drop(guard);
                    store_ready.set(true);
                    tracing::info!("ProfileStore initialized at {:?}", path);
                }
                Err(e) => {
                    tracing::error!("Failed to initialize ProfileStore: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
