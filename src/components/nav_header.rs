//! Navigation header for the management screens.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{bump_revision, use_revision, use_store};

/// Which management screen is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLocation {
    Dashboard,
    Links,
    Socials,
    Appearance,
    Templates,
    Profile,
}

impl NavLocation {
    fn label(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Overview",
            NavLocation::Links => "Links",
            NavLocation::Socials => "Socials",
            NavLocation::Appearance => "Appearance",
            NavLocation::Templates => "Templates",
            NavLocation::Profile => "Profile",
        }
    }

    fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Links => Route::Links {},
            NavLocation::Socials => Route::Socials {},
            NavLocation::Appearance => Route::Appearance {},
            NavLocation::Templates => Route::Templates {},
            NavLocation::Profile => Route::ProfileSettings {},
        }
    }

    fn all() -> &'static [NavLocation] {
        &[
            NavLocation::Dashboard,
            NavLocation::Links,
            NavLocation::Socials,
            NavLocation::Appearance,
            NavLocation::Templates,
            NavLocation::Profile,
        ]
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    pub current: NavLocation,
}

/// Top navigation bar with section links and logout.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let mut revision = use_revision();

    let logout = move |_| {
        spawn(async move {
            let shared = store();
            let mut guard = shared.write().await;
            if let Some(ref mut s) = *guard {
                s.end_session();
            }
            drop(guard);
            bump_revision(&mut revision);
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-brand", "LinkForest" }
            nav { class: "nav-links",
                for loc in NavLocation::all() {
                    Link {
                        class: if *loc == props.current { "nav-link active" } else { "nav-link" },
                        to: loc.route(),
                        "{loc.label()}"
                    }
                }
            }
            button { class: "btn-ghost", onclick: logout, "Log out" }
        }
    }
}
