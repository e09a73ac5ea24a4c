//! UI Components for LinkForest.

pub mod links;
mod nav_header;
pub mod preview;
mod session_guard;
pub mod socials;
pub mod templates;

pub use nav_header::{NavHeader, NavLocation};
pub use session_guard::{RedirectIfSession, RequireSession};
