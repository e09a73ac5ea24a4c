//! Page components for LinkForest.

mod appearance;
mod dashboard;
mod landing;
mod links;
mod login;
mod preview;
mod profile_settings;
mod register;
mod socials;
mod templates;

pub use appearance::Appearance;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use links::Links;
pub use login::Login;
pub use preview::Preview;
pub use profile_settings::ProfileSettings;
pub use register::Register;
pub use socials::Socials;
pub use templates::Templates;
