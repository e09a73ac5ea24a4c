//! Social account management components.

mod platform_icon;
mod social_editor;
mod social_list;

pub use platform_icon::PlatformIcon;
pub use social_editor::{SocialDraft, SocialEditor};
pub use social_list::SocialList;
