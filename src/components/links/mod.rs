//! Link management components.

mod link_editor;
mod link_list;

pub use link_editor::{LinkDraft, LinkEditor};
pub use link_list::LinkList;
