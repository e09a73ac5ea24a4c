//! Profile preview components.

mod preview_panel;
mod rendered_page;

pub use preview_panel::PreviewPanel;
pub use rendered_page::RenderedPage;
