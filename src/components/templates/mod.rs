//! Template gallery components.

mod template_gallery;

pub use template_gallery::TemplateGallery;
