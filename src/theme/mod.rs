//! Admin shell theme: palette constants and global stylesheet.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
