//! Color constants for the admin shell.
//!
//! Emerald-on-paper palette. These style the management screens only;
//! the rendered profile page takes its colors from the user's theme
//! settings instead.

#![allow(dead_code)]

// === SURFACES ===
pub const PAPER: &str = "#fafaf9";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e7e5e4";

// === EMERALD (Brand, Actions) ===
pub const EMERALD: &str = "#16a34a";
pub const EMERALD_DARK: &str = "#15803d";
pub const EMERALD_SOFT: &str = "rgba(22, 163, 74, 0.1)";

// === TEXT ===
pub const INK: &str = "#1c1917";
pub const INK_SECONDARY: &str = "#57534e";
pub const INK_MUTED: &str = "#a8a29e";

// === SEMANTIC ===
pub const DANGER: &str = "#dc2626";
pub const WARNING: &str = "#d97706";
pub const ACCENT_PURPLE: &str = "#7c3aed";
