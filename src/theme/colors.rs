//! Color constants for the Himalayan palette.

#![allow(dead_code)]

// === PARCHMENT (Backgrounds) ===
pub const PARCHMENT: &str = "#faf6ee";
pub const PARCHMENT_DARK: &str = "#f1e9da";
pub const PARCHMENT_BORDER: &str = "#e0d6c3";

// === MAROON (Robes, Headings, Primary Actions) ===
pub const MAROON: &str = "#7b2d26";
pub const MAROON_DEEP: &str = "#5e211c";
pub const MAROON_SOFT: &str = "rgba(123, 45, 38, 0.12)";

// === SAFFRON (Sacred, Ratings, Ritual Affordances) ===
pub const SAFFRON: &str = "#e0941b";
pub const SAFFRON_GLOW: &str = "rgba(224, 148, 27, 0.35)";

// === SKY (Links, Livestream, Calm Accents) ===
pub const SKY: &str = "#3f6fa6";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#2b241c";
pub const TEXT_SECONDARY: &str = "rgba(43, 36, 28, 0.72)";
pub const TEXT_MUTED: &str = "rgba(43, 36, 28, 0.5)";

// === SEMANTIC ===
pub const POSITIVE: &str = "#3a7d44";
pub const DANGER: &str = "#b3261e";
pub const NIGHT: &str = "#171310";
