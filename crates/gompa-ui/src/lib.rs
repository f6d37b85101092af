//! Monastery Experience Platform - UI primitives
//!
//! Reusable Dioxus components shared by every page: buttons, badges,
//! section tabs, the modal shell, and labeled form fields.
//!
//! ## Design language
//!
//! The app renders a warm Himalayan palette:
//! - **Maroon (#7b2d26)**: headings, the brand, active state
//! - **Saffron (#e0941b)**: accents, ratings, sacred affordances
//! - **Parchment (#faf6ee)**: page background
//!
//! Components carry CSS class names only; the styles themselves live in
//! the desktop binary's global stylesheet.

pub mod components;

pub use components::*;
