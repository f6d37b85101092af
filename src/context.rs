//! Typed context hooks.
//!
//! The root `App` component provides four signals: the read-only
//! catalog, the session, the gratitude wall, and the reminder set.
//! Pages and components reach them through these hooks instead of
//! prop-drilling.

use dioxus::prelude::*;
use gompa_core::{Catalog, GratitudeWall, ReminderSet, Session};

/// The built-in catalog. Read-only; nothing should write through this
/// signal after startup.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Current session. The nav header's logout button is the only writer.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The gratitude wall. Lives in root context so posted notes survive
/// route changes (they still die with the process).
pub fn use_wall() -> Signal<GratitudeWall> {
    use_context::<Signal<GratitudeWall>>()
}

/// Festival reminders set this session.
pub fn use_reminders() -> Signal<ReminderSet> {
    use_context::<Signal<ReminderSet>>()
}
