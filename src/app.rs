use dioxus::prelude::*;
use gompa_core::{Catalog, GratitudeWall, ReminderSet, Session};

use crate::pages::{Community, Explore, Festivals, Landing, MonasteryDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the prayer wheel
/// - `/explore` - Monastery explorer with search
/// - `/monasteries/:id` - Detail page for one monastery
/// - `/festivals` - Festival calendar and listings
/// - `/community` - Homestays, workshops, guides, and the wall
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/explore")]
    Explore {},
    #[route("/monasteries/:id")]
    MonasteryDetail { id: String },
    #[route("/festivals")]
    Festivals {},
    #[route("/community")]
    Community {},
}

/// Root application component.
///
/// Provides global styles, the shared context (catalog, session, wall,
/// reminders), and routing. Everything in context resets on relaunch;
/// nothing is persisted.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(Catalog::builtin);
    let session: Signal<Session> = use_signal(crate::initial_session);
    let wall: Signal<GratitudeWall> = use_signal(GratitudeWall::seeded);
    let reminders: Signal<ReminderSet> = use_signal(ReminderSet::new);

    use_context_provider(|| catalog);
    use_context_provider(|| session);
    use_context_provider(|| wall);
    use_context_provider(|| reminders);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
