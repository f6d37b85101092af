//! Landing page.
//!
//! Hero with the prayer wheel ritual, prayer flags, and feature cards
//! into the three main sections.

use dioxus::prelude::*;
use gompa_core::BlessingWheel;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let mut wheel = use_signal(BlessingWheel::new);
    let mut spinning = use_signal(|| false);
    let mut blessing: Signal<Option<&'static str>> = use_signal(|| None);

    let on_spin = move |_| {
        if spinning() {
            return;
        }
        spinning.set(true);
        blessing.set(None);

        let text = wheel.write().spin();
        spawn(async move {
            // Let the wheel finish its turn before revealing the blessing.
            tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
            blessing.set(Some(text));
            spinning.set(false);

            tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
            navigator.push(Route::Explore {});
        });
    };

    rsx! {
        NavHeader { current: NavLocation::Home }

        section { class: "hero",
            div { class: "prayer-flags",
                div { class: "prayer-flag prayer-flag--blue" }
                div { class: "prayer-flag prayer-flag--white" }
                div { class: "prayer-flag prayer-flag--red" }
                div { class: "prayer-flag prayer-flag--green" }
                div { class: "prayer-flag prayer-flag--yellow" }
            }

            div { class: "hero-content",
                h1 { class: "hero-title", "Monasteries of Sikkim" }
                p { class: "hero-tagline",
                    "Journey through sacred Himalayan heritage, living traditions, and mountain communities"
                }

                div { class: "prayer-wheel-area",
                    if let Some(text) = blessing() {
                        div { class: "blessing-bubble", "{text}" }
                    }
                    button {
                        r#type: "button",
                        class: if spinning() { "prayer-wheel spinning" } else { "prayer-wheel" },
                        disabled: spinning(),
                        onclick: on_spin,
                        "aria-label": "Spin the prayer wheel",
                        "☸️"
                    }
                    p { class: "prayer-wheel-hint", "Spin the prayer wheel to begin your journey" }
                }
            }
        }

        section { class: "feature-section",
            h2 { class: "feature-heading", "Begin Your Pilgrimage" }
            div { class: "feature-grid",
                div {
                    class: "feature-card",
                    onclick: move |_| { navigator.push(Route::Explore {}); },
                    div { class: "feature-emblem", "🏯" }
                    h3 { "Explore Monasteries" }
                    p { "Wander the great gompas of Sikkim, from Rumtek to Pemayangtse, with galleries, histories, and visitor guidance." }
                }
                div {
                    class: "feature-card",
                    onclick: move |_| { navigator.push(Route::Festivals {}); },
                    div { class: "feature-emblem", "🎭" }
                    h3 { "Sacred Festivals" }
                    p { "Follow the festival calendar, set reminders for Losar and Saga Dawa, and join ceremonies by livestream." }
                }
                div {
                    class: "feature-card",
                    onclick: move |_| { navigator.push(Route::Community {}); },
                    div { class: "feature-emblem", "🏡" }
                    h3 { "Community & Stays" }
                    p { "Stay with local families, learn thangka painting and momo making, and book guides who grew up on these trails." }
                }
            }
        }
    }
}
