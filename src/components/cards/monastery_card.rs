//! Explorer grid card for a monastery.

use dioxus::prelude::*;
use gompa_core::Monastery;
use gompa_ui::{Badge, BadgeVariant};

use crate::app::Route;

#[component]
pub fn MonasteryCard(monastery: Monastery) -> Element {
    let lead_image = monastery.images.first().cloned().unwrap_or_default();

    rsx! {
        div { class: "catalog-card",
            div { class: "card-media",
                img { src: "{lead_image}", alt: "{monastery.name}" }
                Badge { variant: BadgeVariant::Accent, "⭐ {monastery.rating}" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{monastery.name}" }
                div { class: "card-meta", "📍 {monastery.location}" }
                div { class: "card-tags",
                    Badge { variant: BadgeVariant::Outline, "{monastery.tradition}" }
                    Badge { variant: BadgeVariant::Outline, "Est. {monastery.established}" }
                }
                p { class: "card-text", "{monastery.description}" }
                div { class: "card-facts",
                    span { "🕐 {monastery.visit_duration}" }
                    span { "👥 {monastery.annual_visitors}+ visitors/year" }
                }
                Link {
                    to: Route::MonasteryDetail { id: monastery.id.clone() },
                    class: "btn-primary btn-block",
                    "Explore"
                }
            }
        }
    }
}
