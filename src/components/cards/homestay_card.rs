//! Community grid card for a homestay.

use dioxus::prelude::*;
use gompa_core::Homestay;
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant};

#[component]
pub fn HomestayCard(homestay: Homestay) -> Element {
    let name = homestay.name.clone();

    let on_contact = move |_: ()| {
        tracing::info!(homestay = %name, "Homestay contact requested");
    };

    rsx! {
        div { class: "catalog-card",
            div { class: "card-media",
                img { src: "{homestay.image}", alt: "{homestay.name}" }
                Badge { variant: BadgeVariant::Accent, "⭐ {homestay.rating}" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{homestay.name}" }
                div { class: "card-meta", "Hosted by {homestay.host}" }
                div { class: "card-meta", "📍 {homestay.location}" }
                p { class: "card-text", "{homestay.description}" }
                div { class: "card-tags",
                    for amenity in homestay.amenities.iter() {
                        Badge { variant: BadgeVariant::Outline, "{amenity}" }
                    }
                }
                div { class: "card-footer",
                    span { class: "card-price", "{homestay.price_label()}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: on_contact,
                        "Contact Host"
                    }
                }
            }
        }
    }
}
