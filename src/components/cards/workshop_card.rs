//! Community grid card for a cultural workshop.

use dioxus::prelude::*;
use gompa_core::Workshop;
use gompa_ui::{Button, ButtonVariant};

#[component]
pub fn WorkshopCard(workshop: Workshop) -> Element {
    let name = workshop.name.clone();

    let on_join = move |_: ()| {
        tracing::info!(workshop = %name, "Workshop signup requested");
    };

    rsx! {
        div { class: "catalog-card",
            div { class: "card-body",
                div { class: "card-emblem", "{workshop.emblem}" }
                h3 { class: "card-title", "{workshop.name}" }
                div { class: "card-meta", "with {workshop.instructor}" }
                p { class: "card-text", "{workshop.description}" }
                div { class: "card-facts",
                    span { "🕐 {workshop.duration}" }
                    span { "👥 Max {workshop.max_participants}" }
                }
                div { class: "card-footer",
                    span { class: "card-price", "{workshop.price_label()}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: on_join,
                        "Join Workshop"
                    }
                }
            }
        }
    }
}
