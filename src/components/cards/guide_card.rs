//! Guide card with the booking entry point.

use dioxus::prelude::*;
use gompa_core::Guide;
use gompa_ui::{AvailabilityBadge, Badge, BadgeVariant, Button, ButtonVariant};

#[component]
pub fn GuideCard(guide: Guide, on_book: EventHandler<Guide>) -> Element {
    let bookable = guide.availability.is_available();
    let booked_guide = guide.clone();
    let languages = guide.languages.join(", ");

    rsx! {
        div { class: "catalog-card guide-card",
            div { class: "guide-portrait", "🧭" }
            div { class: "guide-info",
                div { class: "guide-top",
                    div {
                        h3 { class: "card-title", "{guide.name}" }
                        div { class: "guide-stats",
                            "⭐ {guide.rating} ({guide.review_count} reviews) · {guide.experience_label()}"
                        }
                    }
                    AvailabilityBadge { availability: guide.availability.clone() }
                }

                p { class: "card-text", "{guide.description}" }

                div { class: "tag-row",
                    span { "🗣️" }
                    "{languages}"
                }
                div { class: "card-tags",
                    for specialty in guide.specialties.iter() {
                        Badge { variant: BadgeVariant::Outline, "{specialty}" }
                    }
                }

                div { class: "card-footer",
                    span { class: "card-price", "{guide.price_label()}" }
                    div { class: "festival-actions",
                        a {
                            class: "btn-outline",
                            href: "tel:{guide.phone}",
                            "📞 Call"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !bookable,
                            onclick: move |_| on_book.call(booked_guide.clone()),
                            "Book Guide"
                        }
                    }
                }
            }
        }
    }
}
