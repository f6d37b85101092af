//! Festival listing row with the reminder affordance.

use dioxus::prelude::*;
use gompa_core::{Festival, FestivalStatus};
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use crate::context::use_reminders;

#[component]
pub fn FestivalCard(festival: Festival) -> Element {
    let mut reminders = use_reminders();

    let festival_id = festival.id.clone();
    let reminder_set = reminders().contains(&festival_id);
    let upcoming = festival.status == FestivalStatus::Upcoming;

    let on_remind = move |_: ()| {
        reminders.write().set(&festival_id);
        tracing::info!(festival = %festival_id, "Reminder set");
    };

    rsx! {
        div { class: "detail-panel",
            div { class: "festival-row",
                div { class: "festival-identity",
                    span { class: "festival-emblem", "{festival.emblem}" }
                    div {
                        h3 { "{festival.name}" }
                        div { class: "festival-date", "📅 {festival.date_label()}" }
                        div { class: "card-meta", "📍 {festival.monastery}" }
                    }
                }
                div { class: "card-tags",
                    if upcoming {
                        Badge { variant: BadgeVariant::Positive, "{festival.status.label()}" }
                    } else {
                        Badge { variant: BadgeVariant::Secondary, "{festival.status.label()}" }
                    }
                    if festival.has_livestream {
                        Badge { variant: BadgeVariant::Accent, "📡 Livestream" }
                    }
                }
            }
            p { class: "card-text", "{festival.description}" }
            if upcoming {
                div { class: "festival-actions",
                    Button {
                        variant: if reminder_set { ButtonVariant::Outline } else { ButtonVariant::Primary },
                        disabled: reminder_set,
                        onclick: on_remind,
                        if reminder_set { "✓ Reminder Set" } else { "🔔 Set Reminder" }
                    }
                }
            }
        }
    }
}
