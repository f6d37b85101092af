//! Festivals page.
//!
//! Month calendar, upcoming and past listings, the livestream stage,
//! and the butter lamp ritual.

use std::collections::HashSet;

use chrono::NaiveDate;
use dioxus::prelude::*;
use gompa_core::{CalendarMonth, Festival};
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant, IconButton, Section, SectionTabs};

use crate::components::cards::FestivalCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_catalog, use_reminders};

#[derive(Clone, Copy, PartialEq)]
enum FestivalSection {
    Calendar,
    Upcoming,
    Livestream,
    Participate,
}

impl Section for FestivalSection {
    const ALL: &'static [Self] = &[
        FestivalSection::Calendar,
        FestivalSection::Upcoming,
        FestivalSection::Livestream,
        FestivalSection::Participate,
    ];

    fn label(&self) -> &'static str {
        match self {
            FestivalSection::Calendar => "Calendar",
            FestivalSection::Upcoming => "Festivals",
            FestivalSection::Livestream => "Live Darshan",
            FestivalSection::Participate => "Participate",
        }
    }
}

#[component]
pub fn Festivals() -> Element {
    let mut section = use_signal(|| FestivalSection::Calendar);

    rsx! {
        NavHeader { current: NavLocation::Festivals }

        main { class: "page",
            h1 { class: "page-title", "Sacred Festivals" }
            p { class: "page-intro",
                "The ritual year of Sikkim's monasteries: masked cham dances, butter \
                 lamps, and mountain ceremonies."
            }

            SectionTabs::<FestivalSection> {
                selected: section(),
                on_select: move |s| section.set(s),
            }

            {match section() {
                FestivalSection::Calendar => rsx! { CalendarSection {} },
                FestivalSection::Upcoming => rsx! { ListingsSection {} },
                FestivalSection::Livestream => rsx! { LivestreamSection {} },
                FestivalSection::Participate => rsx! { ParticipateSection {} },
            }}
        }
    }
}

#[component]
fn CalendarSection() -> Element {
    let catalog = use_catalog();
    // One signal read per render; the grid loop below checks every cell
    let catalog = catalog();

    // Open on the month of the next upcoming festival rather than today,
    // so the grid is never empty on first view.
    let initial = catalog
        .upcoming_festivals()
        .first()
        .map(|f| f.date)
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut month = use_signal(move || CalendarMonth::containing(initial));
    let mut selected: Signal<Option<NaiveDate>> = use_signal(|| None);

    let weeks = month().weeks();
    let festival_days: HashSet<NaiveDate> =
        catalog.festivals().iter().map(|f| f.date).collect();
    let selected_festivals: Vec<Festival> = selected()
        .map(|date| catalog.festivals_on(date).into_iter().cloned().collect())
        .unwrap_or_default();

    rsx! {
        div { class: "calendar-layout",
            div { class: "detail-panel",
                div { class: "calendar-head",
                    IconButton {
                        aria_label: "Previous month".to_string(),
                        onclick: move |_| {
                            let prev = month().prev();
                            month.set(prev);
                            selected.set(None);
                        },
                        "‹"
                    }
                    h3 { "{month().label()}" }
                    IconButton {
                        aria_label: "Next month".to_string(),
                        onclick: move |_| {
                            let next = month().next();
                            month.set(next);
                            selected.set(None);
                        },
                        "›"
                    }
                }

                div { class: "calendar-grid",
                    for label in CalendarMonth::weekday_labels() {
                        div { class: "calendar-weekday", "{label}" }
                    }
                    for week in weeks.iter() {
                        for cell in week.iter() {
                            if let Some(date) = *cell {
                                button {
                                    r#type: "button",
                                    class: day_class(
                                        selected() == Some(date),
                                        festival_days.contains(&date),
                                    ),
                                    onclick: move |_| selected.set(Some(date)),
                                    "{date.day()}"
                                }
                            } else {
                                div { class: "calendar-day blank" }
                            }
                        }
                    }
                }
            }

            div { class: "detail-panel",
                if selected_festivals.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-emblem", "🗓️" }
                        p {
                            if selected().is_some() {
                                "No festivals on this day. Saffron dots mark festival days."
                            } else {
                                "Select a day to see its festivals. Saffron dots mark festival days."
                            }
                        }
                    }
                } else {
                    for festival in selected_festivals.iter() {
                        div { key: "{festival.id}",
                            div { class: "festival-identity",
                                span { class: "festival-emblem", "{festival.emblem}" }
                                div {
                                    h3 { "{festival.name}" }
                                    div { class: "festival-date", "{festival.date_label()}" }
                                    div { class: "card-meta", "📍 {festival.monastery}" }
                                }
                            }
                            p { class: "card-text", "{festival.description}" }
                            if festival.has_livestream {
                                Badge { variant: BadgeVariant::Accent, "📡 Livestream planned" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListingsSection() -> Element {
    let catalog = use_catalog();

    let upcoming: Vec<Festival> = catalog().upcoming_festivals().into_iter().cloned().collect();
    let past: Vec<Festival> = catalog().past_festivals().into_iter().cloned().collect();

    rsx! {
        h2 { class: "page-title", "Upcoming" }
        for festival in upcoming.iter() {
            FestivalCard { key: "{festival.id}", festival: festival.clone() }
        }

        if !past.is_empty() {
            h2 { class: "page-title", "Recently Celebrated" }
            for festival in past.iter() {
                FestivalCard { key: "{festival.id}", festival: festival.clone() }
            }
        }
    }
}

#[component]
fn LivestreamSection() -> Element {
    let catalog = use_catalog();
    let catalog = catalog();

    let next = catalog.next_livestream().cloned();
    let streams: Vec<Festival> = catalog
        .upcoming_livestreams()
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "detail-panel",
            h3 { "📡 Live Darshan" }
            p { class: "card-meta",
                "Join ceremonies from anywhere. Streams go live on festival mornings."
            }

            if let Some(festival) = next {
                div { class: "stream-stage",
                    div {
                        div { class: "stage-emblem", "{festival.emblem}" }
                        h3 { "{festival.name}" }
                        p { class: "stage-next",
                            "Next stream: {festival.date_label()} from {festival.monastery}"
                        }
                    }
                }
                div { class: "festival-actions",
                    Button { variant: ButtonVariant::Primary, disabled: true, "Stream offline" }
                    Badge { variant: BadgeVariant::Secondary, "🔔 Streams begin at 6:00 AM IST" }
                }
            } else {
                div { class: "empty-state",
                    div { class: "empty-emblem", "📡" }
                    p { "No livestreams are scheduled right now." }
                }
            }
        }

        if !streams.is_empty() {
            h2 { class: "page-title", "Scheduled Streams" }
            div { class: "card-grid card-grid--two",
                for festival in streams.iter() {
                    StreamReminderCard { key: "{festival.id}", festival: festival.clone() }
                }
            }
        }
    }
}

/// One card per livestream-capable upcoming festival, with the same
/// reminder wiring as the listings.
#[component]
fn StreamReminderCard(festival: Festival) -> Element {
    let mut reminders = use_reminders();

    let festival_id = festival.id.clone();
    let reminder_set = reminders().contains(&festival_id);

    let on_remind = move |_: ()| {
        reminders.write().set(&festival_id);
        tracing::info!(festival = %festival_id, "Stream reminder set");
    };

    rsx! {
        div { class: "catalog-card",
            div { class: "card-body",
                div { class: "festival-identity",
                    span { class: "festival-emblem", "{festival.emblem}" }
                    div {
                        h3 { class: "card-title", "{festival.name}" }
                        div { class: "festival-date", "📅 {festival.date_label()}" }
                        div { class: "card-meta", "📍 {festival.monastery}" }
                    }
                }
                div { class: "card-footer",
                    Badge { variant: BadgeVariant::Accent, "📡 Livestream" }
                    Button {
                        variant: if reminder_set { ButtonVariant::Outline } else { ButtonVariant::Primary },
                        disabled: reminder_set,
                        onclick: on_remind,
                        if reminder_set { "✓ Reminder Set" } else { "🔔 Set Stream Reminder" }
                    }
                }
            }
        }
    }
}

#[component]
fn ParticipateSection() -> Element {
    let mut lit = use_signal(|| false);

    let on_light = move |_: ()| {
        if lit() {
            return;
        }
        lit.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            lit.set(false);
        });
    };

    rsx! {
        div { class: "detail-panel",
            h3 { "Light a Virtual Butter Lamp" }
            div { class: "lamp-area",
                div { class: "lamp-emblem", {lamp_emblem(lit())} }
                if lit() {
                    div { class: "lamp-glow", "Your lamp is burning. May its light carry your prayer." }
                }
                Button {
                    variant: ButtonVariant::Sacred,
                    disabled: lit(),
                    onclick: on_light,
                    if lit() { "Burning..." } else { "Light a Lamp" }
                }
            }
        }

        div { class: "intention-panel",
            h3 { "Offer an Intention" }
            p { class: "card-meta",
                "Dedicate your visit to an intention. Monks include them in the morning prayers."
            }
            div { class: "intention-grid",
                div { class: "intention", "🕊️ Peace" }
                div { class: "intention", "💝 Compassion" }
                div { class: "intention", "📿 Wisdom" }
                div { class: "intention", "🌿 Healing" }
            }
        }
    }
}

/// CSS class for a day cell.
fn day_class(is_selected: bool, has_festival: bool) -> &'static str {
    match (is_selected, has_festival) {
        (true, true) => "calendar-day selected festival",
        (true, false) => "calendar-day selected",
        (false, true) => "calendar-day festival",
        (false, false) => "calendar-day",
    }
}

fn lamp_emblem(lit: bool) -> &'static str {
    if lit {
        "🔥"
    } else {
        "🪔"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_class_combinations() {
        assert_eq!(day_class(false, false), "calendar-day");
        assert_eq!(day_class(true, false), "calendar-day selected");
        assert_eq!(day_class(false, true), "calendar-day festival");
        assert_eq!(day_class(true, true), "calendar-day selected festival");
    }

    #[test]
    fn lamp_emblem_tracks_state() {
        assert_eq!(lamp_emblem(false), "🪔");
        assert_eq!(lamp_emblem(true), "🔥");
    }
}
