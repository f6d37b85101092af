//! Community page.
//!
//! The co-living marketplace: homestays, workshops, guides with the
//! booking flow, volunteer programs, and the gratitude wall.

use dioxus::prelude::*;
use gompa_core::Guide;
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant, Section, SectionTabs};

use crate::components::cards::{GuideCard, HomestayCard, WorkshopCard};
use crate::components::{BookingDialog, GratitudeWallPanel, NavHeader, NavLocation};
use crate::context::use_catalog;

#[derive(Clone, Copy, PartialEq)]
enum CommunitySection {
    Homestays,
    Workshops,
    Guides,
    Volunteer,
    Wall,
}

impl Section for CommunitySection {
    const ALL: &'static [Self] = &[
        CommunitySection::Homestays,
        CommunitySection::Workshops,
        CommunitySection::Guides,
        CommunitySection::Volunteer,
        CommunitySection::Wall,
    ];

    fn label(&self) -> &'static str {
        match self {
            CommunitySection::Homestays => "Homestays",
            CommunitySection::Workshops => "Workshops",
            CommunitySection::Guides => "Local Guides",
            CommunitySection::Volunteer => "Volunteer",
            CommunitySection::Wall => "Gratitude Wall",
        }
    }
}

#[component]
pub fn Community() -> Element {
    let mut section = use_signal(|| CommunitySection::Homestays);

    rsx! {
        NavHeader { current: NavLocation::Community }

        main { class: "page",
            h1 { class: "page-title", "Community & Stays" }
            p { class: "page-intro",
                "Live with local families, learn traditional crafts, and travel with \
                 guides who grew up beside these monasteries. Every booking supports \
                 the villages that keep them alive."
            }

            SectionTabs::<CommunitySection> {
                selected: section(),
                on_select: move |s| section.set(s),
            }

            {match section() {
                CommunitySection::Homestays => rsx! { HomestaysSection {} },
                CommunitySection::Workshops => rsx! { WorkshopsSection {} },
                CommunitySection::Guides => rsx! { GuidesSection {} },
                CommunitySection::Volunteer => rsx! { VolunteerSection {} },
                CommunitySection::Wall => rsx! { GratitudeWallPanel {} },
            }}
        }
    }
}

#[component]
fn HomestaysSection() -> Element {
    let catalog = use_catalog();
    let homestays = catalog().homestays().to_vec();

    rsx! {
        div { class: "card-grid card-grid--two",
            for homestay in homestays.iter() {
                HomestayCard { key: "{homestay.id}", homestay: homestay.clone() }
            }
        }
    }
}

#[component]
fn WorkshopsSection() -> Element {
    let catalog = use_catalog();
    let workshops = catalog().workshops().to_vec();

    rsx! {
        div { class: "card-grid card-grid--three",
            for workshop in workshops.iter() {
                WorkshopCard { key: "{workshop.id}", workshop: workshop.clone() }
            }
        }
    }
}

#[component]
fn GuidesSection() -> Element {
    let catalog = use_catalog();
    let mut booking: Signal<Option<Guide>> = use_signal(|| None);

    let guides = catalog().guides().to_vec();

    rsx! {
        div { class: "detail-panel",
            h3 { "Why book a local guide?" }
            div { class: "why-grid",
                div {
                    div { class: "why-emblem", "🏔️" }
                    strong { "Grew up here" }
                    p { class: "card-meta", "Stories and shortcuts no guidebook carries." }
                }
                div {
                    div { class: "why-emblem", "🗣️" }
                    strong { "Speak the languages" }
                    p { class: "card-meta", "Translation with monks and elders, not just menus." }
                }
                div {
                    div { class: "why-emblem", "🤝" }
                    strong { "Money stays local" }
                    p { class: "card-meta", "Your fee supports a family, not a platform." }
                }
            }
        }

        for guide in guides.iter() {
            GuideCard {
                key: "{guide.id}",
                guide: guide.clone(),
                on_book: move |g| booking.set(Some(g)),
            }
        }

        if let Some(guide) = booking() {
            BookingDialog {
                guide: guide,
                on_close: move |_| booking.set(None),
            }
        }
    }
}

#[component]
fn VolunteerSection() -> Element {
    let catalog = use_catalog();
    let roles = catalog().volunteer_roles().to_vec();

    rsx! {
        div { class: "card-grid card-grid--two",
            for role in roles {
                div { key: "{role.id}", class: "catalog-card",
                    div { class: "card-body",
                        div { class: "card-emblem", "{role.emblem}" }
                        h3 { class: "card-title", "{role.title}" }
                        p { class: "card-text", "{role.summary}" }
                        div { class: "volunteer-facts",
                            span { "📅 {role.schedule}" }
                            span { "🕐 {role.hours}" }
                            span { "👥 {role.capacity}" }
                        }
                        div { class: "card-footer",
                            Badge { variant: BadgeVariant::Secondary, "No experience needed" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let title = role.title.clone();
                                    move |_| tracing::info!(role = %title, "Volunteer interest registered")
                                },
                                "I'm Interested"
                            }
                        }
                    }
                }
            }
        }
    }
}
