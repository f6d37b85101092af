//! Monastery detail page.
//!
//! Gallery, tabbed sections (overview, etiquette, virtual tour,
//! stories), and cross links into festivals and community.

use dioxus::prelude::*;
use gompa_core::Monastery;
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant, Section, SectionTabs};

use crate::app::Route;
use crate::components::cards::FestivalCard;
use crate::components::{ImageGallery, MarkdownText, NavHeader, NavLocation, VideoEmbed};
use crate::context::use_catalog;

#[derive(Clone, Copy, PartialEq)]
enum DetailSection {
    Overview,
    Etiquette,
    VrTour,
    Stories,
}

impl Section for DetailSection {
    const ALL: &'static [Self] = &[
        DetailSection::Overview,
        DetailSection::Etiquette,
        DetailSection::VrTour,
        DetailSection::Stories,
    ];

    fn label(&self) -> &'static str {
        match self {
            DetailSection::Overview => "Overview",
            DetailSection::Etiquette => "Visitor Etiquette",
            DetailSection::VrTour => "Virtual Tour",
            DetailSection::Stories => "Stories",
        }
    }
}

#[component]
pub fn MonasteryDetail(id: String) -> Element {
    let catalog = use_catalog();
    let mut section = use_signal(|| DetailSection::Overview);

    let Some(monastery) = catalog().monastery(&id).cloned() else {
        return rsx! {
            NavHeader { current: NavLocation::Explore }
            main { class: "page",
                div { class: "not-found",
                    h1 { "Monastery not found" }
                    p { class: "page-intro", "Nothing in the catalog answers to \"{id}\"." }
                    Link { to: Route::Explore {}, class: "btn-primary", "Back to Explorer" }
                }
            }
        };
    };

    rsx! {
        NavHeader { current: NavLocation::Explore }

        main { class: "page",
            div { class: "detail-header",
                h1 { class: "page-title", "{monastery.name}" }
                Badge { variant: BadgeVariant::Outline, "{monastery.tradition}" }
                Badge { variant: BadgeVariant::Outline, "Est. {monastery.established}" }
                Badge { variant: BadgeVariant::Accent, "⭐ {monastery.rating}" }
            }
            div { class: "detail-location", "📍 {monastery.location}" }

            ImageGallery {
                images: monastery.images.clone(),
                alt: monastery.name.clone(),
            }

            SectionTabs::<DetailSection> {
                selected: section(),
                on_select: move |s| section.set(s),
            }

            {match section() {
                DetailSection::Overview => rsx! {
                    OverviewSection { monastery: monastery.clone() }
                },
                DetailSection::Etiquette => rsx! {
                    EtiquetteSection { monastery: monastery.clone() }
                },
                DetailSection::VrTour => rsx! {
                    VrTourSection {}
                },
                DetailSection::Stories => rsx! {
                    StoriesSection { monastery: monastery.clone() }
                },
            }}

            FestivalsAtMonastery { monastery_name: monastery.name.clone() }

            div { class: "detail-actions",
                Link { to: Route::Festivals {}, class: "btn-outline", "🎭 Festival Calendar" }
                Link { to: Route::Community {}, class: "btn-outline", "🏡 Stay Nearby" }
            }
        }
    }
}

#[component]
fn OverviewSection(monastery: Monastery) -> Element {
    rsx! {
        div { class: "detail-panel",
            h3 { "History" }
            MarkdownText { content: monastery.history.clone() }
            h3 { "Significance" }
            MarkdownText { content: monastery.significance.clone() }
            div { class: "card-facts",
                span { "🕐 Typical visit: {monastery.visit_duration}" }
                span { "👥 {monastery.annual_visitors}+ visitors each year" }
            }
        }
    }
}

#[component]
fn EtiquetteSection(monastery: Monastery) -> Element {
    rsx! {
        div { class: "detail-panel",
            h3 { "Visitor Etiquette" }

            div { class: "etiquette-group",
                h4 { "👘 Dress Code" }
                ul {
                    for rule in monastery.etiquette.dress.iter() {
                        li {
                            span { class: "etiquette-mark", "✓" }
                            "{rule}"
                        }
                    }
                }
            }
            div { class: "etiquette-group",
                h4 { "🧘 Behavior" }
                ul {
                    for rule in monastery.etiquette.behavior.iter() {
                        li {
                            span { class: "etiquette-mark", "✓" }
                            "{rule}"
                        }
                    }
                }
            }
            div { class: "etiquette-group",
                h4 { "📷 Photography" }
                ul {
                    for rule in monastery.etiquette.photography.iter() {
                        li {
                            span { class: "etiquette-mark etiquette-mark--warn", "!" }
                            "{rule}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VrTourSection() -> Element {
    rsx! {
        div { class: "detail-panel",
            h3 { "360° Virtual Tour" }
            div { class: "vr-placeholder",
                div {
                    div { class: "vr-emblem", "🥽" }
                    p { "The virtual tour is being filmed with the monastery's blessing." }
                    p { class: "card-meta", "Check back after the next festival season." }
                }
            }
        }
    }
}

#[component]
fn StoriesSection(monastery: Monastery) -> Element {
    let mut playing = use_signal(|| false);

    let on_play = move |_: ()| {
        if playing() {
            return;
        }
        playing.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            playing.set(false);
        });
    };

    let story = monastery.audio_story.clone();

    rsx! {
        div { class: "detail-panel",
            h3 { "Elder Stories" }

            div { class: "story-card",
                div { class: "story-narrator",
                    span { class: "story-narrator-mark", "🧘" }
                    div {
                        strong { "{story.narrator}" }
                        div { class: "card-meta", "{story.narrator_title}" }
                    }
                }
                p { class: "card-text", "{story.summary}" }

                if playing() {
                    div { class: "story-chant", "{story.chant}" }
                }

                Button {
                    variant: ButtonVariant::Sacred,
                    disabled: playing(),
                    onclick: on_play,
                    if playing() { "🔊 Playing..." } else { "▶ Listen to the Story" }
                }
            }

            if let Some(video_id) = monastery.video_id.clone() {
                VideoEmbed {
                    video_id: video_id,
                    title: "Inside {monastery.name}",
                }
            }
        }
    }
}

/// Festivals hosted at this monastery, when the catalog lists any.
#[component]
fn FestivalsAtMonastery(monastery_name: String) -> Element {
    let catalog = use_catalog();

    let hosted: Vec<_> = catalog()
        .festivals()
        .iter()
        .filter(|f| f.monastery == monastery_name)
        .cloned()
        .collect();

    if hosted.is_empty() {
        return rsx! {};
    }

    rsx! {
        h2 { class: "page-title", "Festivals Held Here" }
        for festival in hosted.iter() {
            FestivalCard { key: "{festival.id}", festival: festival.clone() }
        }
    }
}
