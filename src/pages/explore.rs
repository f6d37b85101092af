//! Monastery explorer.
//!
//! Search over the catalog plus a grid/map view toggle. The map is a
//! placeholder listing pins; there is no real map engine behind it.

use dioxus::prelude::*;
use gompa_ui::{Button, ButtonVariant};

use crate::components::cards::MonasteryCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_catalog;

#[derive(Clone, Copy, PartialEq)]
enum ExploreView {
    Grid,
    Map,
}

#[component]
pub fn Explore() -> Element {
    let catalog = use_catalog();

    let mut query = use_signal(String::new);
    let mut view = use_signal(|| ExploreView::Grid);

    let results: Vec<_> = catalog()
        .search_monasteries(&query())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        NavHeader { current: NavLocation::Explore }

        main { class: "page",
            h1 { class: "page-title", "Explore Monasteries" }
            p { class: "page-intro",
                "Search the sacred gompas of Sikkim by name, location, or tradition."
            }

            div { class: "explore-controls",
                input {
                    class: "form-input explore-search",
                    r#type: "search",
                    placeholder: "Search monasteries...",
                    value: "{query()}",
                    oninput: move |e| query.set(e.value()),
                }
                div { class: "view-toggle",
                    Button {
                        variant: if view() == ExploreView::Grid { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                        onclick: move |_| view.set(ExploreView::Grid),
                        "Grid"
                    }
                    Button {
                        variant: if view() == ExploreView::Map { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                        onclick: move |_| view.set(ExploreView::Map),
                        "Map"
                    }
                }
            }

            {match view() {
                ExploreView::Grid => rsx! {
                    if results.is_empty() {
                        div { class: "empty-state",
                            div { class: "empty-emblem", "🔍" }
                            p { "No monasteries match your search." }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| query.set(String::new()),
                                "Clear search"
                            }
                        }
                    } else {
                        div { class: "card-grid card-grid--three",
                            for monastery in results.iter() {
                                MonasteryCard { key: "{monastery.id}", monastery: monastery.clone() }
                            }
                        }
                    }
                },
                ExploreView::Map => rsx! {
                    div { class: "map-placeholder",
                        h3 { "🗺️ Interactive map coming soon" }
                        p { "For now, here is where each monastery sits:" }
                        div { class: "map-pins",
                            for monastery in results.iter() {
                                span { key: "{monastery.id}", "📍 {monastery.name} - {monastery.location}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
