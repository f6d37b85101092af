//! Navigation header.
//!
//! Sticky top bar with the brand mark, route links, the emergency
//! contacts button, and the session area.

use dioxus::prelude::*;
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use crate::app::Route;
use crate::components::EmergencyContactsModal;
use crate::context::use_session;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Explore,
    Festivals,
    Community,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Explore => "Explore",
            NavLocation::Festivals => "Festivals",
            NavLocation::Community => "Community",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Explore => Route::Explore {},
            NavLocation::Festivals => Route::Festivals {},
            NavLocation::Community => Route::Community {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation header component
///
/// - Left: mountain brand mark and app name
/// - Center: route links with the active one highlighted
/// - Right: emergency contacts button and session area
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut session = use_session();
    let mut show_contacts = use_signal(|| false);

    let locations = [
        NavLocation::Home,
        NavLocation::Explore,
        NavLocation::Festivals,
        NavLocation::Community,
    ];

    let on_logout = move |_: ()| {
        let name = session().account().map(|a| a.name.clone());
        session.write().logout();
        if let Some(name) = name {
            tracing::info!(user = %name, "Signed out");
        }
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-brand",
                    span { class: "nav-brand-mark", "🏔️" }
                    span { class: "nav-brand-name", "Sikkim Monasteries" }
                }

                nav { class: "nav-links",
                    for location in &locations {
                        Link {
                            to: location.route(),
                            class: if *location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }

                div { class: "nav-session",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| show_contacts.set(true),
                        "🆘 Emergency"
                    }

                    if let Some(account) = session().account().cloned() {
                        span { class: "nav-welcome", "Welcome, {account.name}" }
                        if session().is_admin() {
                            Badge { variant: BadgeVariant::Accent, "Admin" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: on_logout,
                            "Logout"
                        }
                    }
                }
            }
        }

        if show_contacts() {
            EmergencyContactsModal {
                on_close: move |_| show_contacts.set(false),
            }
        }
    }
}
