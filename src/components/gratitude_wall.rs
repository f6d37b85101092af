//! Gratitude wall panel.
//!
//! Compose box plus the note list, newest first. Notes are posted as
//! "Anonymous Visitor" and live only for this session.

use chrono::Utc;
use dioxus::prelude::*;
use gompa_ui::{Badge, BadgeVariant, Button, ButtonVariant, TextAreaField};

use crate::context::use_wall;

#[component]
pub fn GratitudeWallPanel() -> Element {
    let mut wall = use_wall();
    let mut draft = use_signal(String::new);

    let draft_blank = draft().trim().is_empty();

    let on_post = move |_: ()| {
        let message = draft();
        if let Some(id) = wall.write().post("Anonymous Visitor", &message) {
            tracing::info!(note = id, "Posted gratitude note");
            draft.set(String::new());
        }
    };

    let now = Utc::now();
    let notes = wall().notes().to_vec();

    rsx! {
        div { class: "detail-panel",
            h3 { "🙏 Gratitude Wall" }
            p { class: "card-meta",
                "Share a moment of peace, a kindness received, or a memory from your visit."
            }

            div { class: "wall-compose",
                TextAreaField {
                    label: "Your note".to_string(),
                    value: draft(),
                    on_input: move |value| draft.set(value),
                    placeholder: "What are you grateful for today?".to_string(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: draft_blank,
                    onclick: on_post,
                    "Post to the Wall"
                }
            }

            for note in notes {
                div { class: "wall-note",
                    div { class: "wall-note-head",
                        span { class: "wall-note-author", "{note.author}" }
                        span { class: "wall-note-age", "{note.posted_label(now)}" }
                    }
                    p { class: "card-text", "{note.message}" }

                    for reply in &note.replies {
                        div { class: "wall-reply",
                            div { class: "wall-reply-head",
                                span { "{reply.author}" }
                                if let Some(role) = reply.role {
                                    Badge { variant: BadgeVariant::Secondary, "{role.label()}" }
                                }
                            }
                            "{reply.message}"
                        }
                    }
                }
            }
        }
    }
}
