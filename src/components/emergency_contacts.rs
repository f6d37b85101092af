//! Emergency contacts modal.
//!
//! Lists the important numbers for visitors in Sikkim and lets them
//! copy a number to the clipboard.

use dioxus::prelude::*;
use gompa_ui::{Button, ButtonVariant, Modal};

use crate::context::use_catalog;

#[component]
pub fn EmergencyContactsModal(on_close: EventHandler<()>) -> Element {
    let catalog = use_catalog();
    let mut copied: Signal<Option<String>> = use_signal(|| None);

    let contacts = catalog().emergency_contacts().to_vec();

    rsx! {
        Modal {
            title: "Emergency Contacts".to_string(),
            on_close: move |_| on_close.call(()),

            for contact in contacts {
                div { class: "contact-row",
                    div {
                        div { "{contact.label}" }
                        div { class: "contact-note", "{contact.note}" }
                    }
                    div {
                        span { class: "contact-number", "{contact.number}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: {
                                let number = contact.number.clone();
                                move |_| copy_number(number.clone(), copied)
                            },
                            if copied().as_deref() == Some(contact.number.as_str()) {
                                "✓ Copied"
                            } else {
                                "Copy"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Copy a number to the system clipboard and show "Copied" for 2 seconds.
fn copy_number(number: String, mut copied: Signal<Option<String>>) {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(number.clone())) {
        Ok(()) => {
            copied.set(Some(number));
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                copied.set(None);
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to copy contact number");
        }
    }
}
