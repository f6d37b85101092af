//! Modal Component
//!
//! Overlay dialog shell used by the booking dialog and the emergency
//! contacts list. Clicking the overlay or the close button dismisses;
//! clicks inside the dialog do not propagate out.

use dioxus::prelude::*;

use super::CloseButton;

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Dialog heading
    pub title: String,
    /// Dialog body
    pub children: Element,
    /// Called when the user dismisses the dialog
    pub on_close: EventHandler<()>,
    /// Optional additional CSS class on the dialog box
    #[props(default)]
    pub class: Option<String>,
}

/// Overlay dialog.
///
/// # Example
///
/// ```rust,ignore
/// if show_contacts() {
///     Modal {
///         title: "Emergency Contacts".to_string(),
///         on_close: move |_| show_contacts.set(false),
///         // body...
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let dialog_class = if extra_class.is_empty() {
        "modal-dialog".to_string()
    } else {
        format!("modal-dialog {}", extra_class)
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "{dialog_class}",
                role: "dialog",
                "aria-label": "{props.title}",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| props.on_close.call(()) }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}
