//! Guide booking dialog.
//!
//! Collects contact details and tour preferences, validates against
//! the catalog, and logs the resulting request. Nothing leaves the
//! machine; the guide is said to call back within 24 hours.

use dioxus::prelude::*;
use gompa_core::{BookingForm, GroupSize, Guide, TourDuration};
use gompa_ui::{
    Button, ButtonVariant, Modal, SelectField, TextAreaField, TextField,
};

use crate::context::use_catalog;

#[component]
pub fn BookingDialog(guide: Guide, on_close: EventHandler<()>) -> Element {
    let catalog = use_catalog();

    let mut form = use_signal(BookingForm::default);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut submitted = use_signal(|| false);

    let guide_id = guide.id.clone();
    let guide_name = guide.name.clone();

    let on_submit = move |_: ()| {
        match form().validate(&catalog(), &guide_id) {
            Ok(request) => {
                match serde_json::to_string(&request) {
                    Ok(payload) => {
                        tracing::info!(guide = %request.guide_id, %payload, "Booking request submitted");
                        submitted.set(true);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize booking request");
                        error.set(Some("Something went wrong. Please try again.".to_string()));
                    }
                }
            }
            Err(e) => {
                error.set(Some(e.to_string()));
            }
        }
    };

    let duration_options: Vec<(String, String)> = TourDuration::all()
        .iter()
        .map(|d| (duration_value(*d).to_string(), d.label().to_string()))
        .collect();
    let group_options: Vec<(String, String)> = GroupSize::all()
        .iter()
        .map(|g| (group_value(*g).to_string(), g.label().to_string()))
        .collect();

    rsx! {
        Modal {
            title: format!("Book {guide_name}"),
            on_close: move |_| on_close.call(()),

            if submitted() {
                div { class: "booking-success",
                    div { class: "success-emblem", "🙏" }
                    h3 { "Request Sent" }
                    p { class: "card-meta",
                        "{guide.name} will call you within 24 hours to confirm the details."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_close.call(()),
                        "Done"
                    }
                }
            } else {
                div { class: "booking-summary",
                    div { class: "booking-summary-head",
                        span { class: "guide-portrait", "🧭" }
                        div {
                            strong { "{guide.name}" }
                            div { class: "card-meta", "{guide.price_label()} · ⭐ {guide.rating}" }
                        }
                    }
                }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                TextField {
                    label: "Full name".to_string(),
                    value: form().name.clone(),
                    on_input: move |v| form.write().name = v,
                    placeholder: "Your name".to_string(),
                }
                div { class: "form-row",
                    TextField {
                        label: "Email".to_string(),
                        value: form().email.clone(),
                        on_input: move |v| form.write().email = v,
                        input_type: "email".to_string(),
                        placeholder: "you@example.com".to_string(),
                    }
                    TextField {
                        label: "Phone".to_string(),
                        value: form().phone.clone(),
                        on_input: move |v| form.write().phone = v,
                        input_type: "tel".to_string(),
                        placeholder: "+91".to_string(),
                    }
                }
                div { class: "form-row",
                    TextField {
                        label: "Preferred date".to_string(),
                        value: form().date.clone(),
                        on_input: move |v| form.write().date = v,
                        input_type: "date".to_string(),
                    }
                    SelectField {
                        label: "Tour duration".to_string(),
                        options: duration_options,
                        selected: form().duration.map(|d| duration_value(d).to_string()).unwrap_or_default(),
                        on_select: move |v: String| form.write().duration = parse_duration(&v),
                        placeholder: "Select duration".to_string(),
                    }
                }
                SelectField {
                    label: "Group size".to_string(),
                    options: group_options,
                    selected: form().group_size.map(|g| group_value(g).to_string()).unwrap_or_default(),
                    on_select: move |v: String| form.write().group_size = parse_group(&v),
                    placeholder: "Select group size".to_string(),
                }
                TextAreaField {
                    label: "Special requests".to_string(),
                    value: form().special_requests.clone(),
                    on_input: move |v| form.write().special_requests = v,
                    placeholder: "Interests, accessibility needs, language preference...".to_string(),
                }

                div { class: "form-note",
                    "📞 Your guide will call within 24 hours to confirm availability and plan the route."
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn-block".to_string(),
                    onclick: on_submit,
                    "Request Booking"
                }
            }
        }
    }
}

// Select values mirror the request payload's kebab-case encoding.

fn duration_value(duration: TourDuration) -> &'static str {
    match duration {
        TourDuration::HalfDay => "half-day",
        TourDuration::FullDay => "full-day",
        TourDuration::MultiDay => "multi-day",
    }
}

fn parse_duration(value: &str) -> Option<TourDuration> {
    match value {
        "half-day" => Some(TourDuration::HalfDay),
        "full-day" => Some(TourDuration::FullDay),
        "multi-day" => Some(TourDuration::MultiDay),
        _ => None,
    }
}

fn group_value(size: GroupSize) -> &'static str {
    match size {
        GroupSize::Solo => "solo",
        GroupSize::Small => "small",
        GroupSize::Medium => "medium",
        GroupSize::Large => "large",
    }
}

fn parse_group(value: &str) -> Option<GroupSize> {
    match value {
        "solo" => Some(GroupSize::Solo),
        "small" => Some(GroupSize::Small),
        "medium" => Some(GroupSize::Medium),
        "large" => Some(GroupSize::Large),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_round_trip() {
        for duration in TourDuration::all() {
            assert_eq!(parse_duration(duration_value(*duration)), Some(*duration));
        }
        for size in GroupSize::all() {
            assert_eq!(parse_group(group_value(*size)), Some(*size));
        }
    }

    #[test]
    fn unknown_select_values_clear_the_field() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_group("enormous"), None);
    }
}
