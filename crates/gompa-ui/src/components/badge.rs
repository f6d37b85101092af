//! Badge Component
//!
//! Small inline labels: traditions, ratings, amenities, statuses.

use dioxus::prelude::*;

use gompa_core::GuideAvailability;

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Filled neutral badge
    #[default]
    Default,
    /// Muted fill, for secondary facts
    Secondary,
    /// Border only, for lists of small tags
    Outline,
    /// Saffron fill, for ratings and live markers
    Accent,
    /// Green fill, for availability
    Positive,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge--secondary",
            BadgeVariant::Outline => "badge badge--outline",
            BadgeVariant::Accent => "badge badge--accent",
            BadgeVariant::Positive => "badge badge--positive",
        }
    }
}

/// Small inline label.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { variant: BadgeVariant::Accent, "⭐ 4.9" }
///     Badge { variant: BadgeVariant::Outline, "Kagyu" }
/// }
/// ```
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    children: Element,
) -> Element {
    rsx! {
        span { class: "{variant.class()}", {children} }
    }
}

/// Availability badge for guide cards: green when bookable, muted
/// otherwise.
#[component]
pub fn AvailabilityBadge(availability: GuideAvailability) -> Element {
    let variant = if availability.is_available() {
        BadgeVariant::Positive
    } else {
        BadgeVariant::Secondary
    };

    rsx! {
        Badge { variant: variant, "{availability.label()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(BadgeVariant::Default.class(), "badge");
        assert_eq!(BadgeVariant::Secondary.class(), "badge badge--secondary");
        assert_eq!(BadgeVariant::Outline.class(), "badge badge--outline");
        assert_eq!(BadgeVariant::Accent.class(), "badge badge--accent");
        assert_eq!(BadgeVariant::Positive.class(), "badge badge--positive");
    }
}
