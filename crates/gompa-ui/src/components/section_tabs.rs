//! Section Tabs Component
//!
//! The tab/section switch used on every page with multiple content
//! regions (festivals, community, monastery detail). Each page defines
//! its own section enum and implements [`Section`]; exactly one content
//! region renders for the active value.

use dioxus::prelude::*;

/// A page's enumerated set of content sections.
pub trait Section: Copy + PartialEq + 'static {
    /// Every section, in display order. Each value appears exactly once.
    const ALL: &'static [Self];

    /// Tab label.
    fn label(&self) -> &'static str;
}

/// Horizontal tab strip over a [`Section`] enum.
///
/// Selecting a tab calls `on_select` synchronously; the page swaps its
/// rendered region on the signal update. No validation, no persistence.
///
/// # Example
///
/// ```rust,ignore
/// let mut section = use_signal(|| DetailSection::Overview);
///
/// rsx! {
///     SectionTabs {
///         selected: section(),
///         on_select: move |s| section.set(s),
///     }
/// }
/// ```
#[component]
pub fn SectionTabs<S: Section>(selected: S, on_select: EventHandler<S>) -> Element {
    rsx! {
        div { class: "section-tabs", role: "tablist",
            for section in S::ALL {
                {
                    let value = *section;
                    let active = value == selected;
                    rsx! {
                        button {
                            class: if active { "section-tab active" } else { "section-tab" },
                            role: "tab",
                            "aria-selected": if active { "true" } else { "false" },
                            onclick: move |_| on_select.call(value),
                            "{value.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Demo {
        One,
        Two,
        Three,
    }

    impl Section for Demo {
        const ALL: &'static [Demo] = &[Demo::One, Demo::Two, Demo::Three];

        fn label(&self) -> &'static str {
            match self {
                Demo::One => "One",
                Demo::Two => "Two",
                Demo::Three => "Three",
            }
        }
    }

    #[test]
    fn all_lists_every_value_exactly_once() {
        assert_eq!(Demo::ALL.len(), 3);
        for (i, a) in Demo::ALL.iter().enumerate() {
            for b in &Demo::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = Demo::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["One", "Two", "Three"]);
    }
}
