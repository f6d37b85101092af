//! Property-based tests for catalog search, the gratitude wall, and
//! calendar navigation.

use chrono::Datelike;
use proptest::prelude::*;

use gompa_core::calendar::CalendarMonth;
use gompa_core::{Catalog, GratitudeWall};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary free-text queries, including ones that match nothing
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,24}").expect("valid regex")
}

/// Non-blank note messages
fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!]{1,200}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

/// Messages that are empty or whitespace-only
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,10}").expect("valid regex")
}

// ============================================================================
// Search Properties
// ============================================================================

proptest! {
    /// Every search hit actually contains the query in a designated field
    #[test]
    fn search_hits_contain_query(query in query_strategy()) {
        let catalog = Catalog::builtin();
        let needle = query.trim().to_lowercase();

        for hit in catalog.search_monasteries(&query) {
            if needle.is_empty() {
                continue; // blank query returns everything
            }
            let haystack = format!(
                "{} {} {}",
                hit.name.to_lowercase(),
                hit.location.to_lowercase(),
                hit.tradition.to_lowercase()
            );
            prop_assert!(
                haystack.contains(&needle),
                "hit {} does not contain {:?}",
                hit.id,
                needle
            );
        }
    }

    /// Results preserve catalog order for any query
    #[test]
    fn search_preserves_catalog_order(query in query_strategy()) {
        let catalog = Catalog::builtin();
        let order: Vec<&str> = catalog.monasteries().iter().map(|m| m.id.as_str()).collect();

        let hits: Vec<&str> = catalog
            .search_monasteries(&query)
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        let mut cursor = 0;
        for hit in hits {
            let position = order[cursor..].iter().position(|id| *id == hit);
            prop_assert!(position.is_some(), "hit {} out of catalog order", hit);
            cursor += position.unwrap_or(0) + 1;
        }
    }

    /// A query matching no record returns the empty list, never panics
    #[test]
    fn search_never_panics(query in "\\PC{0,64}") {
        let catalog = Catalog::builtin();
        let _ = catalog.search_monasteries(&query);
    }
}

// ============================================================================
// Gratitude Wall Properties
// ============================================================================

proptest! {
    /// Posting any sequence of non-blank notes keeps ids strictly
    /// decreasing down the wall (newest first) and grows it one per post
    #[test]
    fn wall_is_append_only(messages in prop::collection::vec(message_strategy(), 1..20)) {
        let mut wall = GratitudeWall::seeded();
        let seeds = wall.len();

        for (i, message) in messages.iter().enumerate() {
            let id = wall.post("Anonymous Visitor", message);
            prop_assert!(id.is_some());
            prop_assert_eq!(wall.len(), seeds + i + 1);
            prop_assert_eq!(wall.notes()[0].message.as_str(), message.trim());
        }

        let ids: Vec<u64> = wall.notes().iter().map(|n| n.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    /// Blank posts leave the wall untouched
    #[test]
    fn blank_posts_are_no_ops(blank in blank_strategy()) {
        let mut wall = GratitudeWall::seeded();
        let before = wall.clone();
        prop_assert!(wall.post("Anonymous Visitor", &blank).is_none());
        prop_assert_eq!(wall, before);
    }
}

// ============================================================================
// Calendar Properties
// ============================================================================

proptest! {
    /// prev/next round-trip from any month
    #[test]
    fn calendar_navigation_round_trips(year in 2000i32..2100, month in 1u32..=12) {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = CalendarMonth::containing(date);
        prop_assert_eq!(grid.prev().next(), grid);
        prop_assert_eq!(grid.next().prev(), grid);
    }

    /// Every day of the month appears in the grid exactly once, in order
    #[test]
    fn calendar_grid_is_complete(year in 2000i32..2100, month in 1u32..=12) {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = CalendarMonth::containing(date);

        let days: Vec<u32> = grid
            .weeks()
            .iter()
            .flatten()
            .filter_map(|cell| cell.map(|d| d.day()))
            .collect();

        prop_assert_eq!(days.len() as u32, grid.day_count());
        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(*day, i as u32 + 1);
        }
    }
}
