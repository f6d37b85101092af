//! Festival catalog record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a festival has already happened.
///
/// Kept as catalog data rather than computed from the clock, so the
/// listings stay stable regardless of when the app is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FestivalStatus {
    Upcoming,
    Past,
}

impl FestivalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FestivalStatus::Upcoming => "Upcoming",
            FestivalStatus::Past => "Past",
        }
    }
}

/// A festival or ceremony hosted by one of the catalog monasteries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Host monastery, by display name (resolves against the catalog)
    pub monastery: String,
    pub description: String,
    pub status: FestivalStatus,
    pub has_livestream: bool,
    /// Emoji emblem shown on festival cards
    pub emblem: String,
}

impl Festival {
    /// Date formatted the way festival cards display it.
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_is_human_readable() {
        let festival = Festival {
            id: "losar".into(),
            name: "Losar".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
            monastery: "Rumtek Monastery".into(),
            description: String::new(),
            status: FestivalStatus::Upcoming,
            has_livestream: true,
            emblem: "🎊".into(),
        };
        assert_eq!(festival.date_label(), "February 18, 2026");
    }

    #[test]
    fn status_labels() {
        assert_eq!(FestivalStatus::Upcoming.label(), "Upcoming");
        assert_eq!(FestivalStatus::Past.label(), "Past");
    }
}
