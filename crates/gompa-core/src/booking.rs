//! Guide booking form and validation.
//!
//! Bookings never reach a backend. A validated form becomes a
//! `BookingRequest`, which the UI serializes and logs; the guide is
//! said to call back within 24 hours.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{BookingError, BookingResult};

/// Tour length options offered by the booking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourDuration {
    HalfDay,
    FullDay,
    MultiDay,
}

impl TourDuration {
    pub fn label(&self) -> &'static str {
        match self {
            TourDuration::HalfDay => "Half Day (4 hours)",
            TourDuration::FullDay => "Full Day (8 hours)",
            TourDuration::MultiDay => "Multi-day",
        }
    }

    pub fn all() -> &'static [TourDuration] {
        &[
            TourDuration::HalfDay,
            TourDuration::FullDay,
            TourDuration::MultiDay,
        ]
    }
}

/// Group size brackets offered by the booking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupSize {
    Solo,
    Small,
    Medium,
    Large,
}

impl GroupSize {
    pub fn label(&self) -> &'static str {
        match self {
            GroupSize::Solo => "Solo (1 person)",
            GroupSize::Small => "Small group (2-4)",
            GroupSize::Medium => "Medium group (5-8)",
            GroupSize::Large => "Large group (9+)",
        }
    }

    pub fn all() -> &'static [GroupSize] {
        &[
            GroupSize::Solo,
            GroupSize::Small,
            GroupSize::Medium,
            GroupSize::Large,
        ]
    }
}

/// Ephemeral state of the booking dialog form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Preferred date as entered ("2026-10-02")
    pub date: String,
    pub duration: Option<TourDuration>,
    pub group_size: Option<GroupSize>,
    pub special_requests: String,
}

impl BookingForm {
    /// Validates the form against the catalog and produces the request
    /// payload.
    ///
    /// Fails on the first missing required field, in form order (name,
    /// email, phone, date), then on guide problems.
    pub fn validate(&self, catalog: &Catalog, guide_id: &str) -> BookingResult<BookingRequest> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(BookingError::MissingField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(BookingError::MissingField("phone"));
        }
        if self.date.trim().is_empty() {
            return Err(BookingError::MissingField("preferred date"));
        }

        let guide = catalog
            .guide(guide_id)
            .ok_or_else(|| BookingError::UnknownGuide(guide_id.to_string()))?;
        if !guide.availability.is_available() {
            return Err(BookingError::GuideUnavailable(guide.name.clone()));
        }

        Ok(BookingRequest {
            guide_id: guide.id.clone(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date: self.date.trim().to_string(),
            duration: self.duration,
            group_size: self.group_size,
            special_requests: self.special_requests.trim().to_string(),
        })
    }
}

/// A validated booking request, the terminal artifact of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub guide_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub duration: Option<TourDuration>,
    pub group_size: Option<GroupSize>,
    pub special_requests: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Asha Rai".into(),
            email: "asha@example.com".into(),
            phone: "+91-98000-00000".into(),
            date: "2026-10-02".into(),
            duration: Some(TourDuration::FullDay),
            group_size: Some(GroupSize::Small),
            special_requests: "Would love to see the thangka workshop".into(),
        }
    }

    #[test]
    fn valid_form_produces_request() {
        let catalog = Catalog::builtin();
        let request = filled_form().validate(&catalog, "tenzin-guide").unwrap();
        assert_eq!(request.guide_id, "tenzin-guide");
        assert_eq!(request.name, "Asha Rai");
        assert_eq!(request.duration, Some(TourDuration::FullDay));
    }

    #[test]
    fn fails_on_first_missing_field_in_form_order() {
        let catalog = Catalog::builtin();

        let mut form = filled_form();
        form.name.clear();
        form.email.clear();
        assert_eq!(
            form.validate(&catalog, "tenzin-guide"),
            Err(BookingError::MissingField("name"))
        );

        let mut form = filled_form();
        form.phone = "   ".into();
        assert_eq!(
            form.validate(&catalog, "tenzin-guide"),
            Err(BookingError::MissingField("phone"))
        );

        let mut form = filled_form();
        form.date.clear();
        assert_eq!(
            form.validate(&catalog, "tenzin-guide"),
            Err(BookingError::MissingField("preferred date"))
        );
    }

    #[test]
    fn unknown_guide_is_rejected() {
        let catalog = Catalog::builtin();
        assert_eq!(
            filled_form().validate(&catalog, "nobody"),
            Err(BookingError::UnknownGuide("nobody".into()))
        );
    }

    #[test]
    fn busy_guide_is_rejected() {
        let catalog = Catalog::builtin();
        assert_eq!(
            filled_form().validate(&catalog, "pemba-guide"),
            Err(BookingError::GuideUnavailable("Pemba Tamang".into()))
        );
    }

    #[test]
    fn duration_and_group_size_are_optional() {
        let catalog = Catalog::builtin();
        let mut form = filled_form();
        form.duration = None;
        form.group_size = None;
        let request = form.validate(&catalog, "dolma-guide").unwrap();
        assert!(request.duration.is_none());
        assert!(request.group_size.is_none());
    }

    #[test]
    fn request_serializes_with_kebab_case_enums() {
        let catalog = Catalog::builtin();
        let request = filled_form().validate(&catalog, "tenzin-guide").unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"full-day\""));
        assert!(json.contains("\"tenzin-guide\""));
    }
}
