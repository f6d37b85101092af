//! Error types for the monastery experience platform.

use thiserror::Error;

/// Why a guide booking request was rejected.
///
/// The booking dialog maps these to inline messages; nothing here is
/// fatal and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required form field was left blank
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    /// The guide id does not exist in the catalog
    #[error("Unknown guide: {0}")]
    UnknownGuide(String),

    /// The guide exists but is not taking bookings
    #[error("{0} is not currently available for bookings")]
    GuideUnavailable(String),
}

/// Result type alias for booking validation
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", BookingError::MissingField("email")),
            "Please fill in your email"
        );
        assert_eq!(
            format!("{}", BookingError::UnknownGuide("nobody".into())),
            "Unknown guide: nobody"
        );
        assert_eq!(
            format!("{}", BookingError::GuideUnavailable("Pemba Tamang".into())),
            "Pemba Tamang is not currently available for bookings"
        );
    }
}
