//! Monastery Experience Platform - Core Library
//!
//! Domain types, the built-in catalog, and all the presentation logic
//! behind the Sikkim monastery experience app: explorer search, the
//! festival calendar, the gratitude wall, reminders, guide booking
//! validation, and the prayer-wheel blessing cycle.
//!
//! ## Overview
//!
//! The application is a presentation-only desktop front-end. This crate
//! holds everything that is not markup: read-only catalog data compiled
//! into the binary and the small pure state machines the pages drive.
//! There is no I/O anywhere in this crate.
//!
//! ## Quick Start
//!
//! ```
//! use gompa_core::{Catalog, GratitudeWall};
//!
//! let catalog = Catalog::builtin();
//!
//! // Explorer search
//! let hits = catalog.search_monasteries("rumtek");
//! assert_eq!(hits.len(), 1);
//!
//! // The gratitude wall
//! let mut wall = GratitudeWall::seeded();
//! wall.post("Anonymous Visitor", "A beautiful, peaceful place.");
//! assert_eq!(wall.notes()[0].author, "Anonymous Visitor");
//! ```

pub mod blessings;
pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod error;
pub mod reminders;
pub mod types;
pub mod wall;

// Re-exports
pub use blessings::{BlessingWheel, BLESSINGS};
pub use booking::{BookingForm, BookingRequest, GroupSize, TourDuration};
pub use calendar::CalendarMonth;
pub use catalog::Catalog;
pub use error::{BookingError, BookingResult};
pub use reminders::ReminderSet;
pub use types::*;
pub use wall::GratitudeWall;
