//! Domain types for the monastery experience platform.
//!
//! Everything here is plain data: catalog records compiled into the
//! binary plus the small client-local types (session, gratitude notes)
//! that never leave the process.

use serde::{Deserialize, Serialize};

mod community;
mod festival;
mod monastery;
mod session;
mod stay;

pub use community::{GratitudeNote, NoteReply, ReplyRole};
pub use festival::{Festival, FestivalStatus};
pub use monastery::{AudioStory, EtiquetteGuide, Monastery};
pub use session::{Session, UserAccount, UserRole};
pub use stay::{Guide, GuideAvailability, Homestay, VolunteerRole, Workshop};

/// A helpline entry shown in the emergency contacts dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// What the number reaches (e.g. "Tourist Helpline")
    pub label: String,
    /// Dialable number, kept as displayed
    pub number: String,
    /// One-line note on when to use it
    pub note: String,
}
