//! Shared desktop components.

pub mod booking_dialog;
pub mod cards;
pub mod emergency_contacts;
pub mod gratitude_wall;
pub mod image_gallery;
pub mod markdown;
pub mod nav_header;
pub mod video_embed;

pub use booking_dialog::BookingDialog;
pub use emergency_contacts::EmergencyContactsModal;
pub use gratitude_wall::GratitudeWallPanel;
pub use image_gallery::ImageGallery;
pub use markdown::MarkdownText;
pub use nav_header::{NavHeader, NavLocation};
pub use video_embed::VideoEmbed;
