//! Catalog card components for the explorer and community grids.

pub mod festival_card;
pub mod guide_card;
pub mod homestay_card;
pub mod monastery_card;
pub mod workshop_card;

pub use festival_card::FestivalCard;
pub use guide_card::GuideCard;
pub use homestay_card::HomestayCard;
pub use monastery_card::MonasteryCard;
pub use workshop_card::WorkshopCard;
