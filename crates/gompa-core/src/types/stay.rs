//! Community marketplace records: homestays, workshops, guides,
//! and volunteer roles.

use serde::{Deserialize, Serialize};

/// A family homestay near one of the monasteries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homestay {
    pub id: String,
    pub name: String,
    pub host: String,
    pub location: String,
    /// Nightly price in rupees
    pub price_per_night: u32,
    pub rating: f32,
    pub amenities: Vec<String>,
    pub description: String,
    pub image: String,
}

impl Homestay {
    pub fn price_label(&self) -> String {
        format!("₹{}/night", group_thousands(self.price_per_night))
    }
}

/// A cultural workshop led by a local instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub instructor: String,
    /// Course length as displayed ("3 days", "1 day")
    pub duration: String,
    /// Course price in rupees
    pub price: u32,
    pub max_participants: u32,
    pub description: String,
    /// Emoji emblem shown on workshop cards
    pub emblem: String,
}

impl Workshop {
    pub fn price_label(&self) -> String {
        format!("₹{}", group_thousands(self.price))
    }
}

/// Whether a guide can currently take bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideAvailability {
    Available,
    /// Booked out, with a display note like "until Dec 20"
    Busy(String),
}

impl GuideAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, GuideAvailability::Available)
    }

    pub fn label(&self) -> String {
        match self {
            GuideAvailability::Available => "Available".to_string(),
            GuideAvailability::Busy(note) => format!("Busy {}", note),
        }
    }
}

/// A local cultural guide offering monastery tours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub years_experience: u32,
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
    /// Day rate in rupees
    pub price_per_day: u32,
    pub rating: f32,
    pub review_count: u32,
    pub description: String,
    pub availability: GuideAvailability,
    pub phone: String,
}

impl Guide {
    pub fn price_label(&self) -> String {
        format!("₹{}/day", group_thousands(self.price_per_day))
    }

    pub fn experience_label(&self) -> String {
        format!("{} years experience", self.years_experience)
    }
}

/// A standing volunteer program at the monasteries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRole {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// When the program runs ("Every weekend", "Weekdays")
    pub schedule: String,
    /// Daily hours or commitment ("6:00 AM - 9:00 AM")
    pub hours: String,
    /// Who or how many are needed ("5-10 volunteers needed")
    pub capacity: String,
    /// Emoji emblem shown on the role card
    pub emblem: String,
}

/// Indian-style digit grouping would be more correct for rupees, but the
/// original listings only ever show four-digit prices, where western
/// grouping reads the same.
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_labels_group_digits() {
        let homestay = Homestay {
            id: "h".into(),
            name: String::new(),
            host: String::new(),
            location: String::new(),
            price_per_night: 1500,
            rating: 4.9,
            amenities: vec![],
            description: String::new(),
            image: String::new(),
        };
        assert_eq!(homestay.price_label(), "₹1,500/night");
    }

    #[test]
    fn group_thousands_handles_small_values() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn availability_labels() {
        assert_eq!(GuideAvailability::Available.label(), "Available");
        assert_eq!(
            GuideAvailability::Busy("until Dec 20".into()).label(),
            "Busy until Dec 20"
        );
        assert!(GuideAvailability::Available.is_available());
        assert!(!GuideAvailability::Busy("until Dec 20".into()).is_available());
    }
}
