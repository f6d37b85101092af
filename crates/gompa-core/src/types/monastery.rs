//! Monastery catalog record and its nested pieces.

use serde::{Deserialize, Serialize};

/// A monastery in the explorer catalog.
///
/// Carries both the summary fields shown on explorer cards and the
/// long-form prose (markdown) rendered on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monastery {
    /// Stable id used in routes (`/monasteries/:id`)
    pub id: String,
    pub name: String,
    pub location: String,
    /// Buddhist school (Kagyu, Nyingma, ...)
    pub tradition: String,
    /// Year of founding, kept as displayed ("1705", "1966")
    pub established: String,
    pub description: String,
    /// Markdown prose for the overview tab
    pub history: String,
    /// Markdown prose for the overview tab
    pub significance: String,
    /// Gallery image URLs, first one is the lead image
    pub images: Vec<String>,
    pub etiquette: EtiquetteGuide,
    pub audio_story: AudioStory,
    /// Typical visit length shown on explorer cards ("3 hours")
    pub visit_duration: String,
    /// Rough annual visitor count shown on explorer cards
    pub annual_visitors: u32,
    pub rating: f32,
    /// Embedded video id for the stories tab, when footage exists
    pub video_id: Option<String>,
}

impl Monastery {
    /// True when the case-insensitive query occurs in the name,
    /// location, or tradition.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self.tradition.to_lowercase().contains(&query)
    }
}

/// Visitor etiquette rules, grouped the way the detail page renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtiquetteGuide {
    pub dress: Vec<String>,
    pub behavior: Vec<String>,
    pub photography: Vec<String>,
}

/// Narrated story attached to a monastery's stories tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStory {
    pub narrator: String,
    /// Narrator's role line ("Senior Monk at Rumtek Monastery")
    pub narrator_title: String,
    /// Invitation text shown before playing
    pub summary: String,
    /// Chant snippet shown while the story plays
    pub chant: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Monastery {
        Monastery {
            id: "test".into(),
            name: "Rumtek Monastery".into(),
            location: "Gangtok, East Sikkim".into(),
            tradition: "Kagyu".into(),
            established: "1966".into(),
            description: String::new(),
            history: String::new(),
            significance: String::new(),
            images: vec![],
            etiquette: EtiquetteGuide {
                dress: vec![],
                behavior: vec![],
                photography: vec![],
            },
            audio_story: AudioStory {
                narrator: String::new(),
                narrator_title: String::new(),
                summary: String::new(),
                chant: String::new(),
            },
            visit_duration: "3 hours".into(),
            annual_visitors: 1200,
            rating: 4.9,
            video_id: None,
        }
    }

    #[test]
    fn matches_is_case_insensitive() {
        let m = sample();
        assert!(m.matches("RUMTEK"));
        assert!(m.matches("gangtok"));
        assert!(m.matches("kagyu"));
    }

    #[test]
    fn matches_rejects_unrelated_query() {
        assert!(!sample().matches("zzz"));
    }
}
