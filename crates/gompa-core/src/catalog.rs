//! The built-in catalog.
//!
//! Every record the application renders lives here as read-only data,
//! constructed once at startup and provided to pages via context. If
//! this ever grows a backend, this module becomes the load-at-startup
//! snapshot of that service.

use chrono::NaiveDate;

use crate::types::{
    AudioStory, EmergencyContact, EtiquetteGuide, Festival, FestivalStatus, Guide,
    GuideAvailability, Homestay, Monastery, VolunteerRole, Workshop,
};

/// Read-only catalog of monasteries, festivals, and community listings.
///
/// Accessors hand out references only; nothing mutates a catalog after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    monasteries: Vec<Monastery>,
    festivals: Vec<Festival>,
    homestays: Vec<Homestay>,
    workshops: Vec<Workshop>,
    guides: Vec<Guide>,
    volunteer_roles: Vec<VolunteerRole>,
    emergency_contacts: Vec<EmergencyContact>,
}

impl Catalog {
    pub fn monasteries(&self) -> &[Monastery] {
        &self.monasteries
    }

    pub fn monastery(&self, id: &str) -> Option<&Monastery> {
        self.monasteries.iter().find(|m| m.id == id)
    }

    /// Case-insensitive substring search over name, location, and
    /// tradition. A blank query returns the full catalog in order.
    pub fn search_monasteries(&self, query: &str) -> Vec<&Monastery> {
        let query = query.trim();
        if query.is_empty() {
            return self.monasteries.iter().collect();
        }
        self.monasteries.iter().filter(|m| m.matches(query)).collect()
    }

    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    pub fn festival(&self, id: &str) -> Option<&Festival> {
        self.festivals.iter().find(|f| f.id == id)
    }

    pub fn upcoming_festivals(&self) -> Vec<&Festival> {
        self.festivals
            .iter()
            .filter(|f| f.status == FestivalStatus::Upcoming)
            .collect()
    }

    pub fn past_festivals(&self) -> Vec<&Festival> {
        self.festivals
            .iter()
            .filter(|f| f.status == FestivalStatus::Past)
            .collect()
    }

    /// Festivals dated exactly on the given day.
    pub fn festivals_on(&self, date: NaiveDate) -> Vec<&Festival> {
        self.festivals.iter().filter(|f| f.date == date).collect()
    }

    /// Upcoming festivals with a stream planned, in catalog order.
    pub fn upcoming_livestreams(&self) -> Vec<&Festival> {
        self.upcoming_festivals()
            .into_iter()
            .filter(|f| f.has_livestream)
            .collect()
    }

    /// The next scheduled livestream, by date, among upcoming festivals.
    pub fn next_livestream(&self) -> Option<&Festival> {
        self.upcoming_livestreams()
            .into_iter()
            .min_by_key(|f| f.date)
    }

    pub fn homestays(&self) -> &[Homestay] {
        &self.homestays
    }

    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn guide(&self, id: &str) -> Option<&Guide> {
        self.guides.iter().find(|g| g.id == id)
    }

    pub fn volunteer_roles(&self) -> &[VolunteerRole] {
        &self.volunteer_roles
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.emergency_contacts
    }
}

/// Dates in catalog data are always valid; a bad literal falls back to
/// the epoch rather than panicking.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Catalog {
    /// The catalog compiled into this build.
    pub fn builtin() -> Self {
        Self {
            monasteries: builtin_monasteries(),
            festivals: builtin_festivals(),
            homestays: builtin_homestays(),
            workshops: builtin_workshops(),
            guides: builtin_guides(),
            volunteer_roles: builtin_volunteer_roles(),
            emergency_contacts: builtin_emergency_contacts(),
        }
    }
}

fn builtin_monasteries() -> Vec<Monastery> {
    vec![
        Monastery {
            id: "rumtek".into(),
            name: "Rumtek Monastery".into(),
            location: "Gangtok, East Sikkim".into(),
            tradition: "Kagyu".into(),
            established: "1966".into(),
            description: "Rumtek Monastery, also called the Dharma Chakra Centre, is a gompa \
                located near the capital Gangtok. It is the largest monastery in Sikkim and \
                the seat-in-exile of the Gyalwa Karmapa, inaugurated in 1966 by the 16th \
                Karmapa."
                .into(),
            history: "Built by the **16th Gyalwa Karmapa** in 1966, Rumtek Monastery was \
                constructed to replace Tsurphu Monastery in Tibet. The monastery houses some \
                of the most sacred objects and scriptures of the Kagyu lineage."
                .into(),
            significance: "As the seat-in-exile of the Karmapa, Rumtek plays a crucial role \
                in preserving Tibetan Buddhist traditions. The monastery is renowned for its \
                **golden stupa** containing the relics of the 16th Karmapa."
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1731425281764-9f8e1c4aa2ec?w=1080".into(),
                "https://images.unsplash.com/photo-1611426663925-b6ceddb3a4d6?w=1080".into(),
            ],
            etiquette: EtiquetteGuide {
                dress: vec![
                    "Wear modest clothing covering shoulders and knees".into(),
                    "Remove shoes before entering prayer halls".into(),
                    "Avoid wearing bright colors, especially red".into(),
                ],
                behavior: vec![
                    "Maintain silence in prayer halls".into(),
                    "Walk clockwise around stupas and prayer wheels".into(),
                    "Do not point feet toward Buddha statues".into(),
                ],
                photography: vec![
                    "Photography is generally not allowed inside temples".into(),
                    "Ask permission before photographing monks".into(),
                    "Flash photography is strictly prohibited".into(),
                ],
            },
            audio_story: AudioStory {
                narrator: "Lama Tenzin".into(),
                narrator_title: "Senior Monk at Rumtek Monastery".into(),
                summary: "Listen to the sacred chants and learn about the monastery's \
                    founding from Lama Tenzin"
                    .into(),
                chant: "Om Mani Padme Hum... Welcome, dear visitor, to our sacred home. Let \
                    me tell you the story of how this monastery came to be..."
                    .into(),
            },
            visit_duration: "3 hours".into(),
            annual_visitors: 1200,
            rating: 4.9,
            video_id: Some("EwRQkmEXhS4".into()),
        },
        Monastery {
            id: "enchey".into(),
            name: "Enchey Monastery".into(),
            location: "Gangtok".into(),
            tradition: "Nyingma".into(),
            established: "1909".into(),
            description: "A serene Nyingma monastery perched on a hilltop with stunning views \
                and ancient thangka paintings."
                .into(),
            history: "The present building was completed in **1909** on a site blessed by the \
                flying tantric master Lama Druptob Karpo. 'Enchey' means *the solitary \
                temple*, a name earned in the days when no other building was permitted \
                near it."
                .into(),
            significance: "Enchey is the guardian monastery of Gangtok, home to the protector \
                deities Khangchendzonga and Yabdean. Its annual *chaam* masked dances draw \
                the whole city to the courtyard."
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1507829585586-61e76f72065c?w=1080".into(),
            ],
            etiquette: EtiquetteGuide {
                dress: vec![
                    "Dress modestly; shoulders and knees covered".into(),
                    "Remove shoes and hats before the prayer hall".into(),
                ],
                behavior: vec![
                    "Keep voices low inside the compound".into(),
                    "Circumambulate the main temple clockwise".into(),
                    "Do not touch ritual objects or thangkas".into(),
                ],
                photography: vec![
                    "No photography inside the prayer hall".into(),
                    "Ask before photographing resident monks".into(),
                ],
            },
            audio_story: AudioStory {
                narrator: "Lama Pema".into(),
                narrator_title: "Caretaker Monk at Enchey Monastery".into(),
                summary: "Hear how the flying lama consecrated this hilltop and why the \
                    city below still looks to it for protection"
                    .into(),
                chant: "Om Ah Hum Vajra Guru Padma Siddhi Hum... From this quiet hill the \
                    solitary temple has watched over Gangtok for a century..."
                    .into(),
            },
            visit_duration: "2 hours".into(),
            annual_visitors: 850,
            rating: 4.8,
            video_id: None,
        },
        Monastery {
            id: "pemayangtse".into(),
            name: "Pemayangtse Monastery".into(),
            location: "Pelling, West Sikkim".into(),
            tradition: "Nyingma".into(),
            established: "1705".into(),
            description: "One of the oldest and most sacred monasteries in Sikkim, founded in \
                1705, known for its intricate wood carvings."
                .into(),
            history: "Founded by **Lama Lhatsun Chempo** in 1705, Pemayangtse was conceived \
                as the 'perfect sublime lotus', a monastery reserved for monks of pure \
                Tibetan lineage. Its three storeys hold centuries of murals, sculptures, \
                and scriptures."
                .into(),
            significance: "Pemayangtse heads all Nyingma monasteries in Sikkim. Its crowning \
                treasure is the **Zangdok Palri**, a seven-tiered wooden model of Guru \
                Rinpoche's heavenly palace, carved single-handedly over five years."
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1551145577-29802111273b?w=1080".into(),
            ],
            etiquette: EtiquetteGuide {
                dress: vec![
                    "Modest dress is required throughout the complex".into(),
                    "Shoes off before every shrine room".into(),
                ],
                behavior: vec![
                    "Observe silence on the upper floors".into(),
                    "Walk clockwise around the monastery grounds".into(),
                    "Offerings are welcome but never obligatory".into(),
                ],
                photography: vec![
                    "The Zangdok Palri model may not be photographed".into(),
                    "Photography outdoors is permitted".into(),
                ],
            },
            audio_story: AudioStory {
                narrator: "Lama Kunzang".into(),
                narrator_title: "Senior Monk at Pemayangtse Monastery".into(),
                summary: "The story of the perfect sublime lotus and the carver who built \
                    heaven in wood"
                    .into(),
                chant: "Om Ah Hum... Three centuries ago a lama climbed this ridge and saw \
                    a lotus in the mist. Here is what he built..."
                    .into(),
            },
            visit_duration: "4 hours".into(),
            annual_visitors: 920,
            rating: 4.7,
            video_id: None,
        },
    ]
}

fn builtin_festivals() -> Vec<Festival> {
    vec![
        Festival {
            id: "losar".into(),
            name: "Losar (Tibetan New Year)".into(),
            date: ymd(2027, 2, 7),
            monastery: "Rumtek Monastery".into(),
            description: "The most important festival in Tibetan Buddhism, celebrating the \
                new year with prayers, dances, and rituals."
                .into(),
            status: FestivalStatus::Upcoming,
            has_livestream: true,
            emblem: "🎊".into(),
        },
        Festival {
            id: "saga-dawa".into(),
            name: "Saga Dawa".into(),
            date: ymd(2027, 5, 20),
            monastery: "Pemayangtse Monastery".into(),
            description: "Sacred month commemorating Buddha's birth, enlightenment, and \
                parinirvana."
                .into(),
            status: FestivalStatus::Upcoming,
            has_livestream: true,
            emblem: "🌸".into(),
        },
        Festival {
            id: "pang-lhabsol".into(),
            name: "Pang Lhabsol".into(),
            date: ymd(2026, 8, 27),
            monastery: "Enchey Monastery".into(),
            description: "Unique to Sikkim, celebrating the guardian deity of Mount \
                Kanchenjunga."
                .into(),
            status: FestivalStatus::Past,
            has_livestream: false,
            emblem: "🏔️".into(),
        },
    ]
}

fn builtin_homestays() -> Vec<Homestay> {
    vec![
        Homestay {
            id: "pema-house".into(),
            name: "Pema's Traditional Home".into(),
            host: "Pema Lhamo".into(),
            location: "Near Rumtek Monastery".into(),
            price_per_night: 1500,
            rating: 4.9,
            amenities: vec![
                "Traditional meals".into(),
                "Mountain view".into(),
                "Cultural stories".into(),
            ],
            description: "Experience authentic Sikkimese culture in a traditional home with \
                panoramic mountain views."
                .into(),
            image: "https://images.unsplash.com/photo-1611426663925-b6ceddb3a4d6?w=1080".into(),
        },
        Homestay {
            id: "tashi-retreat".into(),
            name: "Tashi Mountain Retreat".into(),
            host: "Tashi Norbu".into(),
            location: "Enchey Monastery vicinity".into(),
            price_per_night: 2200,
            rating: 4.8,
            amenities: vec![
                "Meditation room".into(),
                "Organic garden".into(),
                "Yoga sessions".into(),
            ],
            description: "Peaceful retreat offering meditation practices and organic local \
                cuisine."
                .into(),
            image: "https://images.unsplash.com/photo-1611426663925-b6ceddb3a4d6?w=1080".into(),
        },
    ]
}

fn builtin_workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            id: "thangka-painting".into(),
            name: "Traditional Thangka Painting".into(),
            instructor: "Lama Norbu".into(),
            duration: "3 days".into(),
            price: 4500,
            max_participants: 8,
            description: "Learn the sacred art of Thangka painting with traditional \
                techniques and spiritual significance."
                .into(),
            emblem: "🎨".into(),
        },
        Workshop {
            id: "meditation-retreat".into(),
            name: "Mindfulness Meditation".into(),
            instructor: "Sister Dolma".into(),
            duration: "5 days".into(),
            price: 3000,
            max_participants: 12,
            description: "Immerse yourself in Buddhist meditation practices in a serene \
                monastery setting."
                .into(),
            emblem: "🧘‍♀️".into(),
        },
        Workshop {
            id: "cooking-class".into(),
            name: "Sikkimese Cooking".into(),
            instructor: "Ama Yangchen".into(),
            duration: "1 day".into(),
            price: 1200,
            max_participants: 6,
            description: "Master traditional Sikkimese recipes using local ingredients and \
                ancient techniques."
                .into(),
            emblem: "🍲".into(),
        },
    ]
}

fn builtin_guides() -> Vec<Guide> {
    vec![
        Guide {
            id: "tenzin-guide".into(),
            name: "Tenzin Norbu".into(),
            years_experience: 8,
            languages: vec![
                "English".into(),
                "Hindi".into(),
                "Nepali".into(),
                "Bhutia".into(),
            ],
            specialties: vec![
                "Monastery Tours".into(),
                "Buddhist Philosophy".into(),
                "Cultural Heritage".into(),
            ],
            price_per_day: 2500,
            rating: 4.9,
            review_count: 156,
            description: "Certified cultural guide with deep knowledge of Buddhist \
                traditions and monastery history. Fluent storyteller who brings ancient \
                wisdom to life."
                .into(),
            availability: GuideAvailability::Available,
            phone: "+91-9832-567-890".into(),
        },
        Guide {
            id: "dolma-guide".into(),
            name: "Dolma Sherpa".into(),
            years_experience: 12,
            languages: vec![
                "English".into(),
                "Hindi".into(),
                "Sherpa".into(),
                "Tibetan".into(),
            ],
            specialties: vec![
                "Trekking".into(),
                "Mountain Monasteries".into(),
                "Adventure Tours".into(),
            ],
            price_per_day: 3200,
            rating: 4.8,
            review_count: 203,
            description: "Expert mountain guide specializing in high-altitude monastery \
                visits and spiritual trekking experiences."
                .into(),
            availability: GuideAvailability::Available,
            phone: "+91-9876-543-210".into(),
        },
        Guide {
            id: "pemba-guide".into(),
            name: "Pemba Tamang".into(),
            years_experience: 6,
            languages: vec![
                "English".into(),
                "Hindi".into(),
                "Tamang".into(),
                "Gurung".into(),
            ],
            specialties: vec![
                "Photography Tours".into(),
                "Wildlife Monasteries".into(),
                "Eco-Tourism".into(),
            ],
            price_per_day: 2800,
            rating: 4.7,
            review_count: 89,
            description: "Nature enthusiast and photographer who combines monastery visits \
                with stunning landscape photography opportunities."
                .into(),
            availability: GuideAvailability::Busy("until Dec 20".into()),
            phone: "+91-9123-456-789".into(),
        },
        Guide {
            id: "lobsang-guide".into(),
            name: "Lobsang Wangdu".into(),
            years_experience: 15,
            languages: vec![
                "English".into(),
                "Hindi".into(),
                "Tibetan".into(),
                "Dzongkha".into(),
            ],
            specialties: vec![
                "Sacred Rituals".into(),
                "Meditation Guidance".into(),
                "Ancient Practices".into(),
            ],
            price_per_day: 4000,
            rating: 5.0,
            review_count: 274,
            description: "Former monk turned guide with unparalleled knowledge of sacred \
                rituals and meditation practices. Provides deeply spiritual experiences."
                .into(),
            availability: GuideAvailability::Available,
            phone: "+91-9999-123-456".into(),
        },
    ]
}

fn builtin_volunteer_roles() -> Vec<VolunteerRole> {
    vec![
        VolunteerRole {
            id: "maintenance".into(),
            title: "Monastery Maintenance".into(),
            summary: "Help maintain the sacred spaces through cleaning and basic upkeep \
                work."
                .into(),
            schedule: "Every weekend".into(),
            hours: "6:00 AM - 9:00 AM".into(),
            capacity: "5-10 volunteers needed".into(),
            emblem: "🧹".into(),
        },
        VolunteerRole {
            id: "eco-treks".into(),
            title: "Eco-Tourism Treks".into(),
            summary: "Guide eco-conscious tourists on sustainable treks around monasteries."
                .into(),
            schedule: "Flexible schedule".into(),
            hours: "Full day commitment".into(),
            capacity: "2-3 guides per trek".into(),
            emblem: "🌱".into(),
        },
        VolunteerRole {
            id: "teaching".into(),
            title: "Teaching Support".into(),
            summary: "Help local children with English and basic computer skills.".into(),
            schedule: "Weekdays".into(),
            hours: "3:00 PM - 5:00 PM".into(),
            capacity: "Native speakers preferred".into(),
            emblem: "📚".into(),
        },
        VolunteerRole {
            id: "documentation".into(),
            title: "Cultural Documentation".into(),
            summary: "Help document oral histories, traditional songs, and cultural \
                practices."
                .into(),
            schedule: "Project-based".into(),
            hours: "Flexible hours".into(),
            capacity: "Media skills appreciated".into(),
            emblem: "🎭".into(),
        },
    ]
}

fn builtin_emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            label: "Police".into(),
            number: "100".into(),
            note: "All of Sikkim".into(),
        },
        EmergencyContact {
            label: "Ambulance".into(),
            number: "102".into(),
            note: "Medical emergencies".into(),
        },
        EmergencyContact {
            label: "Tourist Helpline".into(),
            number: "1363".into(),
            note: "24-hour assistance for visitors".into(),
        },
        EmergencyContact {
            label: "STNM Hospital, Gangtok".into(),
            number: "+91-3592-222-059".into(),
            note: "Nearest hospital to Rumtek and Enchey".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_rumtek_returns_exactly_rumtek() {
        let catalog = Catalog::builtin();
        let hits = catalog.search_monasteries("rumtek");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "rumtek");
    }

    #[test]
    fn search_blank_returns_all_in_order() {
        let catalog = Catalog::builtin();
        let all: Vec<_> = catalog.monasteries().iter().map(|m| &m.id).collect();
        let hits: Vec<_> = catalog.search_monasteries("").iter().map(|m| &m.id).collect();
        assert_eq!(hits, all);

        // Whitespace-only behaves like empty
        let hits: Vec<_> = catalog.search_monasteries("   ").iter().map(|m| &m.id).collect();
        assert_eq!(hits, all);
    }

    #[test]
    fn search_no_match_returns_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.search_monasteries("zzz").is_empty());
    }

    #[test]
    fn search_matches_location_and_tradition() {
        let catalog = Catalog::builtin();
        let by_location = catalog.search_monasteries("pelling");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "pemayangtse");

        let by_tradition = catalog.search_monasteries("nyingma");
        assert_eq!(by_tradition.len(), 2);
    }

    #[test]
    fn monastery_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.monastery("rumtek").map(|m| m.name.as_str()),
            Some("Rumtek Monastery"));
        assert!(catalog.monastery("nowhere").is_none());
    }

    #[test]
    fn festivals_split_by_status() {
        let catalog = Catalog::builtin();
        let upcoming = catalog.upcoming_festivals();
        let past = catalog.past_festivals();
        assert_eq!(upcoming.len() + past.len(), catalog.festivals().len());
        assert!(upcoming.iter().all(|f| f.status == FestivalStatus::Upcoming));
        assert!(past.iter().all(|f| f.status == FestivalStatus::Past));
    }

    #[test]
    fn festivals_on_matches_exact_date() {
        let catalog = Catalog::builtin();
        let losar = catalog.festival("losar").expect("losar in catalog");
        let on_day = catalog.festivals_on(losar.date);
        assert!(on_day.iter().any(|f| f.id == "losar"));

        let quiet_day = ymd(2026, 1, 1);
        assert!(catalog.festivals_on(quiet_day).is_empty());
    }

    #[test]
    fn upcoming_livestreams_are_upcoming_and_streamable() {
        let catalog = Catalog::builtin();
        let streams = catalog.upcoming_livestreams();
        assert!(!streams.is_empty());
        assert!(streams
            .iter()
            .all(|f| f.has_livestream && f.status == FestivalStatus::Upcoming));

        // Past festivals never appear, streamable or not
        assert!(streams.iter().all(|f| f.id != "pang-lhabsol"));
    }

    #[test]
    fn next_livestream_is_earliest_upcoming_stream() {
        let catalog = Catalog::builtin();
        let next = catalog.next_livestream().expect("a stream is scheduled");
        assert_eq!(next.id, "losar");
        assert!(next.has_livestream);
    }

    #[test]
    fn guide_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.guide("tenzin-guide").is_some());
        assert!(catalog.guide("nobody").is_none());
    }
}
