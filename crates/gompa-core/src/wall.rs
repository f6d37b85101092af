//! The gratitude wall.
//!
//! An append-only, client-local list of notes. Nothing is persisted;
//! the wall is seeded with a couple of notes at startup and resets on
//! relaunch.

use chrono::{Duration, Utc};

use crate::types::{GratitudeNote, NoteReply, ReplyRole};

/// Append-only list of gratitude notes with strictly increasing ids.
#[derive(Debug, Clone, PartialEq)]
pub struct GratitudeWall {
    notes: Vec<GratitudeNote>,
    next_id: u64,
}

impl GratitudeWall {
    /// An empty wall.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// The wall as shipped: two notes with replies from a monk and a host.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut wall = Self::new();

        wall.push_seed(GratitudeNote {
            id: 0,
            author: "Raj from Mumbai".into(),
            message: "The homestay with Pema's family was incredible. I learned so much \
                about Sikkimese culture!"
                .into(),
            posted_at: now - Duration::days(7),
            replies: vec![NoteReply {
                author: "Pema Lhamo".into(),
                message: "You are always welcome in our home, dear friend! 🏠".into(),
                role: Some(ReplyRole::Local),
            }],
        });

        wall.push_seed(GratitudeNote {
            id: 0,
            author: "Sarah from Australia".into(),
            message: "The peace I found at Rumtek Monastery has changed my life. Thank you \
                for preserving this sacred space."
                .into(),
            posted_at: now - Duration::days(2),
            replies: vec![NoteReply {
                author: "Lama Tenzin".into(),
                message: "May the seeds of peace you found here grow and flourish in your \
                    daily life. 🙏"
                    .into(),
                role: Some(ReplyRole::Monk),
            }],
        });

        wall
    }

    /// Notes in display order, newest first.
    pub fn notes(&self) -> &[GratitudeNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Posts a note to the top of the wall and returns its id.
    ///
    /// Whitespace-only messages are rejected; the wall is unchanged and
    /// `None` is returned.
    pub fn post(&mut self, author: &str, message: &str) -> Option<u64> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, author, "Note posted to gratitude wall");
        self.notes.insert(
            0,
            GratitudeNote {
                id,
                author: author.to_string(),
                message: message.to_string(),
                posted_at: Utc::now(),
                replies: vec![],
            },
        );
        Some(id)
    }

    /// Seeds prepend like posts so the newest seed renders first.
    fn push_seed(&mut self, mut note: GratitudeNote) {
        note.id = self.next_id;
        self.next_id += 1;
        self.notes.insert(0, note);
    }
}

impl Default for GratitudeWall {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_prepends_exactly_one_note() {
        let mut wall = GratitudeWall::seeded();
        let before = wall.len();

        let id = wall.post("Anonymous Visitor", "What a beautiful place");
        assert!(id.is_some());
        assert_eq!(wall.len(), before + 1);
        assert_eq!(wall.notes()[0].message, "What a beautiful place");
        assert!(wall.notes()[0].replies.is_empty());
    }

    #[test]
    fn post_trims_message() {
        let mut wall = GratitudeWall::new();
        wall.post("Visitor", "  thank you  ");
        assert_eq!(wall.notes()[0].message, "thank you");
    }

    #[test]
    fn blank_post_is_a_no_op() {
        let mut wall = GratitudeWall::seeded();
        let before = wall.clone();

        assert!(wall.post("Visitor", "").is_none());
        assert!(wall.post("Visitor", "   \n\t ").is_none());
        assert_eq!(wall, before);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut wall = GratitudeWall::seeded();
        let first = wall.post("A", "one").unwrap();
        let second = wall.post("B", "two").unwrap();
        assert!(second > first);

        // Newest-first order means ids strictly decrease down the wall
        let ids: Vec<_> = wall.notes().iter().map(|n| n.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn seeded_wall_shows_newest_first() {
        let wall = GratitudeWall::seeded();
        assert_eq!(wall.len(), 2);
        assert_eq!(wall.notes()[0].author, "Sarah from Australia");
        assert!(wall.notes()[0].posted_at > wall.notes()[1].posted_at);
    }
}
