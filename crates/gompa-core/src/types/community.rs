//! Gratitude wall notes.
//!
//! Notes are client-local and unpersisted; they live for the lifetime
//! of the process and reset on relaunch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge shown next to a reply author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyRole {
    Monk,
    Local,
}

impl ReplyRole {
    pub fn label(&self) -> &'static str {
        match self {
            ReplyRole::Monk => "Monk",
            ReplyRole::Local => "Local",
        }
    }
}

/// A reply under a gratitude note, usually from a monk or host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteReply {
    pub author: String,
    pub message: String,
    pub role: Option<ReplyRole>,
}

/// A note on the gratitude wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeNote {
    /// Strictly increasing within the wall
    pub id: u64,
    pub author: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
    pub replies: Vec<NoteReply>,
}

impl GratitudeNote {
    /// Relative age string the wall displays ("Just now", "2d ago").
    pub fn posted_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = (now - self.posted_at).num_seconds().max(0);

        if elapsed < 60 {
            "Just now".to_string()
        } else if elapsed < 3600 {
            format!("{}m ago", elapsed / 60)
        } else if elapsed < 86400 {
            format!("{}h ago", elapsed / 3600)
        } else {
            format!("{}d ago", elapsed / 86400)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn note(posted_at: DateTime<Utc>) -> GratitudeNote {
        GratitudeNote {
            id: 1,
            author: "Visitor".into(),
            message: "Thank you".into(),
            posted_at,
            replies: vec![],
        }
    }

    #[test]
    fn posted_label_buckets() {
        let now = Utc::now();
        assert_eq!(note(now).posted_label(now), "Just now");
        assert_eq!(note(now - Duration::minutes(5)).posted_label(now), "5m ago");
        assert_eq!(note(now - Duration::hours(3)).posted_label(now), "3h ago");
        assert_eq!(note(now - Duration::days(2)).posted_label(now), "2d ago");
    }

    #[test]
    fn posted_label_clamps_future_timestamps() {
        let now = Utc::now();
        assert_eq!(note(now + Duration::hours(1)).posted_label(now), "Just now");
    }
}
