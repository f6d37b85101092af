//! Festival reminders.
//!
//! Client-local and unpersisted, like the gratitude wall. Setting a
//! reminder is idempotent and reminders only accumulate; there is no
//! way to clear one short of relaunching.

/// Set of festival ids the visitor asked to be reminded about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReminderSet {
    festival_ids: Vec<String>,
}

impl ReminderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers a festival. Setting the same reminder twice is a no-op.
    pub fn set(&mut self, festival_id: &str) {
        if !self.contains(festival_id) {
            tracing::debug!(festival = festival_id, "Reminder set");
            self.festival_ids.push(festival_id.to_string());
        }
    }

    pub fn contains(&self, festival_id: &str) -> bool {
        self.festival_ids.iter().any(|id| id == festival_id)
    }

    pub fn len(&self) -> usize {
        self.festival_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.festival_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_idempotent() {
        let mut reminders = ReminderSet::new();
        reminders.set("losar");
        reminders.set("losar");
        assert_eq!(reminders.len(), 1);
        assert!(reminders.contains("losar"));
        assert!(!reminders.contains("saga-dawa"));
    }

    #[test]
    fn reminders_accumulate() {
        let mut reminders = ReminderSet::new();
        reminders.set("losar");
        reminders.set("saga-dawa");
        assert_eq!(reminders.len(), 2);
    }
}
