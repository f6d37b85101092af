//! Prayer-wheel blessings.

/// The fixed blessing list the prayer wheel cycles through.
pub const BLESSINGS: [&str; 5] = [
    "May your journey bring peace to your heart 🙏",
    "May you find wisdom in the mountain silence 🏔️",
    "May compassion guide your path forward 💝",
    "May the dharma illuminate your way ✨",
    "May all beings be happy and free from suffering 🕊️",
];

/// Deterministic round-robin over [`BLESSINGS`].
///
/// Each spin yields the next blessing in order, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlessingWheel {
    next: usize,
}

impl BlessingWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The blessing for this spin.
    pub fn spin(&mut self) -> &'static str {
        let blessing = BLESSINGS[self.next];
        self.next = (self.next + 1) % BLESSINGS.len();
        blessing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spins_cycle_through_the_list_in_order() {
        let mut wheel = BlessingWheel::new();
        for blessing in BLESSINGS {
            assert_eq!(wheel.spin(), blessing);
        }
        // Wraps back to the start
        assert_eq!(wheel.spin(), BLESSINGS[0]);
    }
}
