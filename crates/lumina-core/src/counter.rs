//! Cosmetic join counter.
//!
//! Not a count of real submissions: a fixed seed nudged upward on a timer
//! to keep the social-proof line alive while the form is visible.

use std::time::Duration;

use rand::Rng;

/// Value the counter starts from on every page load.
pub const JOIN_COUNT_SEED: u32 = 2_847;

/// How often the counter ticks while the form is showing.
pub const JOIN_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Largest increment a single tick may add.
pub const MAX_TICK_INCREMENT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinCounter {
    count: u32,
}

impl JoinCounter {
    pub fn new() -> Self {
        Self { count: JOIN_COUNT_SEED }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Bump the counter by a random amount in `[0, MAX_TICK_INCREMENT]`.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.count += rng.random_range(0..=MAX_TICK_INCREMENT);
    }
}

impl Default for JoinCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a count with thousands separators ("2847" → "2,847").
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_counter_starts_at_seed() {
        assert_eq!(JoinCounter::new().count(), JOIN_COUNT_SEED);
    }

    #[test]
    fn test_tick_increment_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counter = JoinCounter::new();
        for _ in 0..200 {
            let before = counter.count();
            counter.tick(&mut rng);
            let added = counter.count() - before;
            assert!(added <= MAX_TICK_INCREMENT, "tick added {}", added);
        }
        // Monotone: ticks never decrease the count.
        assert!(counter.count() >= JOIN_COUNT_SEED);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2_847), "2,847");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
