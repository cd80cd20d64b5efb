//! Gravity countdown, measured in engine ticks

use serde::{Deserialize, Serialize};

use crate::types::{GRAVITY_LEVEL, MAX_LEVEL};

/// Ticks per row for a level, clamped at [`MAX_LEVEL`]
pub fn ticks_for_level(level: u32) -> u32 {
    GRAVITY_LEVEL[level.min(MAX_LEVEL) as usize]
}

/// Countdown until the falling piece is pulled down one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gravity {
    ticks_remaining: i32,
}

impl Gravity {
    pub fn new(level: u32) -> Self {
        let mut gravity = Self { ticks_remaining: 0 };
        gravity.reset(level);
        gravity
    }

    pub(crate) fn from_ticks(ticks_remaining: i32) -> Self {
        Self { ticks_remaining }
    }

    pub fn ticks_remaining(&self) -> i32 {
        self.ticks_remaining
    }

    /// Reseed from the level table
    pub fn reset(&mut self, level: u32) {
        self.ticks_remaining = ticks_for_level(level) as i32;
    }

    /// Count one tick down; true when a gravity step is due
    ///
    /// The counter keeps falling below zero until [`Gravity::reset`], so a
    /// piece that could not move stays due on the next tick too.
    pub fn tick(&mut self) -> bool {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        self.ticks_remaining <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_for_level() {
        assert_eq!(ticks_for_level(0), 50);
        assert_eq!(ticks_for_level(10), 30);
        assert_eq!(ticks_for_level(19), 4);
        assert_eq!(ticks_for_level(42), 4);
    }

    #[test]
    fn test_due_after_level_ticks() {
        let mut gravity = Gravity::new(19);
        assert!(!gravity.tick());
        assert!(!gravity.tick());
        assert!(!gravity.tick());
        assert!(gravity.tick());
        assert!(gravity.tick());
        assert_eq!(gravity.ticks_remaining(), -1);

        gravity.reset(18);
        assert_eq!(gravity.ticks_remaining(), 8);
    }

    #[test]
    fn test_overdue_counter_saturates() {
        let mut gravity = Gravity::from_ticks(i32::MIN);
        assert!(gravity.tick());
        assert_eq!(gravity.ticks_remaining(), i32::MIN);
    }
}
