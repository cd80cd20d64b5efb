//! Scoring module - classic line-clear points and level progression
//!
//! Points for a clear are `LINE_SCORES[lines] * (level + 1)`. Every
//! [`LINES_PER_LEVEL`] lines the level rises by one, up to [`MAX_LEVEL`].

use serde::{Deserialize, Serialize};

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL};

/// Calculate line clear score
/// lines: number of lines cleared (0-4; anything larger scores nothing)
/// level: current level (0-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    let base_score = LINE_SCORES.get(lines as usize).copied().unwrap_or(0);
    base_score.saturating_mul(level.saturating_add(1))
}

/// Points, level and the countdown to the next level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub points: u32,
    pub level: u32,
    pub lines_remaining: u32,
}

/// What a single call to [`Progress::adjust`] changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points_awarded: u32,
    pub leveled_up: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            points: 0,
            level: 0,
            lines_remaining: LINES_PER_LEVEL,
        }
    }

    /// Account for `lines_cleared` lines cleared at the current level
    pub fn adjust(&mut self, lines_cleared: u32) -> ScoreResult {
        let points_awarded = calculate_line_score(lines_cleared, self.level);
        self.points = self.points.saturating_add(points_awarded);

        let leveled_up = lines_cleared > 0 && lines_cleared >= self.lines_remaining;
        if leveled_up {
            self.level = self.level.saturating_add(1).min(MAX_LEVEL);
            self.lines_remaining = LINES_PER_LEVEL.saturating_sub(lines_cleared);
        } else {
            self.lines_remaining -= lines_cleared;
        }

        ScoreResult {
            points_awarded,
            leveled_up,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        // Level 0
        assert_eq!(calculate_line_score(0, 0), 0);
        assert_eq!(calculate_line_score(1, 0), 40);
        assert_eq!(calculate_line_score(2, 0), 100);
        assert_eq!(calculate_line_score(3, 0), 300);
        assert_eq!(calculate_line_score(4, 0), 1200);

        // Level 5
        assert_eq!(calculate_line_score(1, 5), 40 * 6);
        assert_eq!(calculate_line_score(4, 5), 1200 * 6);

        assert_eq!(calculate_line_score(5, 0), 0);
    }

    #[test]
    fn test_line_score_saturates() {
        assert_eq!(calculate_line_score(4, u32::MAX), u32::MAX);
        assert_eq!(calculate_line_score(1, u32::MAX - 1), u32::MAX);
    }

    #[test]
    fn test_two_lines_at_level_zero() {
        let mut progress = Progress::new();
        let result = progress.adjust(2);
        assert_eq!(result.points_awarded, 100);
        assert_eq!(progress.points, 100);
        assert_eq!(progress.lines_remaining, 8);
        assert_eq!(progress.level, 0);
    }

    #[test]
    fn test_four_lines_at_level_three() {
        let mut progress = Progress {
            points: 10,
            level: 3,
            lines_remaining: 10,
        };
        progress.adjust(4);
        assert_eq!(progress.points, 10 + 4800);
        assert_eq!(progress.lines_remaining, 6);
    }

    #[test]
    fn test_level_advance_resets_countdown() {
        let mut progress = Progress {
            points: 0,
            level: 0,
            lines_remaining: 3,
        };
        let result = progress.adjust(5);
        assert!(result.leveled_up);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.lines_remaining, 5);
    }

    #[test]
    fn test_level_caps_at_max() {
        let mut progress = Progress {
            points: 0,
            level: MAX_LEVEL,
            lines_remaining: 1,
        };
        progress.adjust(1);
        assert_eq!(progress.level, MAX_LEVEL);
        assert_eq!(progress.lines_remaining, 9);
    }

    #[test]
    fn test_no_clear_changes_nothing() {
        let mut progress = Progress::new();
        assert_eq!(progress.adjust(0), ScoreResult::default());
        assert_eq!(progress, Progress::new());
    }

    #[test]
    fn test_countdown_decrements() {
        let mut progress = Progress::new();
        progress.adjust(1);
        progress.adjust(3);
        assert_eq!(progress.lines_remaining, 6);
        assert_eq!(progress.points, 40 + 300);
    }
}
