//! Progression arithmetic shared by the store and its consumers.
//!
//! Small pure functions over plain numbers so the invariants live in one
//! place: map progress stays inside the unit interval, each completed quest
//! advances the adventure by a fixed step, and goal ratios are safe against
//! zero or junk denominators.

/// Map-progress gain for one completed quest.
pub const COMPLETION_STEP: f32 = 0.1;

/// Clamp a progress scalar to [0, 1]. Non-finite input collapses to 0.
pub fn clamp_unit(p: f32) -> f32 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Advance progress by `step`, clamped to the unit interval.
pub fn advance(p: f32, step: f32) -> f32 {
    clamp_unit(clamp_unit(p) + step)
}

/// Fraction of quests completed, 0 when there are none.
pub fn completion_ratio(completed: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        completed as f32 / total as f32
    }
}

/// Percent of a savings goal reached. May exceed 100 (goals can be
/// overshot); never negative; 0 for a non-positive or non-finite goal.
pub fn goal_percent(current: f64, goal: f64) -> f64 {
    if !goal.is_finite() || goal <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / goal * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(0.42), 0.42);
        assert_eq!(clamp_unit(-0.01), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_advance_clamps_at_one() {
        assert!((advance(0.35, COMPLETION_STEP) - 0.45).abs() < 1e-6);
        assert_eq!(advance(0.95, COMPLETION_STEP), 1.0);
        assert_eq!(advance(1.0, COMPLETION_STEP), 1.0);
    }

    #[test]
    fn test_completion_ratio() {
        assert_eq!(completion_ratio(0, 0), 0.0);
        assert_eq!(completion_ratio(1, 4), 0.25);
        assert_eq!(completion_ratio(4, 4), 1.0);
    }

    #[test]
    fn test_goal_percent() {
        assert_eq!(goal_percent(7_500.0, 10_000.0), 75.0);
        assert_eq!(goal_percent(12_000.0, 10_000.0), 120.0);
        assert_eq!(goal_percent(100.0, 0.0), 0.0);
        assert_eq!(goal_percent(-50.0, 100.0), 0.0);
        assert_eq!(goal_percent(f64::NAN, 100.0), 0.0);
    }
}
