use std::time::Duration;

use super::config::SpeedConfig;

/// Speed level reached at `score`
pub fn level(score: u32, speed: &SpeedConfig) -> u32 {
    score / speed.speedup_every_points.max(1)
}

/// Time between ticks at `score`.
///
/// Non-increasing in `score` and never below `speed.min_tick_ms`.
pub fn tick_interval(score: u32, speed: &SpeedConfig) -> Duration {
    let reduction = u64::from(level(score, speed)).saturating_mul(speed.speedup_step_ms);
    let millis = speed
        .base_tick_ms
        .saturating_sub(reduction)
        .max(speed.min_tick_ms);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_interval_at_zero() {
        let speed = SpeedConfig::default();
        assert_eq!(tick_interval(0, &speed), Duration::from_millis(150));
        assert_eq!(tick_interval(4, &speed), Duration::from_millis(150));
        assert_eq!(tick_interval(5, &speed), Duration::from_millis(142));
    }

    #[test]
    fn test_score_twelve() {
        let speed = SpeedConfig::default();
        assert_eq!(level(12, &speed), 2);
        assert_eq!(tick_interval(12, &speed), Duration::from_millis(134));
    }

    #[test]
    fn test_floor_reached() {
        let speed = SpeedConfig::default();
        // 150 - 9 * 8 = 78, clamped to 80
        assert_eq!(tick_interval(45, &speed), Duration::from_millis(80));
        assert_eq!(tick_interval(u32::MAX, &speed), Duration::from_millis(80));
    }

    #[test]
    fn test_non_increasing_and_floored() {
        let speed = SpeedConfig::default();
        let mut previous = tick_interval(0, &speed);
        for score in 1..200 {
            let current = tick_interval(score, &speed);
            assert!(current <= previous);
            assert!(current >= Duration::from_millis(speed.min_tick_ms));
            previous = current;
        }
    }
}
