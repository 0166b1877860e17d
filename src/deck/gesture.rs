/// Minimum horizontal travel, in logical points, for a motion to count as a
/// swipe, and the longest it may take. Slower or shorter motions are taps or
/// scroll noise and produce no intent.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;
pub const MAX_SWIPE_SECS: f32 = 0.3;

/// One completed touch motion: horizontal displacement from touch-down to
/// touch-up and the elapsed time between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSample {
    pub dx: f32,
    pub elapsed_secs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

/// Classifies a raw touch motion. A leftward swipe pulls the next card in
/// (advance); a rightward swipe pulls the previous one back (retreat).
pub fn classify_swipe(sample: SwipeSample) -> Option<NavIntent> {
    if sample.elapsed_secs > MAX_SWIPE_SECS {
        return None;
    }

    if sample.dx <= -MIN_SWIPE_DISTANCE {
        Some(NavIntent::Advance)
    } else if sample.dx >= MIN_SWIPE_DISTANCE {
        Some(NavIntent::Retreat)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftward_swipe_advances() {
        let sample = SwipeSample { dx: -80.0, elapsed_secs: 0.15 };
        assert_eq!(classify_swipe(sample), Some(NavIntent::Advance));
    }

    #[test]
    fn test_rightward_swipe_retreats() {
        let sample = SwipeSample { dx: 120.0, elapsed_secs: 0.2 };
        assert_eq!(classify_swipe(sample), Some(NavIntent::Retreat));
    }

    #[test]
    fn test_short_motion_is_not_a_swipe() {
        let sample = SwipeSample { dx: -30.0, elapsed_secs: 0.1 };
        assert_eq!(classify_swipe(sample), None);
    }

    #[test]
    fn test_slow_motion_is_not_a_swipe() {
        let sample = SwipeSample { dx: -200.0, elapsed_secs: 0.8 };
        assert_eq!(classify_swipe(sample), None);
    }

    #[test]
    fn test_threshold_boundaries() {
        // Exactly at the distance threshold counts; exactly at the time limit counts.
        assert_eq!(
            classify_swipe(SwipeSample { dx: -MIN_SWIPE_DISTANCE, elapsed_secs: MAX_SWIPE_SECS }),
            Some(NavIntent::Advance)
        );
        assert_eq!(
            classify_swipe(SwipeSample { dx: MIN_SWIPE_DISTANCE, elapsed_secs: 0.0 }),
            Some(NavIntent::Retreat)
        );
    }
}
