//! Timing arithmetic shared by the animation behaviors.
//!
//! Everything here is plain math over millisecond/second values so it can be
//! unit tested off the browser. The components feed in `performance.now()`
//! readings and apply the results through the DOM.

/// Columns in the work grid; stagger runs diagonally across this width.
pub const GRID_COLUMNS: usize = 4;
/// Delay after page load before the first thumbnail may fade in, ms.
pub const STAGGER_BASE_MS: f64 = 200.0;
/// Extra delay per diagonal step (column + row), ms.
pub const STAGGER_STEP_MS: f64 = 70.0;
/// Length of the thumbnail fade transition, ms. Once a cell's fade has had
/// this long past its remaining delay, its transition-delay is reset so
/// hover effects respond instantly.
pub const FADE_RESET_MS: u32 = 900;

/// Stat counter animation length, ms.
pub const COUNTER_DURATION_MS: f64 = 1500.0;

/// Assumed duration when a preview video's metadata never reported one, s.
pub const ASSUMED_DURATION_SECS: f64 = 30.0;
/// Playhead positions under this are treated as "never seeked", s.
pub const SEEK_EPSILON_SECS: f64 = 0.5;
/// Delay before retrying a seek that landed back at zero, ms.
pub const SEEK_RETRY_MS: u32 = 400;
/// Last-chance seek attempt after initial setup, ms.
pub const SEEK_FALLBACK_MS: u32 = 1500;

/// How long after close the lightbox keeps its media source, ms. Covers the
/// close transition before buffering is cut off.
pub const LIGHTBOX_UNLOAD_MS: u32 = 350;

/// Scroll offset past which the nav switches to its scrolled appearance, px.
pub const NAV_SCROLL_THRESHOLD: f64 = 80.0;

/// Moment a thumbnail cell is allowed to begin fading in: a diagonal wave
/// over the grid, anchored to page load rather than image arrival order.
pub fn stagger_deadline(anchor_ms: f64, index: usize) -> f64 {
    let col = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    anchor_ms + STAGGER_BASE_MS + (col + row) as f64 * STAGGER_STEP_MS
}

/// Time still to wait before a cell's deadline, clamped at zero for cells
/// whose image arrived late.
pub fn remaining_delay(deadline_ms: f64, now_ms: f64) -> f64 {
    (deadline_ms - now_ms).max(0.0)
}

/// Cubic ease-out: fast start, settling as progress approaches 1.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value a stat counter displays `elapsed_ms` into its run. Monotone for a
/// non-negative target and lands exactly on `target` once the duration is up.
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (ease_out_cubic(progress) * f64::from(target)).round() as u32
}

/// Frame a preview video should rest on, in seconds. An explicit positive
/// override wins; otherwise 10% of the duration with a one second floor,
/// assuming thirty seconds when the duration is not known.
pub fn seek_target(explicit: Option<f64>, duration_secs: f64) -> f64 {
    if let Some(secs) = explicit {
        if secs > 0.0 {
            return secs;
        }
    }
    let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        ASSUMED_DURATION_SECS
    };
    (duration * 0.1).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stagger_deadline_formula() {
        // col + row for index 5 is 1 + 1
        assert_eq!(stagger_deadline(0.0, 0), 200.0);
        assert_eq!(stagger_deadline(0.0, 3), 200.0 + 3.0 * 70.0);
        assert_eq!(stagger_deadline(0.0, 5), 200.0 + 2.0 * 70.0);
        assert_eq!(stagger_deadline(1000.0, 4), 1000.0 + 200.0 + 70.0);
    }

    #[test]
    fn test_stagger_follows_diagonal_rank() {
        let deadlines: Vec<f64> = (0..16).map(|i| stagger_deadline(0.0, i)).collect();
        for i in 0..16 {
            for j in 0..16 {
                let rank_i = i % GRID_COLUMNS + i / GRID_COLUMNS;
                let rank_j = j % GRID_COLUMNS + j / GRID_COLUMNS;
                if rank_i < rank_j {
                    assert!(deadlines[i] < deadlines[j]);
                }
            }
        }
    }

    #[test]
    fn test_remaining_delay_clamps_at_zero() {
        assert_eq!(remaining_delay(500.0, 200.0), 300.0);
        assert_eq!(remaining_delay(500.0, 500.0), 0.0);
        assert_eq!(remaining_delay(500.0, 900.0), 0.0);
    }

    #[test]
    fn test_counter_midpoint_value() {
        // Halfway through: 1 - 0.5^3 = 0.875 of the way there.
        assert_eq!(counter_value(100, 750.0, COUNTER_DURATION_MS), 88);
    }

    #[test]
    fn test_counter_endpoints() {
        assert_eq!(counter_value(140, 0.0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(140, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 140);
        // Frames past the duration clamp rather than overshoot.
        assert_eq!(counter_value(140, COUNTER_DURATION_MS * 2.0, COUNTER_DURATION_MS), 140);
    }

    #[test]
    fn test_counter_never_exceeds_target_and_is_monotone() {
        let mut last = 0;
        for step in 0..=150 {
            let value = counter_value(97, f64::from(step) * 10.0, COUNTER_DURATION_MS);
            assert!(value >= last);
            assert!(value <= 97);
            last = value;
        }
        assert_eq!(last, 97);
    }

    #[test]
    fn test_seek_target_explicit_override_wins() {
        assert_eq!(seek_target(Some(7.5), 20.0), 7.5);
        // Non-positive overrides fall through to the derived value.
        assert_eq!(seek_target(Some(0.0), 20.0), 2.0);
        assert_eq!(seek_target(Some(-3.0), 20.0), 2.0);
    }

    #[test]
    fn test_seek_target_derived_from_duration() {
        assert_eq!(seek_target(None, 20.0), 2.0);
        // Short clips floor at one second.
        assert_eq!(seek_target(None, 5.0), 1.0);
        // Unknown duration assumes thirty seconds.
        assert_eq!(seek_target(None, f64::NAN), 3.0);
        assert_eq!(seek_target(None, 0.0), 3.0);
        assert_eq!(seek_target(None, f64::INFINITY), 3.0);
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Ease-out: past the halfway mark well before half the time is spent.
        assert!(ease_out_cubic(0.25) > 0.25);
    }
}
