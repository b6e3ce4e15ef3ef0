//! Common utilities shared by the screen loops

use std::time::{Duration, Instant};

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Call at the end of each loop iteration with the `Instant` the frame
/// began. Sleeps the remainder of the frame budget; a terminal has no
/// vsync to pace us, so this is the only thing bounding the frame rate.
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

/// Per-frame time budget for a target frame rate.
///
/// Computed as a float reciprocal so the budget keeps its fractional
/// milliseconds; integer millisecond division would undershoot the
/// tick interval and turn very high frame rates into a busy spin.
pub fn frame_budget(target_fps: u64) -> Duration {
    Duration::from_secs_f32(1.0 / target_fps as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget_keeps_fractional_millis() {
        // 60 fps is 16.67ms, not a truncated 16ms
        let budget = frame_budget(60);
        assert!(budget > Duration::from_millis(16));
        assert!(budget < Duration::from_millis(17));

        // The budget never collapses to zero, even above 1000 fps
        assert!(frame_budget(4000) > Duration::ZERO);
    }
}
