//! Additional math helpers layered on top of `glam`.

use glam::Vec2;

/// Unit vector along `diff`, or `fallback` when `distance` is below `epsilon`.
///
/// `distance` must be `diff.length()`. The flag is `true` when the fallback was used.
pub fn normal_or_fallback(diff: Vec2, distance: f32, epsilon: f32, fallback: Vec2) -> (Vec2, bool) {
    if distance < epsilon {
        (fallback, true)
    } else {
        (diff / distance, false)
    }
}

/// Caps `dt` at `max`. The flag is `true` when the value was reduced.
pub fn clamp_time_step(dt: f32, max: Option<f32>) -> (f32, bool) {
    match max {
        Some(max) if dt > max => (max, true),
        _ => (dt, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_points_along_difference() {
        let diff = Vec2::new(-30.0, 0.0);
        let (normal, degenerate) = normal_or_fallback(diff, diff.length(), 1e-6, Vec2::NEG_Y);
        assert_eq!(normal, Vec2::NEG_X);
        assert!(!degenerate);
    }

    #[test]
    fn coincident_points_use_fallback() {
        let (normal, degenerate) = normal_or_fallback(Vec2::ZERO, 0.0, 1e-6, Vec2::NEG_Y);
        assert_eq!(normal, Vec2::NEG_Y);
        assert!(degenerate);
    }

    #[test]
    fn clamp_only_reduces() {
        assert_eq!(clamp_time_step(0.5, Some(0.1)), (0.1, true));
        assert_eq!(clamp_time_step(0.05, Some(0.1)), (0.05, false));
        assert_eq!(clamp_time_step(0.5, None), (0.5, false));
    }
}
