use crate::input::{Direction, Point, Viewport};

/// Acceleration-including-gravity sample, as a motion feeder reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accel {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Accel {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Classifies pointer motion by delta against the previously seen sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one pointer sample. Deltas at or below `threshold` on both axes
    /// are noise; otherwise the dominant axis wins and its sign picks the
    /// direction. The stored sample is updated unconditionally.
    pub fn observe(&mut self, point: Point, threshold: f64) -> Option<Direction> {
        let (dx, dy) = (point.x - self.last.x, point.y - self.last.y);
        self.last = point;

        if dx.abs() <= threshold && dy.abs() <= threshold {
            return None;
        }

        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(direction)
    }
}

/// Maps an absolute touch coordinate to a direction by viewport quadrant.
/// Boundaries are closed on the lower/left edge, so a point exactly on a
/// half-line resolves toward Up/Down.
pub fn classify_touch(point: Point, viewport: Viewport) -> Direction {
    let (half_w, half_h) = (viewport.width / 2.0, viewport.height / 2.0);

    if point.x < half_w && point.y < half_h {
        Direction::Up
    } else if point.x >= half_w && point.y >= half_h {
        Direction::Down
    } else if point.x < half_w {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// A touch going down (press-and-hold included) always reads as a shake,
/// whatever its coordinates.
pub fn classify_touch_start() -> Direction {
    Direction::Shake
}

/// A hard jolt on any axis reads as a shake; anything gentler is ignored.
pub fn classify_motion(accel: Accel, limit: f64) -> Option<Direction> {
    let jolted = accel.x.abs() > limit || accel.y.abs() > limit || accel.z.abs() > limit;
    jolted.then_some(Direction::Shake)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 10.0;

    fn tracker_at(x: f64, y: f64) -> PointerTracker {
        let mut tracker = PointerTracker::new();
        tracker.observe(Point::new(x, y), 0.0);
        tracker
    }

    #[test]
    fn test_small_pointer_delta_is_noise() {
        let mut tracker = tracker_at(100.0, 100.0);
        assert_eq!(tracker.observe(Point::new(105.0, 93.0), THRESHOLD), None);
        assert_eq!(tracker.observe(Point::new(105.0, 103.0), THRESHOLD), None);
    }

    #[test]
    fn test_pointer_delta_on_threshold_is_noise() {
        let mut tracker = tracker_at(0.0, 0.0);
        assert_eq!(tracker.observe(Point::new(10.0, 10.0), THRESHOLD), None);
    }

    #[test]
    fn test_dominant_horizontal_axis_wins() {
        let mut tracker = tracker_at(100.0, 100.0);
        assert_eq!(
            tracker.observe(Point::new(140.0, 120.0), THRESHOLD),
            Some(Direction::Right)
        );
        let mut tracker = tracker_at(100.0, 100.0);
        assert_eq!(
            tracker.observe(Point::new(60.0, 120.0), THRESHOLD),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_dominant_vertical_axis_wins() {
        let mut tracker = tracker_at(100.0, 100.0);
        assert_eq!(
            tracker.observe(Point::new(110.0, 160.0), THRESHOLD),
            Some(Direction::Down)
        );
        let mut tracker = tracker_at(100.0, 100.0);
        assert_eq!(
            tracker.observe(Point::new(110.0, 40.0), THRESHOLD),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_noise_sample_still_updates_stored_position() {
        let mut tracker = tracker_at(100.0, 100.0);
        // Two sub-threshold nudges in the same direction never accumulate
        // into a classified move, because the base advances every sample.
        assert_eq!(tracker.observe(Point::new(108.0, 100.0), THRESHOLD), None);
        assert_eq!(tracker.observe(Point::new(116.0, 100.0), THRESHOLD), None);
    }

    #[test]
    fn test_touch_quadrants() {
        let viewport = Viewport::new(800.0, 600.0);
        let cases = vec![
            (Point::new(100.0, 100.0), Direction::Up),
            (Point::new(700.0, 500.0), Direction::Down),
            (Point::new(100.0, 500.0), Direction::Left),
            (Point::new(700.0, 100.0), Direction::Right),
        ];
        for (point, expected) in cases {
            assert_eq!(classify_touch(point, viewport), expected);
        }
    }

    #[test]
    fn test_touch_boundary_resolves_down() {
        let viewport = Viewport::new(800.0, 600.0);
        // Exactly on both half-lines: the closed right/bottom test wins.
        assert_eq!(
            classify_touch(Point::new(400.0, 300.0), viewport),
            Direction::Down
        );
        // On the vertical half-line only, lower half.
        assert_eq!(
            classify_touch(Point::new(400.0, 100.0), viewport),
            Direction::Right
        );
    }

    #[test]
    fn test_touch_start_is_always_shake() {
        assert_eq!(classify_touch_start(), Direction::Shake);
    }

    #[test]
    fn test_motion_below_limit_is_ignored() {
        assert_eq!(classify_motion(Accel::new(3.0, -9.8, 4.0), 15.0), None);
    }

    #[test]
    fn test_motion_any_axis_over_limit_is_shake() {
        for accel in [
            Accel::new(16.0, 0.0, 0.0),
            Accel::new(0.0, -20.0, 0.0),
            Accel::new(0.0, 0.0, 15.1),
        ] {
            assert_eq!(classify_motion(accel, 15.0), Some(Direction::Shake));
        }
    }
}
