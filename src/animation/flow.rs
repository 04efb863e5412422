//! Flow marker paths
//!
//! A [`FlowPath`] is a closed loop of named legs traced once per period.
//! Each leg owns an equal slice of the period and runs in a straight line
//! from its own start point to the start point of the next leg; the last leg
//! wraps back to the first. There is no easing, so the marker's velocity
//! jumps at every leg boundary.

use cgmath::{Vector3, VectorSpace};

/// Smallest loop period accepted by [`FlowPath::new`], in seconds.
pub const MIN_PERIOD: f32 = 1.0e-3;

/// One leg of a flow loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLeg {
    pub name: &'static str,
    pub start: Vector3<f32>,
}

/// Where the marker is at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSample {
    pub position: Vector3<f32>,
    /// Zero-based index of the active leg.
    pub phase: usize,
    /// Fraction of the active leg already travelled, in `0.0..=1.0`.
    pub progress: f32,
    pub leg: &'static str,
}

impl FlowSample {
    /// Leg number as shown to the user (first leg is 1).
    pub fn phase_number(&self) -> usize {
        self.phase + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowPath {
    period: f32,
    legs: Vec<FlowLeg>,
}

impl FlowPath {
    /// Creates an empty loop with the given period in seconds.
    ///
    /// Periods that are not finite or below [`MIN_PERIOD`] are raised to it.
    pub fn new(period: f32) -> Self {
        let period = if period.is_finite() {
            period.max(MIN_PERIOD)
        } else {
            MIN_PERIOD
        };
        Self {
            period,
            legs: Vec::new(),
        }
    }

    /// Appends a leg starting at `start` (builder pattern)
    pub fn leg(mut self, name: &'static str, start: [f32; 3]) -> Self {
        self.legs.push(FlowLeg {
            name,
            start: Vector3::from(start),
        });
        self
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn phase_count(&self) -> usize {
        self.legs.len()
    }

    /// Length of one leg in seconds.
    pub fn phase_duration(&self) -> f32 {
        self.period / self.legs.len().max(1) as f32
    }

    pub fn legs(&self) -> &[FlowLeg] {
        &self.legs
    }

    pub fn waypoints(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        self.legs.iter().map(|leg| leg.start)
    }

    /// Samples the loop at elapsed time `t`.
    ///
    /// Negative and very large times are folded into `[0, period)` with a
    /// Euclidean remainder, so `sample(t)` and `sample(t + period)` agree.
    /// Returns `None` for a loop without legs.
    pub fn sample(&self, t: f32) -> Option<FlowSample> {
        let count = self.legs.len();
        if count == 0 {
            return None;
        }

        let local = t.rem_euclid(self.period);
        let duration = self.phase_duration();
        let phase = ((local / duration).floor() as usize).min(count - 1);
        let progress = ((local - phase as f32 * duration) / duration).clamp(0.0, 1.0);

        let from = self.legs[phase].start;
        let to = self.legs[(phase + 1) % count].start;

        Some(FlowSample {
            position: from.lerp(to, progress),
            phase,
            progress,
            leg: self.legs[phase].name,
        })
    }

    pub fn position_at(&self, t: f32) -> Option<Vector3<f32>> {
        self.sample(t).map(|sample| sample.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    const EPS: f32 = 1e-4;

    fn square() -> FlowPath {
        FlowPath::new(4.0)
            .leg("East", [0.0, 0.0, 0.0])
            .leg("North", [1.0, 0.0, 0.0])
            .leg("West", [1.0, 1.0, 0.0])
            .leg("South", [0.0, 1.0, 0.0])
    }

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPS
    }

    #[test]
    fn test_empty_path_has_no_sample() {
        assert!(FlowPath::new(5.0).sample(1.0).is_none());
        assert!(FlowPath::new(5.0).position_at(0.0).is_none());
    }

    #[test]
    fn test_phase_duration_divides_period() {
        let path = square();
        assert_eq!(path.phase_count(), 4);
        assert!((path.phase_duration() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_leg_interpolates_linearly() {
        let path = square();
        let sample = path.sample(0.25).unwrap();
        assert_eq!(sample.phase, 0);
        assert_eq!(sample.leg, "East");
        assert!((sample.progress - 0.25).abs() < EPS);
        assert!(close(sample.position, Vector3::new(0.25, 0.0, 0.0)));

        let sample = path.sample(1.5).unwrap();
        assert_eq!(sample.phase, 1);
        assert_eq!(sample.phase_number(), 2);
        assert!(close(sample.position, Vector3::new(1.0, 0.5, 0.0)));
    }

    #[test]
    fn test_last_leg_wraps_to_first_waypoint() {
        let path = square();
        let sample = path.sample(3.5).unwrap();
        assert_eq!(sample.leg, "South");
        assert!(close(sample.position, Vector3::new(0.0, 0.5, 0.0)));
        // just before the period ends the marker is almost home
        assert!(close(path.position_at(3.9999).unwrap(), Vector3::new(0.0, 0.0001, 0.0)));
    }

    #[test]
    fn test_sample_is_periodic() {
        let path = square();
        for t in [0.0_f32, 0.3, 1.0, 2.7, 3.99, 17.25] {
            let a = path.position_at(t).unwrap();
            let b = path.position_at(t + path.period()).unwrap();
            assert!(close(a, b), "t = {t}");
        }
    }

    #[test]
    fn test_negative_time_folds_into_period() {
        let path = square();
        let a = path.sample(-0.5).unwrap();
        let b = path.sample(3.5).unwrap();
        assert_eq!(a.phase, b.phase);
        assert!(close(a.position, b.position));
    }

    #[test]
    fn test_phase_boundaries_hit_waypoints() {
        let path = square();
        for (i, waypoint) in path.waypoints().enumerate() {
            let sample = path.sample(i as f32).unwrap();
            assert_eq!(sample.phase, i);
            assert!(close(sample.position, waypoint));
        }
    }

    #[test]
    fn test_single_leg_is_stationary() {
        let path = FlowPath::new(2.0).leg("Idle", [1.0, 2.0, 3.0]);
        assert!(close(path.position_at(0.7).unwrap(), Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_degenerate_period_is_raised() {
        assert_eq!(FlowPath::new(0.0).period(), MIN_PERIOD);
        assert_eq!(FlowPath::new(-3.0).period(), MIN_PERIOD);
        assert_eq!(FlowPath::new(f32::NAN).period(), MIN_PERIOD);
    }
}
