use std::collections::VecDeque;
use std::fmt;

use nalgebra as na;

use crate::models::body::CelestialBody;
use crate::physics::kinematics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatelliteCategory {
    Receiver,
    Transmitter,
}

impl SatelliteCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Receiver" => Some(SatelliteCategory::Receiver),
            "Transmitter" => Some(SatelliteCategory::Transmitter),
            _ => None,
        }
    }
}

impl fmt::Display for SatelliteCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SatelliteCategory::Receiver => write!(f, "Receiver"),
            SatelliteCategory::Transmitter => write!(f, "Transmitter"),
        }
    }
}

/// A satellite on a fixed-radius circular orbit around the origin.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub body: CelestialBody,
    /// Velocity components derived from `speed`/`angle` at construction.
    /// Descriptive metadata: the motion law never reads them and
    /// `advance` never updates them.
    pub velocity: na::Vector2<f64>,
    pub category: SatelliteCategory,
    pub angular_velocity: f64, // rad per simulated time unit
    pub speed: f64,
    pub angle: f64, // degrees, initial placement
    pub phase: f64, // degrees
    orbit_radius: f64,
    trajectory: VecDeque<na::Vector2<f64>>,
    trajectory_limit: Option<usize>,
}

impl Satellite {
    pub fn new(
        name: &str,
        mass: f64,
        orbit_radius: f64,
        speed: f64,
        angle: f64,
        phase: f64,
        category: SatelliteCategory,
        angular_velocity: f64,
    ) -> Self {
        let position = kinematics::initial_position(orbit_radius, angle);
        let velocity = kinematics::initial_velocity(speed, angle);
        let mut trajectory = VecDeque::new();
        trajectory.push_back(position);

        Satellite {
            body: CelestialBody::new(name, mass, position),
            velocity,
            category,
            angular_velocity,
            speed,
            angle,
            phase,
            orbit_radius,
            trajectory,
            trajectory_limit: None,
        }
    }

    /// Fixed for the satellite's whole lifetime.
    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    /// Moves the satellite along its orbit by `dt` simulated time units
    /// and records the new position in the trajectory log.
    pub fn advance(&mut self, dt: f64) {
        let next = kinematics::advance_circular(
            &self.body.position,
            self.orbit_radius,
            self.angular_velocity,
            dt,
        );
        self.body.position = next;
        self.trajectory.push_back(next);
        self.enforce_trajectory_limit();
    }

    /// Recorded positions, oldest first. The first entry is the
    /// construction-time position unless a cap has dropped it.
    pub fn trajectory(&self) -> &VecDeque<na::Vector2<f64>> {
        &self.trajectory
    }

    /// Caps retained history to the most recent `limit` positions,
    /// dropping the oldest entries. `None` restores the unbounded default.
    pub fn set_trajectory_limit(&mut self, limit: Option<usize>) {
        self.trajectory_limit = limit;
        self.enforce_trajectory_limit();
    }

    fn enforce_trajectory_limit(&mut self) {
        if let Some(limit) = self.trajectory_limit {
            while self.trajectory.len() > limit {
                self.trajectory.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;
    use test_case::test_case;

    fn leo_satellite() -> Satellite {
        Satellite::new(
            "Aqua",
            2_934.0,
            7.0e6,
            7_660.0,
            0.0,
            0.0,
            SatelliteCategory::Transmitter,
            0.0011,
        )
    }

    #[test_case(0.0; "placed on the x axis")]
    #[test_case(47.5; "placed at an arbitrary angle")]
    #[test_case(270.0; "placed on the negative y axis")]
    fn orbit_radius_invariant_holds_after_every_step(angle: f64) {
        let mut satellite = Satellite::new(
            "Test",
            100.0,
            7.0e6,
            7_500.0,
            angle,
            0.0,
            SatelliteCategory::Receiver,
            0.0009,
        );
        for _ in 0..500 {
            satellite.advance(10.0);
            assert_abs_diff_eq!(satellite.body.position.magnitude(), 7.0e6, epsilon = 1e-3);
        }
    }

    #[test]
    fn advance_is_additive_in_dt() {
        let mut split = leo_satellite();
        split.advance(3.0);
        split.advance(7.0);

        let mut whole = leo_satellite();
        whole.advance(10.0);

        assert_abs_diff_eq!(split.body.position, whole.body.position, epsilon = 1e-3);
    }

    #[test]
    fn construction_places_satellite_from_angle() {
        let satellite = Satellite::new(
            "Test",
            100.0,
            1_000.0,
            50.0,
            90.0,
            0.0,
            SatelliteCategory::Receiver,
            0.01,
        );
        assert_abs_diff_eq!(
            satellite.body.position,
            na::Vector2::new(0.0, 1_000.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            satellite.velocity,
            na::Vector2::new(-50.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn velocity_keeps_its_construction_value() {
        let mut satellite = leo_satellite();
        let initial = satellite.velocity;
        for _ in 0..100 {
            satellite.advance(10.0);
        }
        assert_eq!(satellite.velocity, initial);
    }

    #[test]
    fn trajectory_grows_one_entry_per_step() {
        let mut satellite = leo_satellite();
        let constructed = satellite.body.position;
        assert_eq!(satellite.trajectory().len(), 1);
        assert_eq!(satellite.trajectory()[0], constructed);

        for i in 1..=5 {
            satellite.advance(10.0);
            assert_eq!(satellite.trajectory().len(), i + 1);
        }
        assert_eq!(*satellite.trajectory().back().unwrap(), satellite.body.position);
    }

    #[test]
    fn trajectory_cap_keeps_the_most_recent_positions() {
        let mut satellite = leo_satellite();
        satellite.set_trajectory_limit(Some(3));
        for _ in 0..10 {
            satellite.advance(10.0);
        }
        assert_eq!(satellite.trajectory().len(), 3);
        assert_eq!(*satellite.trajectory().back().unwrap(), satellite.body.position);
    }

    #[test_case("Receiver", Some(SatelliteCategory::Receiver); "receiver")]
    #[test_case("Transmitter", Some(SatelliteCategory::Transmitter); "transmitter")]
    #[test_case("Repeater", None; "unknown name")]
    fn test_category_from_name(name: &str, expected: Option<SatelliteCategory>) {
        assert_eq!(SatelliteCategory::from_name(name), expected);
    }
}
