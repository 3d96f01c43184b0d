use std::fmt;

use nalgebra as na;

use crate::models::body::CelestialBody;
use crate::models::satellite::Satellite;

/// Carried as metadata only; does not affect detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationCategory {
    Communicating,
    Tracking,
    Both,
}

impl StationCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Communicating" => Some(StationCategory::Communicating),
            "Tracking" => Some(StationCategory::Tracking),
            "Both" => Some(StationCategory::Both),
            _ => None,
        }
    }
}

impl fmt::Display for StationCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StationCategory::Communicating => write!(f, "Communicating"),
            StationCategory::Tracking => write!(f, "Tracking"),
            StationCategory::Both => write!(f, "Both"),
        }
    }
}

/// A fixed station that registers satellites inside its detection range.
#[derive(Debug, Clone)]
pub struct GroundStation {
    pub body: CelestialBody,
    pub detection_range: f64, // non-negative
    pub category: StationCategory,
}

impl GroundStation {
    pub fn new(
        name: &str,
        mass: f64,
        x: f64,
        y: f64,
        detection_range: f64,
        category: StationCategory,
    ) -> Self {
        GroundStation {
            body: CelestialBody::new(name, mass, na::Vector2::new(x, y)),
            detection_range,
            category,
        }
    }

    /// True iff the satellite's current position is within detection
    /// range, boundary included.
    pub fn can_detect(&self, satellite: &Satellite) -> bool {
        self.body.distance_to(&satellite.body) <= self.detection_range
    }
}
