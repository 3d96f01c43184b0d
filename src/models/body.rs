use nalgebra as na;

/// Shared record for everything the simulation tracks: satellites and
/// ground stations both have a name, a mass and a planar position.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub mass: f64, // kg, informational only
    pub position: na::Vector2<f64>,
}

impl CelestialBody {
    pub fn new(name: &str, mass: f64, position: na::Vector2<f64>) -> Self {
        CelestialBody {
            name: name.to_string(),
            mass,
            position,
        }
    }

    pub fn distance_to(&self, other: &CelestialBody) -> f64 {
        (self.position - other.position).magnitude()
    }
}
