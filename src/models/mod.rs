pub mod body;
pub mod ground_station;
pub mod satellite;

pub use body::CelestialBody;
pub use ground_station::GroundStation;
pub use satellite::Satellite;
